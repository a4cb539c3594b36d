//! Runs the classic dinner (five philosophers, three meals each) and logs the outcome.

use dining_philosophers::lifecycle::{setup_tracing, Table, TableConfig};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = TableConfig::default();
    info!(philosophers = config.philosophers, meals = config.meals, "Setting the table");
    let table = Table::new(config).map_err(|e| e.to_string())?;

    let span = tracing::info_span!("dinner");
    let report = match table.run().instrument(span).await {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "Dinner failed");
            return Err(e.to_string());
        }
    };

    for diner in &report.diners {
        info!(
            philosopher = %diner.philosopher,
            meals = diner.meals,
            attempts = diner.attempts,
            backoffs = diner.backoffs,
            "Diner summary"
        );
    }
    for fork in &report.forks {
        info!(fork = %fork.id, grants = fork.grants, "Fork summary");
    }

    info!(total_meals = report.total_meals(), "Application completed successfully");
    Ok(())
}
