//! Pure data structures shared by the forks, the philosophers and the table.

pub mod event;
pub mod fork;
pub mod philosopher;

pub use event::*;
pub use fork::*;
pub use philosopher::*;
