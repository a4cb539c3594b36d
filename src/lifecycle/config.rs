//! # Table Configuration
//!
//! Everything that shapes a dinner: how many seats, how many meals, and how long the
//! unconstrained phases take. The defaults reproduce the classic five-philosopher,
//! three-meal exercise with human-scale delays; [`TableConfig::instant`] shrinks every
//! delay to (almost) nothing for tests.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::TableError;

/// Uniformly random delay between `min` and `max` (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayRange {
    pub min: Duration,
    pub max: Duration,
}

impl DelayRange {
    pub const ZERO: DelayRange = DelayRange::fixed(Duration::ZERO);

    pub const fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    pub const fn fixed(delay: Duration) -> Self {
        Self { min: delay, max: delay }
    }

    pub const fn millis(min: u64, max: u64) -> Self {
        Self::new(Duration::from_millis(min), Duration::from_millis(max))
    }

    pub fn sample(&self) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        let min = u64::try_from(self.min.as_micros()).unwrap_or(u64::MAX);
        let max = u64::try_from(self.max.as_micros()).unwrap_or(u64::MAX);
        // Saturated bounds can fall short of `min` for durations beyond u64 microseconds
        Duration::from_micros(rand::thread_rng().gen_range(min..=max)).clamp(self.min, self.max)
    }

    /// Sleeps for a sampled delay. A zero delay still yields to the scheduler once.
    pub async fn pause(&self) {
        let delay = self.sample();
        if delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Configuration for one dinner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Number of philosophers, and therefore forks.
    pub philosophers: usize,
    /// Meals each philosopher must finish before leaving.
    pub meals: u32,
    pub think: DelayRange,
    pub eat: DelayRange,
    /// Pause after a failed `TryAcquire`, before the next attempt.
    pub retry_backoff: DelayRange,
    /// Requests that may queue at a fork at once.
    pub fork_mailbox: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            philosophers: 5,
            meals: 3,
            think: DelayRange::millis(200, 400),
            eat: DelayRange::millis(200, 1000),
            retry_backoff: DelayRange::millis(0, 20),
            fork_mailbox: 1,
        }
    }
}

impl TableConfig {
    /// `philosophers` seats and `meals` meals with the default pacing.
    pub fn new(philosophers: usize, meals: u32) -> Self {
        Self {
            philosophers,
            meals,
            ..Self::default()
        }
    }

    /// Near-zero pacing. Retries keep a sub-millisecond jitter so symmetric philosophers
    /// do not retry in lockstep forever.
    pub fn instant(philosophers: usize, meals: u32) -> Self {
        Self {
            philosophers,
            meals,
            think: DelayRange::ZERO,
            eat: DelayRange::ZERO,
            retry_backoff: DelayRange::new(Duration::ZERO, Duration::from_micros(500)),
            fork_mailbox: 1,
        }
    }

    pub fn with_pacing(mut self, think: DelayRange, eat: DelayRange, retry_backoff: DelayRange) -> Self {
        self.think = think;
        self.eat = eat;
        self.retry_backoff = retry_backoff;
        self
    }

    pub fn validate(&self) -> Result<(), TableError> {
        if self.philosophers < 2 {
            return Err(TableError::InvalidConfig(format!(
                "a ring needs at least 2 philosophers, got {}",
                self.philosophers
            )));
        }
        if self.meals == 0 {
            return Err(TableError::InvalidConfig("meal target must be at least 1".into()));
        }
        if self.fork_mailbox == 0 {
            return Err(TableError::InvalidConfig("fork mailbox capacity must be at least 1".into()));
        }
        for (name, range) in [("think", self.think), ("eat", self.eat), ("retry_backoff", self.retry_backoff)] {
            if range.min > range.max {
                return Err(TableError::InvalidConfig(format!(
                    "{name} delay has min {:?} above max {:?}",
                    range.min, range.max
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_the_classic_table() {
        let config = TableConfig::default();
        assert_eq!(config.philosophers, 5);
        assert_eq!(config.meals, 3);
        assert_eq!(config.fork_mailbox, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sample_stays_in_range() {
        let range = DelayRange::millis(2, 5);
        for _ in 0..200 {
            let d = range.sample();
            assert!(d >= range.min && d <= range.max, "{d:?} out of range");
        }
        assert_eq!(DelayRange::fixed(Duration::from_millis(3)).sample(), Duration::from_millis(3));
    }

    #[test]
    fn test_sample_of_huge_range_does_not_wrap() {
        let open_ended = DelayRange::new(Duration::from_secs(1), Duration::MAX);
        let huge = DelayRange::new(Duration::from_secs(u64::MAX / 2), Duration::MAX);
        for range in [open_ended, huge] {
            for _ in 0..50 {
                let d = range.sample();
                assert!(d >= range.min && d <= range.max, "{d:?} out of range");
            }
        }
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(matches!(TableConfig::new(1, 3).validate(), Err(TableError::InvalidConfig(_))));
        assert!(matches!(TableConfig::new(5, 0).validate(), Err(TableError::InvalidConfig(_))));

        let mut config = TableConfig::instant(3, 1);
        config.fork_mailbox = 0;
        assert!(matches!(config.validate(), Err(TableError::InvalidConfig(_))));

        let inverted = TableConfig::instant(3, 1).with_pacing(
            DelayRange::millis(10, 1),
            DelayRange::ZERO,
            DelayRange::ZERO,
        );
        assert!(matches!(inverted.validate(), Err(TableError::InvalidConfig(_))));
    }
}
