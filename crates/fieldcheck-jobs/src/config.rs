use crate::error::{PoolError, Result};
use serde::{Deserialize, Serialize};

/// Lower bound on the number of workers a pool will start.
pub const MIN_WORKERS: usize = 2;

/// Upper bound on the number of workers a pool will start.
pub const MAX_WORKERS: usize = 20_000;

/// Worker count bounds for a [`WorkerPool`](crate::WorkerPool).
///
/// Requested worker counts are clamped into `[min_workers, max_workers]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub min_workers: usize,
    pub max_workers: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            min_workers: MIN_WORKERS,
            max_workers: MAX_WORKERS,
        }
    }
}

impl PoolConfig {
    /// Create a config with explicit bounds.
    pub fn new(min_workers: usize, max_workers: usize) -> Result<Self> {
        let config = Self {
            min_workers,
            max_workers,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn min_workers(mut self, n: usize) -> Self {
        self.min_workers = n;
        self
    }

    pub fn max_workers(mut self, n: usize) -> Self {
        self.max_workers = n;
        self
    }

    /// Check that the bounds describe a non-empty range.
    pub fn validate(&self) -> Result<()> {
        if self.min_workers == 0 {
            return Err(PoolError::ConfigError(
                "min_workers must be at least 1".to_string(),
            ));
        }
        if self.max_workers < self.min_workers {
            return Err(PoolError::ConfigError(format!(
                "max_workers ({}) must not be below min_workers ({})",
                self.max_workers, self.min_workers
            )));
        }
        Ok(())
    }

    /// Clamp a requested worker count into the configured bounds.
    ///
    /// Negative requests are raised to the floor.
    pub fn clamp(&self, requested: isize) -> usize {
        let requested = usize::try_from(requested).unwrap_or(0);
        requested.clamp(self.min_workers, self.max_workers)
    }
}
