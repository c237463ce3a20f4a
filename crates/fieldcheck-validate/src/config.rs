//! Validator configuration.

use crate::error::{Result, ValidateError};
use fieldcheck_jobs::PoolConfig;
use serde::{Deserialize, Serialize};

/// Settings fixed when a [`Validator`](crate::Validator) is built.
///
/// Can be loaded from JSON; missing fields take their defaults:
///
/// ```rust
/// use fieldcheck_validate::ValidatorConfig;
///
/// let config = ValidatorConfig::from_json(r#"{"parallel": true, "pool": {"max_workers": 64}}"#).unwrap();
/// assert!(config.parallel);
/// assert_eq!(config.pool.max_workers, 64);
/// assert_eq!(config.pool.min_workers, 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Dispatch rules to a worker pool instead of running them in a loop.
    /// Independent of each rule's own `parallel` flag.
    pub parallel: bool,
    /// Worker bounds shared by the field-level pool and every rule's pool.
    pub pool: PoolConfig,
}

impl ValidatorConfig {
    /// Parse and check a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.pool
            .validate()
            .map_err(|e| ValidateError::ConfigError(e.to_string()))
    }

    /// Apply one option on top of the current settings.
    pub fn apply(&mut self, option: ValidatorOption) -> Result<()> {
        match option {
            ValidatorOption::Parallel(enabled) => self.parallel = enabled,
            ValidatorOption::Pool(pool) => {
                pool.validate()
                    .map_err(|e| ValidateError::ConfigError(e.to_string()))?;
                self.pool = pool;
            }
        }
        Ok(())
    }
}

/// A construction-time option, applied in the order given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorOption {
    /// Turn field-level parallel dispatch on or off.
    Parallel(bool),
    /// Replace the worker bounds.
    Pool(PoolConfig),
}

impl ValidatorOption {
    pub fn parallel(enabled: bool) -> Self {
        Self::Parallel(enabled)
    }

    pub fn pool(pool: PoolConfig) -> Self {
        Self::Pool(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sequential() {
        let config = ValidatorConfig::default();
        assert!(!config.parallel);
        assert_eq!(config.pool, PoolConfig::default());
    }

    #[test]
    fn options_apply_in_order() {
        let mut config = ValidatorConfig::default();
        config.apply(ValidatorOption::parallel(true)).unwrap();
        config.apply(ValidatorOption::parallel(false)).unwrap();
        assert!(!config.parallel);
    }

    #[test]
    fn bad_pool_option_is_rejected() {
        let mut config = ValidatorConfig::default();
        let bad = PoolConfig::default().min_workers(10).max_workers(1);

        assert!(matches!(
            config.apply(ValidatorOption::pool(bad)),
            Err(ValidateError::ConfigError(_))
        ));
        assert_eq!(config.pool, PoolConfig::default());
    }

    #[test]
    fn from_json_validates() {
        assert!(ValidatorConfig::from_json("{}").is_ok());
        assert!(matches!(
            ValidatorConfig::from_json(r#"{"pool": {"min_workers": 0}}"#),
            Err(ValidateError::ConfigError(_))
        ));
        assert!(matches!(
            ValidatorConfig::from_json("not json"),
            Err(ValidateError::Json(_))
        ));
    }
}
