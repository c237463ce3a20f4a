//! Pool jobs for predicate and rule applications.
//!
//! Both job kinds borrow their subject and store their own outcome, which
//! the owner reads back after the pool has joined.

use crate::error::{Result, ValidateError};
use crate::predicate::{Predicate, Verdict};
use crate::rule::{Rule, RuleOutcome};
use fieldcheck_jobs::{Job, PoolConfig};
use serde_json::Value;

fn subject(value: &Value) -> Result<&Value> {
    if value.is_null() {
        Err(ValidateError::MissingValue)
    } else {
        Ok(value)
    }
}

/// One predicate applied to one value.
pub struct FuncJob<'a> {
    value: &'a Value,
    predicate: &'a Predicate,
    outcome: Option<Result<Verdict>>,
}

impl<'a> FuncJob<'a> {
    /// Fails with [`ValidateError::MissingValue`] when `value` is null.
    pub fn new(value: &'a Value, predicate: &'a Predicate) -> Result<Self> {
        Ok(Self {
            value: subject(value)?,
            predicate,
            outcome: None,
        })
    }

    pub fn is_done(&self) -> bool {
        self.outcome.is_some()
    }

    /// The predicate's verdict or hard error.
    pub fn into_result(self) -> Result<Verdict> {
        self.outcome
            .unwrap_or_else(|| Err(ValidateError::Incomplete(self.predicate.name().to_string())))
    }
}

impl Job for FuncJob<'_> {
    fn execute(&mut self) {
        self.outcome = Some(self.predicate.check(self.value));
    }

    fn name(&self) -> &str {
        self.predicate.name()
    }
}

/// One rule applied to one value.
pub struct RuleJob<'a> {
    value: &'a Value,
    rule: &'a Rule,
    pool: PoolConfig,
    outcome: Option<Result<RuleOutcome>>,
}

impl<'a> RuleJob<'a> {
    /// Fails with [`ValidateError::MissingValue`] when `value` is null.
    ///
    /// `pool` bounds the rule's own worker pool if the rule is parallel.
    pub fn new(value: &'a Value, rule: &'a Rule, pool: PoolConfig) -> Result<Self> {
        Ok(Self {
            value: subject(value)?,
            rule,
            pool,
            outcome: None,
        })
    }

    pub fn key(&self) -> &str {
        self.rule.key()
    }

    pub fn is_done(&self) -> bool {
        self.outcome.is_some()
    }

    /// The rule's outcome or hard error.
    pub fn into_result(self) -> Result<RuleOutcome> {
        self.outcome
            .unwrap_or_else(|| Err(ValidateError::Incomplete(self.rule.key().to_string())))
    }
}

impl Job for RuleJob<'_> {
    fn execute(&mut self) {
        self.outcome = Some(self.rule.execute_with(self.value, &self.pool));
    }

    fn name(&self) -> &str {
        self.rule.key()
    }
}
