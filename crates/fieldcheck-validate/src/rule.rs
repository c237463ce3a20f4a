//! Rules: the ordered checks bound to one field.

use crate::error::Result;
use crate::job::FuncJob;
use crate::predicate::{Predicate, Verdict};
use fieldcheck_jobs::{PoolConfig, WorkerPool};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named, ordered list of predicates bound to one input field.
///
/// ## Example
///
/// ```rust
/// use fieldcheck_validate::funcs;
/// use fieldcheck_validate::Rule;
/// use serde_json::json;
///
/// let rule = Rule::new("page_size")
///     .required()
///     .predicate(funcs::string::is_int())
///     .predicate(funcs::string::is_in_range_ints(1, 100));
///
/// let outcome = rule.execute(&json!("250")).unwrap();
/// assert!(!outcome.valid);
/// assert_eq!(outcome.messages, vec!["", "must be between 1 and 100"]);
/// ```
#[derive(Debug, Clone)]
pub struct Rule {
    key: String,
    predicates: Vec<Predicate>,
    required: bool,
    parallel: bool,
}

impl Rule {
    /// Create an optional, sequential rule with no predicates.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            predicates: Vec::new(),
            required: false,
            parallel: false,
        }
    }

    /// Create a rule from a list of predicates.
    pub fn with_predicates(
        key: impl Into<String>,
        predicates: impl IntoIterator<Item = Predicate>,
    ) -> Self {
        Self::new(key).predicates(predicates)
    }

    /// Append one predicate.
    pub fn predicate(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append several predicates, keeping their order.
    pub fn predicates(mut self, predicates: impl IntoIterator<Item = Predicate>) -> Self {
        self.predicates.extend(predicates);
        self
    }

    /// Report the field as missing when it is absent from the input.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Run this rule's predicates on their own worker pool.
    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// The predicates, in evaluation order.
    pub fn checks(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Append another rule's predicates. Flags on `self` are kept.
    pub(crate) fn merge(&mut self, other: Rule) {
        self.predicates.extend(other.predicates);
    }

    /// Evaluate every predicate against `value` with default pool bounds.
    pub fn execute(&self, value: &Value) -> Result<RuleOutcome> {
        self.execute_with(value, &PoolConfig::default())
    }

    /// Evaluate every predicate against `value`.
    ///
    /// Messages are collected in predicate order in both modes, and `valid`
    /// is whatever the last predicate said. The first hard error aborts the
    /// rule and no partial outcome is returned.
    pub fn execute_with(&self, value: &Value, pool: &PoolConfig) -> Result<RuleOutcome> {
        let mut outcome = RuleOutcome::new(&self.key, self.predicates.len());

        if self.parallel {
            let mut jobs = self.create_jobs(value)?;
            WorkerPool::with_config(jobs.len(), &mut jobs, *pool).run()?;

            for job in jobs {
                let verdict = self.checked(job.into_result())?;
                outcome.record(verdict);
            }
        } else {
            for predicate in &self.predicates {
                let verdict = self.checked(predicate.check(value))?;
                outcome.record(verdict);
            }
        }

        Ok(outcome)
    }

    fn create_jobs<'a>(&'a self, value: &'a Value) -> Result<Vec<FuncJob<'a>>> {
        self.predicates
            .iter()
            .map(|predicate| FuncJob::new(value, predicate))
            .collect()
    }

    fn checked(&self, result: Result<Verdict>) -> Result<Verdict> {
        if let Err(e) = &result {
            tracing::warn!(rule = %self.key, error = %e, "rule aborted by predicate error");
        }
        result
    }
}

/// The reduced result of running one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub key: String,
    /// Verdict of the last predicate evaluated, not the conjunction of all.
    pub valid: bool,
    /// One entry per predicate; passing predicates contribute an empty string.
    pub messages: Vec<String>,
}

impl RuleOutcome {
    fn new(key: &str, capacity: usize) -> Self {
        Self {
            key: key.to_string(),
            valid: true,
            messages: Vec::with_capacity(capacity),
        }
    }

    fn record(&mut self, verdict: Verdict) {
        self.messages.push(verdict.message);
        self.valid = verdict.valid;
    }
}
