//! The validator: every field's rule, run against one batch of values.

use crate::config::{ValidatorConfig, ValidatorOption};
use crate::error::{Result, ValidateError};
use crate::job::RuleJob;
use crate::predicate::Predicate;
use crate::rule::Rule;
use crate::value::{ValueKind, Values};
use fieldcheck_jobs::{Job, WorkerPool};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Message recorded for a required field missing from the input.
pub const REQUIRED_MESSAGE: &str = "is required";

/// Per-field validation report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Messages keyed by field name.
    pub errors: HashMap<String, Vec<String>>,
    /// True iff `errors` is empty.
    pub valid: bool,
}

impl Default for Response {
    fn default() -> Self {
        Self {
            errors: HashMap::new(),
            valid: true,
        }
    }
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one message for a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_default().push(message.into());
        self.valid = false;
    }

    /// Record several messages for a field, keeping their order.
    pub fn add_all(&mut self, field: impl Into<String>, messages: Vec<String>) {
        self.errors.entry(field.into()).or_default().extend(messages);
        self.valid = false;
    }

    /// Messages recorded for a field.
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Names of every field with at least one message.
    pub fn field_names(&self) -> Vec<&str> {
        self.errors.keys().map(|s| s.as_str()).collect()
    }
}

/// An immutable set of rules keyed by field name.
///
/// Rules are fixed once the validator is built, so `validate` can be called
/// from many threads at once. [`add_rule`](Self::add_rule) returns a new
/// validator instead of mutating this one.
///
/// ## Example
///
/// ```rust
/// use fieldcheck_validate::prelude::*;
/// use serde_json::json;
///
/// let validator = Validator::builder()
///     .rule(Rule::new("username").required())
///     .rule(Rule::new("page_size").predicate(funcs::string::is_int()))
///     .build()
///     .unwrap();
///
/// let response = validator
///     .validate_json(&json!({ "page_size": "abc" }))
///     .unwrap();
///
/// assert!(!response.valid);
/// assert_eq!(response.errors["username"], vec!["is required"]);
/// assert_eq!(response.errors["page_size"], vec!["must be an integer"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: HashMap<String, Rule>,
    config: ValidatorConfig,
}

impl Validator {
    /// Build a validator, merging rules that share a key and applying
    /// `options` in order.
    pub fn new(
        rules: impl IntoIterator<Item = Rule>,
        options: impl IntoIterator<Item = ValidatorOption>,
    ) -> Result<Self> {
        let mut config = ValidatorConfig::default();
        for option in options {
            config.apply(option)?;
        }
        Self::with_config(rules, config)
    }

    /// Build a validator from a prepared config.
    pub fn with_config(
        rules: impl IntoIterator<Item = Rule>,
        config: ValidatorConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rules: merge_rules(rules),
            config,
        })
    }

    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    pub fn rules(&self) -> &HashMap<String, Rule> {
        &self.rules
    }

    pub fn rule(&self, key: &str) -> Option<&Rule> {
        self.rules.get(key)
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn is_parallel(&self) -> bool {
        self.config.parallel
    }

    /// Return a copy with `predicates` appended to the rule for `key`,
    /// creating an optional, sequential rule if there is none.
    pub fn add_rule(
        &self,
        key: impl Into<String>,
        predicates: impl IntoIterator<Item = Predicate>,
    ) -> Self {
        let mut next = self.clone();
        let rule = Rule::with_predicates(key, predicates);
        insert_rule(&mut next.rules, rule);
        next
    }

    /// Run every applicable rule against `values`.
    ///
    /// Returns a complete [`Response`], or the first hard error in job order
    /// with no partial report.
    pub fn validate(&self, values: &Values) -> Result<Response> {
        self.run(
            values.len(),
            |key| values.contains_key(key),
            values.iter().map(|(k, v)| (k.as_str(), v)),
        )
    }

    /// Validate a JSON object payload directly.
    pub fn validate_json(&self, payload: &Value) -> Result<Response> {
        let object = payload
            .as_object()
            .ok_or_else(|| ValidateError::NotAnObject(ValueKind::of(payload)))?;

        self.run(
            object.len(),
            |key| object.contains_key(key),
            object.iter().map(|(k, v)| (k.as_str(), v)),
        )
    }

    /// Run `validate` on tokio's blocking pool.
    #[cfg(feature = "tokio")]
    pub async fn validate_async(self: std::sync::Arc<Self>, values: Values) -> Result<Response> {
        tokio::task::spawn_blocking(move || self.validate(&values))
            .await
            .map_err(|e| {
                ValidateError::Pool(fieldcheck_jobs::PoolError::WorkerPanicked(e.to_string()))
            })?
    }

    fn run<'v>(
        &self,
        num_values: usize,
        contains: impl Fn(&str) -> bool,
        entries: impl Iterator<Item = (&'v str, &'v Value)>,
    ) -> Result<Response> {
        let mut response = Response::new();

        for rule in self.rules.values() {
            if rule.is_required() && !contains(rule.key()) {
                response.add(rule.key(), REQUIRED_MESSAGE);
            }
        }

        let mut jobs = Vec::new();
        for (key, value) in entries {
            if let Some(rule) = self.rules.get(key) {
                jobs.push(RuleJob::new(value, rule, self.config.pool)?);
            }
        }

        tracing::debug!(
            fields = num_values,
            rules = jobs.len(),
            parallel = self.config.parallel,
            "validating"
        );

        if self.config.parallel {
            WorkerPool::with_config(num_values, &mut jobs, self.config.pool).run()?;
        }

        for mut job in jobs {
            if !self.config.parallel {
                job.execute();
            }

            let key = job.key().to_string();
            let outcome = match job.into_result() {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::warn!(field = %key, error = %e, "validation aborted");
                    return Err(e);
                }
            };

            if !outcome.valid {
                response.add_all(outcome.key, outcome.messages);
            }
        }

        tracing::debug!(valid = response.valid, "validation finished");
        Ok(response)
    }
}

fn insert_rule(rules: &mut HashMap<String, Rule>, rule: Rule) {
    match rules.entry(rule.key().to_string()) {
        Entry::Occupied(mut existing) => existing.get_mut().merge(rule),
        Entry::Vacant(slot) => {
            slot.insert(rule);
        }
    }
}

fn merge_rules(rules: impl IntoIterator<Item = Rule>) -> HashMap<String, Rule> {
    let mut merged = HashMap::new();
    for rule in rules {
        insert_rule(&mut merged, rule);
    }
    merged
}

/// Collects rules and options before producing a [`Validator`].
#[derive(Debug, Default)]
pub struct ValidatorBuilder {
    rules: Vec<Rule>,
    options: Vec<ValidatorOption>,
}

impl ValidatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule. Rules sharing a key are merged when the validator is built.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add predicates for a key, creating the rule if needed.
    pub fn add_rule(
        self,
        key: impl Into<String>,
        predicates: impl IntoIterator<Item = Predicate>,
    ) -> Self {
        self.rule(Rule::with_predicates(key, predicates))
    }

    /// Enable or disable field-level parallel dispatch.
    pub fn parallel(self, enabled: bool) -> Self {
        self.option(ValidatorOption::Parallel(enabled))
    }

    pub fn pool(self, pool: fieldcheck_jobs::PoolConfig) -> Self {
        self.option(ValidatorOption::Pool(pool))
    }

    pub fn option(mut self, option: ValidatorOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn build(self) -> Result<Validator> {
        Validator::new(self.rules, self.options)
    }
}
