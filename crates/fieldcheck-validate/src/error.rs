//! Hard errors raised while validating.
//!
//! An invalid value is *not* an error: predicates report that through a
//! [`Verdict`](crate::Verdict). The variants here describe faults that abort
//! the enclosing rule or `validate` call.

use crate::value::ValueKind;
use fieldcheck_jobs::PoolError;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("{value} is of type {actual}, not {expected}")]
    TypeMismatch {
        value: Value,
        actual: ValueKind,
        expected: ValueKind,
    },

    #[error("{value:?} cannot be parsed as {target}")]
    Unparsable { value: String, target: ValueKind },

    #[error("Can't take the length of a {0}")]
    InvalidKind(ValueKind),

    #[error("Values must all have the same type")]
    MixedTypes,

    #[error("Must pass a valid value")]
    MissingValue,

    #[error("Job '{0}' finished without a result")]
    Incomplete(String),

    #[error("Input must be a JSON object, got {0}")]
    NotAnObject(ValueKind),

    #[error("Predicate failed: {0}")]
    Predicate(String),

    #[error("Worker pool error: {0}")]
    Pool(#[from] PoolError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ValidateError {
    /// A value had the wrong shape for the operation.
    pub fn type_mismatch(value: &Value, expected: ValueKind) -> Self {
        Self::TypeMismatch {
            value: value.clone(),
            actual: ValueKind::of(value),
            expected,
        }
    }

    /// Free-form failure raised by a user-supplied predicate.
    pub fn predicate(message: impl Into<String>) -> Self {
        Self::Predicate(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ValidateError>;
