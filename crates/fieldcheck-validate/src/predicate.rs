//! The calling contract every check follows.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A predicate's judgment of a value.
///
/// `message` only carries meaning when `valid` is false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub valid: bool,
    pub message: String,
}

impl Verdict {
    /// The value conforms.
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// The value does not conform, for the given reason.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

type PredicateFn = dyn Fn(&Value) -> Result<Verdict> + Send + Sync;

/// A shareable check applied to one value.
///
/// Predicates may block (an existence lookup, say) but must report faults
/// through the returned error rather than by panicking.
///
/// ## Example
///
/// ```rust
/// use fieldcheck_validate::{Predicate, Verdict};
/// use serde_json::json;
///
/// let positive = Predicate::named("positive", |v| {
///     Ok(match v.as_i64() {
///         Some(n) if n > 0 => Verdict::pass(),
///         _ => Verdict::fail("must be positive"),
///     })
/// });
///
/// assert!(positive.check(&json!(4)).unwrap().valid);
/// assert!(!positive.check(&json!(-4)).unwrap().valid);
/// ```
#[derive(Clone)]
pub struct Predicate {
    name: Arc<str>,
    check: Arc<PredicateFn>,
}

impl Predicate {
    /// Wrap a closure as an anonymous predicate.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&Value) -> Result<Verdict> + Send + Sync + 'static,
    {
        Self::named("custom", check)
    }

    /// Wrap a closure under a name shown in logs and `Debug` output.
    pub fn named<F>(name: impl Into<Arc<str>>, check: F) -> Self
    where
        F: Fn(&Value) -> Result<Verdict> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            check: Arc::new(check),
        }
    }

    /// Apply the predicate to a value.
    pub fn check(&self, value: &Value) -> Result<Verdict> {
        (self.check)(value)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.name).finish()
    }
}
