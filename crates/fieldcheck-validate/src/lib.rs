//! # fieldcheck Validation
//!
//! Rule execution engine for fieldcheck. A [`Validator`] maps field names to
//! [`Rule`]s, each an ordered list of [`Predicate`]s, and checks a batch of
//! named JSON values against them.
//!
//! ## Example
//!
//! ```rust
//! use fieldcheck_validate::prelude::*;
//! use serde_json::json;
//!
//! let validator = Validator::builder()
//!     .rule(Rule::new("email").required().predicate(funcs::string::is_email()))
//!     .rule(Rule::new("page_size").predicate(funcs::string::is_in_range_ints(1, 100)))
//!     .parallel(true)
//!     .build()
//!     .unwrap();
//!
//! let response = validator
//!     .validate_json(&json!({ "email": "jane@example.com", "page_size": "53" }))
//!     .unwrap();
//!
//! assert!(response.valid);
//! ```
//!
//! ## Execution
//!
//! Two independent switches decide where work runs:
//!
//! - `ValidatorConfig::parallel` dispatches one job per field to a worker
//!   pool instead of looping over fields.
//! - `Rule::parallel` runs that rule's predicates on their own pool, which
//!   pays off when predicates block on I/O.
//!
//! Either way messages for a field keep predicate order, and a rule's
//! `valid` flag is the verdict of its *last* predicate.
//!
//! ## Errors
//!
//! A predicate that judges a value non-conforming returns an invalid
//! [`Verdict`]; that is reported in the [`Response`]. A predicate that
//! cannot judge (wrong input type, say) returns a [`ValidateError`], which
//! aborts the whole `validate` call.

mod config;
mod error;
mod job;
mod predicate;
mod rule;
mod validator;
mod value;

pub mod compare;
pub mod funcs;
pub mod transform;

pub use config::{ValidatorConfig, ValidatorOption};
pub use error::{Result, ValidateError};
pub use fieldcheck_jobs::PoolConfig;
pub use job::{FuncJob, RuleJob};
pub use predicate::{Predicate, Verdict};
pub use rule::{Rule, RuleOutcome};
pub use validator::{Response, Validator, ValidatorBuilder, REQUIRED_MESSAGE};
pub use value::{ValueKind, Values};

/// Prelude module for validation
pub mod prelude {
    pub use crate::compare::{Comparer, FloatComparer, IntComparer, UintComparer};
    pub use crate::config::{ValidatorConfig, ValidatorOption};
    pub use crate::error::{Result, ValidateError};
    pub use crate::funcs;
    pub use crate::predicate::{Predicate, Verdict};
    pub use crate::rule::{Rule, RuleOutcome};
    pub use crate::transform::{
        StringToBool, StringToFloat32, StringToFloat64, StringToInt, StringToUint, Transformer,
    };
    pub use crate::validator::{Response, Validator, ValidatorBuilder};
    pub use crate::value::{ValueKind, Values};
    pub use fieldcheck_jobs::PoolConfig;
}
