//! Ready-made predicates.
//!
//! The composite builders here ([`is_between`], [`is_equal`],
//! [`is_transformable_to`]) take a [`Transformer`] and a [`Comparer`] so the
//! same check works for any parsed type. [`string`] wraps them for the common
//! case of numbers arriving as strings.

pub mod string;

use crate::compare::Comparer;
use crate::error::{Result, ValidateError};
use crate::predicate::{Predicate, Verdict};
use crate::transform::Transformer;
use crate::value::{value_len, ValueKind};
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::Arc;

/// Passes when `transformer` can convert the value.
///
/// An unparsable input yields an invalid verdict carrying `message`; any
/// other transform fault (a number where a string was expected, say) is a
/// hard error.
pub fn is_transformable_to<T>(transformer: T, message: impl Into<String>) -> Predicate
where
    T: Transformer + 'static,
{
    let message = message.into();
    Predicate::named("is_transformable_to", move |v| {
        match transformer.transform(v) {
            Ok(_) => Ok(Verdict::pass()),
            Err(ValidateError::Unparsable { .. }) => Ok(Verdict::fail(message.clone())),
            Err(e) => Err(e),
        }
    })
}

/// Transforms the value and checks it equals `right`.
pub fn is_equal<T, C>(transformer: T, comparer: C, right: impl Into<Value>) -> Predicate
where
    T: Transformer + 'static,
    C: Comparer + 'static,
{
    let right = right.into();
    Predicate::named("is_equal", move |v| {
        let value = transformer.transform(v)?;
        operands_fit(transformer.target(), &[&value, &right])?;

        if comparer.compare(&value, &right)? == Ordering::Equal {
            Ok(Verdict::pass())
        } else {
            Ok(Verdict::fail(format!("must be equal to {right}")))
        }
    })
}

/// Transforms the value and checks `lower <= value <= upper`.
pub fn is_between<T, C>(
    transformer: T,
    comparer: C,
    lower: impl Into<Value>,
    upper: impl Into<Value>,
) -> Predicate
where
    T: Transformer + 'static,
    C: Comparer + 'static,
{
    let lower = lower.into();
    let upper = upper.into();
    Predicate::named("is_between", move |v| {
        let value = transformer.transform(v)?;
        operands_fit(transformer.target(), &[&value, &lower, &upper])?;

        let above_lower = comparer.compare(&lower, &value)? != Ordering::Greater;
        let below_upper = comparer.compare(&value, &upper)? != Ordering::Greater;
        if above_lower && below_upper {
            Ok(Verdict::pass())
        } else {
            Ok(Verdict::fail(format!("must be between {lower} and {upper}")))
        }
    })
}

/// Checks the value has exactly `length` elements (chars for strings).
pub fn is_length(length: usize) -> Predicate {
    Predicate::named("is_length", move |v| {
        if checked_len(v)? == length {
            Ok(Verdict::pass())
        } else {
            Ok(Verdict::fail(format!("Must have length {length}")))
        }
    })
}

/// Checks `lower <= len(value) <= upper`.
pub fn is_length_between(lower: usize, upper: usize) -> Predicate {
    Predicate::named("is_length_between", move |v| {
        let len = checked_len(v)?;
        if (lower..=upper).contains(&len) {
            Ok(Verdict::pass())
        } else {
            Ok(Verdict::fail(format!(
                "Must be between length {lower} and {upper}"
            )))
        }
    })
}

/// Checks the value is of `kind`.
pub fn is_kind(kind: ValueKind) -> Predicate {
    Predicate::named(kind_predicate_name(kind), move |v| {
        if kind.accepts(v) {
            Ok(Verdict::pass())
        } else {
            Ok(Verdict::fail(format!("must be a {kind}")))
        }
    })
}

pub fn is_bool() -> Predicate {
    is_kind(ValueKind::Bool)
}

pub fn is_int() -> Predicate {
    is_kind(ValueKind::Int)
}

pub fn is_uint() -> Predicate {
    is_kind(ValueKind::Uint)
}

/// Passes any JSON number, integers included.
pub fn is_float() -> Predicate {
    is_kind(ValueKind::Float)
}

pub fn is_string() -> Predicate {
    is_kind(ValueKind::String)
}

pub fn is_array() -> Predicate {
    is_kind(ValueKind::Array)
}

pub fn is_object() -> Predicate {
    is_kind(ValueKind::Object)
}

/// Shorthand for [`string::is_int`].
pub fn is_string_int() -> Predicate {
    string::is_int()
}

/// Run an existing predicate under a different message.
///
/// Passing verdicts and hard errors are returned unchanged.
pub fn with_message(predicate: Predicate, message: impl Into<String>) -> Predicate {
    let message: Arc<str> = message.into().into();
    let name = predicate.name().to_string();
    Predicate::named(name, move |v| {
        let verdict = predicate.check(v)?;
        if verdict.valid {
            Ok(verdict)
        } else {
            Ok(Verdict::fail(&*message))
        }
    })
}

fn checked_len(value: &Value) -> Result<usize> {
    value_len(value).ok_or_else(|| ValidateError::InvalidKind(ValueKind::of(value)))
}

/// Reject operands that cannot be read as the transformer's target kind.
///
/// Checked against the target rather than [`ValueKind::of`], which sorts
/// unsigned values by magnitude.
fn operands_fit(target: ValueKind, values: &[&Value]) -> Result<()> {
    if values.iter().all(|v| target.accepts(v)) {
        Ok(())
    } else {
        Err(ValidateError::MixedTypes)
    }
}

fn kind_predicate_name(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Null => "is_null",
        ValueKind::Bool => "is_bool",
        ValueKind::Int => "is_int",
        ValueKind::Uint => "is_uint",
        ValueKind::Float => "is_float",
        ValueKind::String => "is_string",
        ValueKind::Array => "is_array",
        ValueKind::Object => "is_object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{FloatComparer, IntComparer, UintComparer};
    use crate::transform::{StringToFloat64, StringToInt, StringToUint};
    use serde_json::json;

    #[test]
    fn between_is_inclusive() {
        let p = is_between(StringToInt, IntComparer, 1, 10);

        assert!(p.check(&json!("1")).unwrap().valid);
        assert!(p.check(&json!("10")).unwrap().valid);

        let out = p.check(&json!("11")).unwrap();
        assert!(!out.valid);
        assert_eq!(out.message, "must be between 1 and 10");
    }

    #[test]
    fn between_propagates_parse_failures() {
        let p = is_between(StringToInt, IntComparer, 1, 10);
        assert!(p.check(&json!("ten")).is_err());
    }

    #[test]
    fn between_rejects_bounds_of_another_kind() {
        let p = is_between(StringToInt, IntComparer, 1, 2.5);
        assert!(matches!(
            p.check(&json!("2")),
            Err(ValidateError::MixedTypes)
        ));
    }

    #[test]
    fn float_bounds_may_be_written_as_integers() {
        let p = is_between(StringToFloat64, FloatComparer, 1, 2.5);
        assert!(p.check(&json!("2.0")).unwrap().valid);
        assert!(!p.check(&json!("3")).unwrap().valid);
    }

    #[test]
    fn uint_between_spans_i64_max() {
        let p = is_between(StringToUint, UintComparer, 1u64, 10u64);

        let out = p.check(&json!("18446744073709551615")).unwrap();
        assert!(!out.valid);
        assert_eq!(out.message, "must be between 1 and 10");
        assert!(p.check(&json!("7")).unwrap().valid);

        let wide = is_between(StringToUint, UintComparer, 0u64, u64::MAX);
        assert!(wide.check(&json!("9223372036854775807")).unwrap().valid);
        assert!(wide.check(&json!("9223372036854775808")).unwrap().valid);
    }

    #[test]
    fn uint_equal_spans_i64_max() {
        let p = is_equal(StringToUint, UintComparer, u64::MAX);

        let out = p.check(&json!("5")).unwrap();
        assert!(!out.valid);
        assert_eq!(out.message, format!("must be equal to {}", u64::MAX));
        assert!(p.check(&json!("18446744073709551615")).unwrap().valid);
    }

    #[test]
    fn equal() {
        let p = is_equal(StringToInt, IntComparer, 100);
        assert!(p.check(&json!("100")).unwrap().valid);
        assert_eq!(p.check(&json!("99")).unwrap().message, "must be equal to 100");
    }

    #[test]
    fn transformable() {
        let p = is_transformable_to(StringToInt, "must be an integer");
        assert!(p.check(&json!("54")).unwrap().valid);
        assert_eq!(p.check(&json!("x")).unwrap().message, "must be an integer");
        assert!(p.check(&json!(54)).is_err());
    }

    #[test]
    fn length_checks() {
        assert!(is_length(3).check(&json!("abc")).unwrap().valid);
        assert!(is_length(2).check(&json!([1, 2])).unwrap().valid);
        assert_eq!(
            is_length(2).check(&json!("abc")).unwrap().message,
            "Must have length 2"
        );
        assert!(matches!(
            is_length(2).check(&json!(42)),
            Err(ValidateError::InvalidKind(ValueKind::Int))
        ));

        let between = is_length_between(2, 4);
        assert!(between.check(&json!({"a": 1, "b": 2})).unwrap().valid);
        assert_eq!(
            between.check(&json!("abcde")).unwrap().message,
            "Must be between length 2 and 4"
        );
    }

    #[test]
    fn kind_checks() {
        assert!(is_int().check(&json!(3)).unwrap().valid);
        assert_eq!(is_int().check(&json!("3")).unwrap().message, "must be a int");
        assert!(is_float().check(&json!(3)).unwrap().valid);
        assert!(!is_bool().check(&json!(0)).unwrap().valid);
        assert!(is_object().check(&json!({})).unwrap().valid);
        assert_eq!(is_string().name(), "is_string");
    }

    #[test]
    fn message_override() {
        let p = with_message(is_int(), "age must be whole");
        assert_eq!(p.check(&json!(1.5)).unwrap().message, "age must be whole");
        assert!(p.check(&json!(2)).unwrap().valid);
        assert_eq!(p.name(), "is_int");
    }
}
