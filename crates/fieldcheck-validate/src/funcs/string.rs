//! Predicates for values that arrive as strings.
//!
//! Query strings and form fields carry numbers as text, so these checks parse
//! first and judge the parsed value. A non-string input is a hard error.

use super::{is_between, is_equal, is_transformable_to};
use crate::compare::IntComparer;
use crate::error::ValidateError;
use crate::predicate::{Predicate, Verdict};
use crate::transform::{
    StringToBool, StringToFloat32, StringToFloat64, StringToInt, StringToUint, Transformer,
};
use crate::value::ValueKind;
use regex::Regex;
use std::sync::OnceLock;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,4}$").expect("email pattern is valid")
    })
}

fn parses_as<T: Transformer + 'static>(transformer: T, message: &str) -> Predicate {
    is_transformable_to(transformer, message)
}

fn parses_as_kind<T: Transformer + 'static>(transformer: T) -> Predicate {
    let message = format!("must be a {}", transformer.target());
    is_transformable_to(transformer, message)
}

/// The string holds a signed integer.
pub fn is_int() -> Predicate {
    parses_as(StringToInt, "must be an integer")
}

/// The string holds an unsigned integer.
pub fn is_uint() -> Predicate {
    parses_as(StringToUint, "must be an unsigned integer")
}

/// The string holds a float that fits in 32 bits.
pub fn is_float32() -> Predicate {
    parses_as_kind(StringToFloat32)
}

/// The string holds a 64 bit float.
pub fn is_float64() -> Predicate {
    parses_as_kind(StringToFloat64)
}

/// The string holds a boolean.
pub fn is_bool() -> Predicate {
    parses_as_kind(StringToBool)
}

/// The string holds an integer in `lower..=upper`.
pub fn is_in_range_ints(lower: i64, upper: i64) -> Predicate {
    is_between(StringToInt, IntComparer, lower, upper)
}

/// The string holds exactly `right`.
pub fn is_equal_to_int(right: i64) -> Predicate {
    is_equal(StringToInt, IntComparer, right)
}

/// The string looks like an email address.
pub fn is_email() -> Predicate {
    Predicate::named("is_email", |v| {
        let email = v
            .as_str()
            .ok_or_else(|| ValidateError::type_mismatch(v, ValueKind::String))?;

        if email_regex().is_match(email) {
            Ok(Verdict::pass())
        } else {
            Ok(Verdict::fail("Must be an email address"))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integers() {
        assert!(is_int().check(&json!("53")).unwrap().valid);
        assert_eq!(is_int().check(&json!("abc")).unwrap().message, "must be an integer");
        assert!(is_int().check(&json!(53)).is_err());

        assert!(is_uint().check(&json!("8")).unwrap().valid);
        assert!(!is_uint().check(&json!("-8")).unwrap().valid);
    }

    #[test]
    fn floats_and_bools() {
        assert!(is_float64().check(&json!("4.5")).unwrap().valid);
        assert_eq!(is_float32().check(&json!("four")).unwrap().message, "must be a float");
        assert!(is_bool().check(&json!("TRUE")).unwrap().valid);
        assert_eq!(is_bool().check(&json!("yes")).unwrap().message, "must be a bool");
    }

    #[test]
    fn ranges() {
        let p = is_in_range_ints(1, 100);
        assert!(p.check(&json!("53")).unwrap().valid);
        assert_eq!(p.check(&json!("0")).unwrap().message, "must be between 1 and 100");
        assert!(is_equal_to_int(100).check(&json!("100")).unwrap().valid);
    }

    #[test]
    fn email() {
        assert!(is_email().check(&json!("jane.doe@example.com")).unwrap().valid);
        assert_eq!(
            is_email().check(&json!("not-an-email")).unwrap().message,
            "Must be an email address"
        );
        assert!(is_email().check(&json!(["a@b.co"])).is_err());
    }
}
