//! Ordering two values of the same shape.

use crate::error::{Result, ValidateError};
use crate::value::ValueKind;
use serde_json::Value;
use std::cmp::Ordering;

/// Compares `left` with `right`.
///
/// Both operands must be of the comparer's kind; anything else is a hard
/// [`ValidateError::TypeMismatch`].
pub trait Comparer: Send + Sync {
    fn compare(&self, left: &Value, right: &Value) -> Result<Ordering>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IntComparer;

#[derive(Debug, Clone, Copy, Default)]
pub struct UintComparer;

#[derive(Debug, Clone, Copy, Default)]
pub struct FloatComparer;

fn operand<T>(value: &Value, kind: ValueKind, read: impl Fn(&Value) -> Option<T>) -> Result<T> {
    read(value).ok_or_else(|| ValidateError::type_mismatch(value, kind))
}

impl Comparer for IntComparer {
    fn compare(&self, left: &Value, right: &Value) -> Result<Ordering> {
        let l = operand(left, ValueKind::Int, Value::as_i64)?;
        let r = operand(right, ValueKind::Int, Value::as_i64)?;
        Ok(l.cmp(&r))
    }
}

impl Comparer for UintComparer {
    fn compare(&self, left: &Value, right: &Value) -> Result<Ordering> {
        let l = operand(left, ValueKind::Uint, Value::as_u64)?;
        let r = operand(right, ValueKind::Uint, Value::as_u64)?;
        Ok(l.cmp(&r))
    }
}

impl Comparer for FloatComparer {
    fn compare(&self, left: &Value, right: &Value) -> Result<Ordering> {
        let l = operand(left, ValueKind::Float, Value::as_f64)?;
        let r = operand(right, ValueKind::Float, Value::as_f64)?;
        // JSON numbers are never NaN.
        Ok(l.partial_cmp(&r).unwrap_or(Ordering::Equal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn comparers() {
        let cases: Vec<(Value, Value, &dyn Comparer, Ordering)> = vec![
            (json!(1), json!(1), &IntComparer, Ordering::Equal),
            (json!(1), json!(2), &IntComparer, Ordering::Less),
            (json!(7u64), json!(3u64), &UintComparer, Ordering::Greater),
            (json!(4.5), json!(3.55), &FloatComparer, Ordering::Greater),
            (json!(1.1), json!(1.1), &FloatComparer, Ordering::Equal),
            (json!(1.3), json!(1.5), &FloatComparer, Ordering::Less),
        ];

        for (left, right, comparer, expected) in cases {
            assert_eq!(comparer.compare(&left, &right).unwrap(), expected);
        }
    }

    #[test]
    fn mismatched_operands_error() {
        assert!(IntComparer.compare(&json!(1), &json!("1")).is_err());
        assert!(IntComparer.compare(&json!(1.5), &json!(1)).is_err());
        assert!(UintComparer.compare(&json!(-1), &json!(1)).is_err());
    }
}
