//! Shapes of input values.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Input values are plain JSON values.
pub type Values = std::collections::HashMap<String, Value>;

/// The shape of a [`Value`], used in messages and type checks.
///
/// Numbers are split the way they are stored: anything that fits an `i64` is
/// `Int`, larger positive integers are `Uint`, everything else is `Float`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Uint,
    Float,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Classify a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(n) if n.is_i64() => ValueKind::Int,
            Value::Number(n) if n.is_u64() => ValueKind::Uint,
            Value::Number(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Whether `value` can be read as this kind without conversion.
    ///
    /// Unlike comparing [`ValueKind::of`], this accepts `3` as a `Uint` and
    /// any number as a `Float`.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            ValueKind::Null => value.is_null(),
            ValueKind::Bool => value.is_boolean(),
            ValueKind::Int => value.as_i64().is_some(),
            ValueKind::Uint => value.as_u64().is_some(),
            ValueKind::Float => value.is_number(),
            ValueKind::String => value.is_string(),
            ValueKind::Array => value.is_array(),
            ValueKind::Object => value.is_object(),
        }
    }

    /// Whether values of this kind have a length.
    pub fn has_len(&self) -> bool {
        matches!(self, ValueKind::String | ValueKind::Array | ValueKind::Object)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Uint => "uint",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Length of a string (in chars), array, or object.
pub(crate) fn value_len(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(a) => Some(a.len()),
        Value::Object(o) => Some(o.len()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classifies_numbers() {
        assert_eq!(ValueKind::of(&json!(-3)), ValueKind::Int);
        assert_eq!(ValueKind::of(&json!(u64::MAX)), ValueKind::Uint);
        assert_eq!(ValueKind::of(&json!(1.5)), ValueKind::Float);
    }

    #[test]
    fn accepts_is_looser_than_of() {
        assert!(ValueKind::Uint.accepts(&json!(3)));
        assert!(!ValueKind::Uint.accepts(&json!(-3)));
        assert!(ValueKind::Float.accepts(&json!(3)));
        assert!(!ValueKind::Int.accepts(&json!("3")));
    }

    #[test]
    fn lengths() {
        assert_eq!(value_len(&json!("héllo")), Some(5));
        assert_eq!(value_len(&json!([1, 2])), Some(2));
        assert_eq!(value_len(&json!({"a": 1})), Some(1));
        assert_eq!(value_len(&json!(12)), None);
        assert!(!ValueKind::Bool.has_len());
    }

    #[test]
    fn kind_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&ValueKind::Uint).unwrap(), "\"uint\"");
    }
}
