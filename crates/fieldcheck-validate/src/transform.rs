//! Converting a value of one shape into another.
//!
//! Transformers feed composite predicates such as
//! [`is_between`](crate::funcs::is_between): the raw input is converted first
//! and the result is then compared.

use crate::error::{Result, ValidateError};
use crate::value::ValueKind;
use serde_json::Value;

/// Convert a value `A` into a value `B`. The two may share a type.
pub trait Transformer: Send + Sync {
    fn transform(&self, value: &Value) -> Result<Value>;

    /// Kind of value a successful transform produces.
    fn target(&self) -> ValueKind;
}

/// Parses a string holding a signed integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringToInt;

/// Parses a string holding an unsigned integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringToUint;

/// Parses a string holding a float that fits in 32 bits.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringToFloat32;

/// Parses a string holding a 64 bit float.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringToFloat64;

/// Parses a string holding a boolean (`1`, `t`, `TRUE`, `false`, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct StringToBool;

fn as_str(value: &Value) -> Result<&str> {
    value
        .as_str()
        .ok_or_else(|| ValidateError::type_mismatch(value, ValueKind::String))
}

fn unparsable(raw: &str, target: ValueKind) -> ValidateError {
    ValidateError::Unparsable {
        value: raw.to_string(),
        target,
    }
}

fn float_value(raw: &str, n: f64) -> Result<Value> {
    serde_json::Number::from_f64(n)
        .map(Value::Number)
        .ok_or_else(|| unparsable(raw, ValueKind::Float))
}

impl Transformer for StringToInt {
    fn transform(&self, value: &Value) -> Result<Value> {
        let raw = as_str(value)?;
        raw.parse::<i64>()
            .map(Value::from)
            .map_err(|_| unparsable(raw, ValueKind::Int))
    }

    fn target(&self) -> ValueKind {
        ValueKind::Int
    }
}

impl Transformer for StringToUint {
    fn transform(&self, value: &Value) -> Result<Value> {
        let raw = as_str(value)?;
        raw.parse::<u64>()
            .map(Value::from)
            .map_err(|_| unparsable(raw, ValueKind::Uint))
    }

    fn target(&self) -> ValueKind {
        ValueKind::Uint
    }
}

impl Transformer for StringToFloat32 {
    fn transform(&self, value: &Value) -> Result<Value> {
        let raw = as_str(value)?;
        let n = raw
            .parse::<f32>()
            .map_err(|_| unparsable(raw, ValueKind::Float))?;
        float_value(raw, f64::from(n))
    }

    fn target(&self) -> ValueKind {
        ValueKind::Float
    }
}

impl Transformer for StringToFloat64 {
    fn transform(&self, value: &Value) -> Result<Value> {
        let raw = as_str(value)?;
        let n = raw
            .parse::<f64>()
            .map_err(|_| unparsable(raw, ValueKind::Float))?;
        float_value(raw, n)
    }

    fn target(&self) -> ValueKind {
        ValueKind::Float
    }
}

impl Transformer for StringToBool {
    fn transform(&self, value: &Value) -> Result<Value> {
        let raw = as_str(value)?;
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(Value::Bool(true)),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(Value::Bool(false)),
            _ => Err(unparsable(raw, ValueKind::Bool)),
        }
    }

    fn target(&self) -> ValueKind {
        ValueKind::Bool
    }
}
