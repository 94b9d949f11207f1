//! Arithmetic over loosely-typed numeric inputs.
//!
//! Workflow inputs arrive as opaque values: a number, a numeric string, or
//! a boolean are all acceptable where a number is required. [`to_number`]
//! is the single coercion used by every numeric action (and by the list
//! aggregations), and [`number_value`] narrows whole-number results back to
//! integers the way the platform displays them.

use crate::error::{ActionError, Result};
use datamodel_core::value_text;
use serde_json::{json, Value};

/// Coerce a value to f64: numbers directly, numeric strings by parsing,
/// booleans as 1/0. Anything else is an error.
pub fn to_number(value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| ActionError::NotANumber(value_text(value))),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| ActionError::NotANumber(s.clone())),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        other => Err(ActionError::NotANumber(value_text(other))),
    }
}

/// Wrap an f64 result as a value, collapsing whole numbers to integers
/// (`3.0` comes back as `3`, `3.5` stays fractional).
pub fn number_value(n: f64) -> Value {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < (i64::MAX as f64) {
        json!(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

/// Add two numeric inputs.
pub fn add(first: &Value, second: &Value) -> Result<Value> {
    Ok(number_value(to_number(first)? + to_number(second)?))
}

/// Subtract the second numeric input from the first.
pub fn subtract(first: &Value, second: &Value) -> Result<Value> {
    Ok(number_value(to_number(first)? - to_number(second)?))
}

/// Divide the first numeric input by the second, truncating the quotient
/// toward zero to an integer. The integer result is a platform quirk kept
/// for compatibility; a zero divisor is an error.
pub fn divide(first: &Value, second: &Value) -> Result<i64> {
    let dividend = to_number(first)?;
    let divisor = to_number(second)?;
    if divisor == 0.0 {
        return Err(ActionError::DivisionByZero);
    }
    Ok((dividend / divisor).trunc() as i64)
}

/// Integer remainder of the first input divided by the second.
pub fn modulo(first: i64, second: i64) -> Result<i64> {
    if second == 0 {
        return Err(ActionError::DivisionByZero);
    }
    Ok(first % second)
}
