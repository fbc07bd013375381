//! Literal evaluation

use crate::Value;

/// A numeric literal evaluates to itself.
pub fn eval_number(value: f64) -> Value {
    Value::Number(value)
}
