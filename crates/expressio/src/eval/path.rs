//! Variable lookup

use crate::error::{ExpressionError, Result};
use crate::{Environment, Value};

/// Resolve a variable leaf to the number stored under its name.
///
/// # Errors
///
/// Returns `UndefinedVariable` at the leaf's position if the name was never
/// assigned.
pub fn eval_variable(name: &str, position: usize, env: &Environment) -> Result<Value> {
    env.get(name)
        .map(Value::Number)
        .ok_or_else(|| ExpressionError::undefined_variable(position))
}
