//! Binary operation evaluation

use crate::ast::Expr;
use crate::error::{ExpressionError, Result};
use crate::symbol::Operator;
use crate::{Environment, EvalContext, Value};

use super::Evaluate;

/// Evaluate an operator node.
///
/// The left operand is evaluated before the right one and the first failure
/// wins. Division by a zero right operand is reported one character past
/// the `/`, where the divisor starts.
pub fn eval_binary(
    op: Operator,
    position: usize,
    left: &Expr,
    right: &Expr,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value> {
    let left = left.eval(env, ctx)?.as_f64();
    let right = right.eval(env, ctx)?.as_f64();

    apply(op, position, left, right).map(Value::Number)
}

/// Apply an arithmetic operator to two numbers.
///
/// `%` keeps the sign of the dividend, like C's `fmod`.
pub fn apply(op: Operator, position: usize, left: f64, right: f64) -> Result<f64> {
    match op {
        // Arithmetic
        Operator::Add => Ok(left + right),
        Operator::Sub => Ok(left - right),
        Operator::Mul => Ok(left * right),
        Operator::Div => eval_div(left, right, position),
        Operator::Pow => Ok(left.powf(right)),
        Operator::Mod => Ok(left % right),

        // The parser never puts `=` inside an operand
        Operator::Assign => Err(ExpressionError::invalid_expression(position)),
    }
}

fn eval_div(left: f64, right: f64, position: usize) -> Result<f64> {
    if right == 0.0 {
        return Err(ExpressionError::division_by_zero(position + 1));
    }
    Ok(left / right)
}
