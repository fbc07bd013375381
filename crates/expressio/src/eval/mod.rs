//! Expression evaluation

pub mod assign;
pub mod binary;
pub mod literal;
pub mod path;

use crate::ast::Expr;
use crate::error::Result;
use crate::{Environment, EvalContext, Value};

/// Trait for evaluating tree nodes to values.
///
/// This is the core abstraction for the tree-walking interpreter.
pub trait Evaluate {
    /// Evaluate this node against the given variable table.
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value>;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for Expr {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value> {
        if ctx.trace {
            log::debug!("eval {}", self);
        }

        match self {
            Expr::Number { value, .. } => Ok(literal::eval_number(*value)),
            Expr::Variable { name, position } => path::eval_variable(name, *position, env),
            Expr::Binary {
                op,
                position,
                left,
                right,
            } => binary::eval_binary(*op, *position, left, right, env, ctx),
            Expr::Assign { name, value, .. } => assign::eval_assign(name, value, env, ctx),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate an expression (convenience wrapper).
pub fn eval_expr(expr: &Expr, env: &mut Environment, ctx: &EvalContext) -> Result<Value> {
    expr.eval(env, ctx)
}
