//! Assignment evaluation

use crate::ast::Expr;
use crate::error::Result;
use crate::{Environment, EvalContext, Value};

use super::Evaluate;

/// Evaluate `name = value`.
///
/// The target is never looked up, so assigning a fresh name is fine. The
/// table is only touched after the right-hand side succeeds; a failing
/// right-hand side leaves every binding as it was.
pub fn eval_assign(
    name: &str,
    value: &Expr,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value> {
    let value = value.eval(env, ctx)?.as_f64();

    env.set(name, value);
    log::trace!("bound {} = {}", name, value);

    Ok(Value::Variable {
        name: name.to_string(),
        value,
    })
}
