//! Relational condition evaluation.

use rill_lexer::Token;

use crate::env::Env;
use crate::errors::{invalid_operand, invalid_operator, EvalError, Side};
use crate::expr::parse_int;

/// Evaluate `<left> <op> <right>` against the environment.
///
/// Operands resolve variable-first, then as digit-only literals; an
/// unresolvable operand fails, naming its side and text. Exactly the
/// six relational operators are accepted; a single `=` is assignment,
/// not a comparison.
pub fn eval_condition(
    left: &Token,
    op: &Token,
    right: &Token,
    env: &Env,
) -> Result<bool, EvalError> {
    let l = resolve_operand(Side::Left, left, env)?;
    let r = resolve_operand(Side::Right, right, env)?;

    match op.text() {
        ">" => Ok(l > r),
        "<" => Ok(l < r),
        "==" => Ok(l == r),
        "!=" => Ok(l != r),
        ">=" => Ok(l >= r),
        "<=" => Ok(l <= r),
        other => Err(invalid_operator(other)),
    }
}

fn resolve_operand(side: Side, token: &Token, env: &Env) -> Result<i64, EvalError> {
    if let Some(value) = env.lookup(token.text()) {
        Ok(value)
    } else if token.is_digits() {
        Ok(parse_int(token.text()))
    } else {
        Err(invalid_operand(side, token.text()))
    }
}

#[cfg(test)]
mod tests;
