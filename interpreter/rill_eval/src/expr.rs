//! Arithmetic expression evaluation.

use rill_lexer::Token;

use crate::env::Env;
use crate::errors::{division_by_zero, invalid_expr_token, EvalError};

/// Fold a token sequence into one integer, strictly left to right.
///
/// There is no operator precedence and no grouping: `2 + 3 * 4` is
/// `(2 + 3) * 4 = 20`. The accumulator starts at 0 with a pending `+`,
/// so a leading `- 5` yields -5. Each token is either a numeric
/// literal, a bound variable, or one of `+ - * /`; anything else fails,
/// naming the offending token. Arithmetic wraps on overflow; division
/// truncates toward zero and fails on a zero divisor.
///
/// Callers guarantee at least one value token.
pub fn eval_expr(tokens: &[Token], env: &Env) -> Result<i64, EvalError> {
    let mut result: i64 = 0;
    let mut op = '+';

    for token in tokens {
        let value = if token.is_digits() {
            parse_int(token.text())
        } else if let Some(bound) = env.lookup(token.text()) {
            bound
        } else if let "+" | "-" | "*" | "/" = token.text() {
            op = token.text().chars().next().unwrap_or('+');
            continue;
        } else {
            return Err(invalid_expr_token(token.text()));
        };

        result = match op {
            '+' => result.wrapping_add(value),
            '-' => result.wrapping_sub(value),
            '*' => result.wrapping_mul(value),
            _ => {
                if value == 0 {
                    return Err(division_by_zero());
                }
                result.wrapping_div(value)
            }
        };
    }

    Ok(result)
}

/// Parse a digits-only literal. Oversized literals clamp to `i64::MAX`.
pub(crate) fn parse_int(digits: &str) -> i64 {
    digits.parse::<i64>().unwrap_or(i64::MAX)
}
