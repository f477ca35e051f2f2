use pretty_assertions::assert_eq;

use super::*;
use crate::errors::EvalErrorKind;
use rill_lexer::Token;

fn check(left: &str, op: &str, right: &str, env: &Env) -> Result<bool, EvalError> {
    eval_condition(
        &Token::word(left),
        &Token::rel_op(op),
        &Token::word(right),
        env,
    )
}

#[test]
fn all_six_operators() {
    let env = Env::new();
    assert_eq!(check("2", ">", "1", &env), Ok(true));
    assert_eq!(check("1", "<", "2", &env), Ok(true));
    assert_eq!(check("2", "==", "2", &env), Ok(true));
    assert_eq!(check("2", "!=", "3", &env), Ok(true));
    assert_eq!(check("2", ">=", "2", &env), Ok(true));
    assert_eq!(check("2", "<=", "1", &env), Ok(false));
}

#[test]
fn operands_resolve_variables_first() {
    let mut env = Env::new();
    env.define("a", 10);
    assert_eq!(check("a", ">", "5", &env), Ok(true));
    assert_eq!(check("5", "<", "a", &env), Ok(true));
}

#[test]
fn unresolved_left_operand_fails() {
    let err = check("ghost", ">", "1", &Env::new()).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::InvalidOperand {
            side: Side::Left,
            text: "ghost".to_string()
        }
    );
}

#[test]
fn unresolved_right_operand_fails() {
    let err = check("1", ">", "ghost", &Env::new()).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::InvalidOperand {
            side: Side::Right,
            text: "ghost".to_string()
        }
    );
}

#[test]
fn assignment_equals_is_not_a_comparison() {
    let err = check("1", "=", "1", &Env::new()).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::InvalidOperator {
            text: "=".to_string()
        }
    );
}

#[test]
fn arbitrary_word_is_not_an_operator() {
    let err = check("1", "near", "1", &Env::new()).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::InvalidOperator {
            text: "near".to_string()
        }
    );
}
