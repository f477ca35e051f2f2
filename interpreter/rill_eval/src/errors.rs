//! Error types for evaluation and dispatch.
//!
//! `EvalErrorKind` gives every failure a typed category with structured
//! payload; factory functions (e.g. [`division_by_zero()`]) are the
//! construction API. The kind's `Display` impl produces the user-facing
//! message, and the front end shows the originating statement when the
//! dispatcher attached one.

use std::fmt;

use rill_lexer::{LexError, LexErrorKind};

/// Result of dispatching one statement.
pub type EvalResult = Result<(), EvalError>;

/// Which side of a comparison an operand sits on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Typed error category.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EvalErrorKind {
    // Lexical
    UnterminatedString {
        column: usize,
    },

    // Expression / condition resolution
    InvalidExprToken {
        text: String,
    },
    InvalidOperand {
        side: Side,
        text: String,
    },
    InvalidOperator {
        text: String,
    },

    // Arithmetic
    DivisionByZero,

    // Statement shape
    MissingPrintArg,
    MissingThen,
    MalformedCondition {
        found: usize,
    },
    MalformedWhileHeader,
    MalformedForHeader,
    MissingName {
        construct: &'static str,
    },
    MissingEnd {
        construct: &'static str,
    },

    // Functions
    UndefinedFunction {
        name: String,
    },
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    InvalidArgument {
        text: String,
    },

    // Dispatch
    UnknownCommand {
        name: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString { column } => {
                write!(
                    f,
                    "missing closing `\"` for string opened at column {}",
                    column + 1
                )
            }

            Self::InvalidExprToken { text } => {
                write!(f, "invalid token `{text}` in expression")
            }
            Self::InvalidOperand { side, text } => {
                write!(f, "invalid {side} operand `{text}`")
            }
            Self::InvalidOperator { text } => write!(f, "invalid operator `{text}`"),

            Self::DivisionByZero => write!(f, "division by zero"),

            Self::MissingPrintArg => write!(f, "missing argument for `print`"),
            Self::MissingThen => write!(f, "missing `then` in `if` statement"),
            Self::MalformedCondition { found } => {
                write!(
                    f,
                    "condition must be `<left> <op> <right>`, got {found} tokens"
                )
            }
            Self::MalformedWhileHeader => {
                write!(f, "malformed `while` header: expected `while <var> <op> <bound> do`")
            }
            Self::MalformedForHeader => {
                write!(
                    f,
                    "malformed `for` header: expected `for <var> = <start> to <end> do <statement>`"
                )
            }
            Self::MissingName { construct } => {
                write!(f, "missing function name after `{construct}`")
            }
            Self::MissingEnd { construct } => {
                write!(f, "missing `end` for `{construct}` body")
            }

            Self::UndefinedFunction { name } => {
                write!(f, "function `{name}` is not defined")
            }
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "function `{name}` expects {expected} {arg_word}, got {got}")
            }
            Self::InvalidArgument { text } => write!(f, "invalid argument `{text}`"),

            Self::UnknownCommand { name } => write!(f, "unknown command `{name}`"),
        }
    }
}

/// An evaluation error: what went wrong, plus the statement that was
/// being dispatched when it surfaced.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EvalError {
    /// Typed category with structured payload.
    pub kind: EvalErrorKind,
    /// Human-readable message (equals `kind.to_string()`).
    pub message: String,
    /// The innermost source statement being dispatched, when known.
    /// Attached at the dispatch boundary, not by the factories.
    pub statement: Option<String>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            statement: None,
        }
    }

    /// Attach the originating statement unless an inner dispatch
    /// already did: the innermost statement is the one worth showing.
    #[must_use]
    pub fn with_statement(mut self, statement: &str) -> Self {
        if self.statement.is_none() {
            self.statement = Some(statement.to_string());
        }
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EvalError {}

impl From<LexError> for EvalError {
    fn from(err: LexError) -> Self {
        match err.kind {
            LexErrorKind::UnterminatedString => unterminated_string(err.column),
        }
    }
}

// Factory functions

pub fn unterminated_string(column: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnterminatedString { column })
}

pub fn invalid_expr_token(text: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidExprToken { text: text.into() })
}

pub fn invalid_operand(side: Side, text: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidOperand {
        side,
        text: text.into(),
    })
}

pub fn invalid_operator(text: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidOperator { text: text.into() })
}

pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

pub fn missing_print_arg() -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingPrintArg)
}

pub fn missing_then() -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingThen)
}

pub fn malformed_condition(found: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedCondition { found })
}

pub fn malformed_while_header() -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedWhileHeader)
}

pub fn malformed_for_header() -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedForHeader)
}

pub fn missing_name(construct: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingName { construct })
}

pub fn missing_end(construct: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingEnd { construct })
}

pub fn undefined_function(name: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedFunction { name: name.into() })
}

pub fn arity_mismatch(name: impl Into<String>, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.into(),
        expected,
        got,
    })
}

pub fn invalid_argument(text: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidArgument { text: text.into() })
}

pub fn unknown_command(name: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownCommand { name: name.into() })
}
