//! Lexer error types.

use std::fmt;

/// A lexical error in one source line.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// Byte column in the line where the error begins.
    pub column: usize,
}

/// What kind of lexical error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// Missing closing `"` for a string literal.
    UnterminatedString,
}

impl LexError {
    /// An unterminated string literal whose opening quote sits at `column`.
    pub fn unterminated_string(column: usize) -> Self {
        LexError {
            kind: LexErrorKind::UnterminatedString,
            column,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LexErrorKind::UnterminatedString => {
                write!(
                    f,
                    "missing closing `\"` for string opened at column {}",
                    self.column + 1
                )
            }
        }
    }
}

impl std::error::Error for LexError {}
