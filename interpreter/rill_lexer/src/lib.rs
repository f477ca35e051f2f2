//! Low-level line tokenizer for Rill (standalone, zero rill_* dependencies).
//!
//! Converts one line of source text into a flat, ordered sequence of
//! [`Token`]s. The tokenizer is context-free: it knows nothing about
//! statement forms, variables, or functions, so external tools (REPL
//! helpers, highlighters) can depend on this crate without pulling in
//! the evaluator.
//!
//! Lexical rules, in priority order:
//!
//! 1. A comment marker (`#` or a literal `//` pair) truncates the line
//!    before any tokenizing. A lone `/` is division, never a comment.
//! 2. A double quote opens a string literal; everything up to the
//!    closing quote is accumulated verbatim, and the emitted token
//!    keeps its surrounding quotes.
//! 3. Outside quotes, whitespace separates tokens; `= ! > <` pair with
//!    a following `=` to form two-character operators; `+ - * / ( )`
//!    are standalone punctuation; anything else accumulates into a
//!    bare word.
//! 4. Reaching end of line inside an open quote is a [`LexError`].

mod lex_error;
mod scan;
mod token;

pub use lex_error::{LexError, LexErrorKind};
pub use scan::{strip_comment, tokenize_line, TokenLine};
pub use token::{Token, TokenKind};
