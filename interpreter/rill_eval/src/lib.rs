//! The Rill semantic engine.
//!
//! Three tightly coupled pieces give the language its behavior: the
//! tokenizer (in `rill_lexer`), the statement dispatcher, and the
//! expression/condition evaluator. The dispatcher re-tokenizes stored
//! loop and function bodies and re-enters itself recursively for nested
//! statements, so the whole engine hangs off one entry point:
//! [`Interpreter::run_line`].
//!
//! Values are `i64`; variables live in a flat [`Env`]; user functions
//! keep their bodies as raw unparsed lines in a [`FunctionTable`] and
//! run under dynamic value-copy scoping (the call copies the caller's
//! environment and the dispatcher restores it on return).

mod cond;
mod env;
pub mod errors;
mod exec;
mod expr;
mod funcs;
mod interpreter;
mod print_handler;
mod source;

pub use cond::eval_condition;
pub use env::{Env, EnvSnapshot};
pub use errors::{EvalError, EvalErrorKind, EvalResult, Side};
pub use expr::eval_expr;
pub use funcs::{FunctionDef, FunctionTable};
pub use interpreter::Interpreter;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use source::{BufferedLines, LineSource, NoMoreLines};
