//! The interpreter: owning context for dispatch.
//!
//! Replaces the process-wide variable/function tables of the reference
//! design with an instantiable context, so sessions are isolated and
//! the engine is testable without global state.

use crate::env::Env;
use crate::errors::{EvalError, EvalResult};
use crate::funcs::FunctionTable;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::source::{BufferedLines, LineSource};

/// One interpreter session: the value environment, the function table,
/// and the print destination.
///
/// All execution goes through [`run_line`](Interpreter::run_line): the
/// front end hands over one raw line plus a [`LineSource`] from which
/// multi-line constructs (`while`, `func`) pull their body lines. The
/// engine never terminates the process; every failure is returned as an
/// [`EvalError`] for the front end to display.
pub struct Interpreter {
    pub(crate) env: Env,
    pub(crate) funcs: FunctionTable,
    pub(crate) printer: SharedPrintHandler,
}

impl Interpreter {
    /// Create an interpreter printing to stdout.
    pub fn new() -> Self {
        Interpreter::with_printer(stdout_handler())
    }

    /// Create an interpreter with an explicit print destination.
    pub fn with_printer(printer: SharedPrintHandler) -> Self {
        Interpreter {
            env: Env::new(),
            funcs: FunctionTable::new(),
            printer,
        }
    }

    /// The current variable bindings.
    pub fn env(&self) -> &Env {
        &self.env
    }

    /// The currently defined functions.
    pub fn functions(&self) -> &FunctionTable {
        &self.funcs
    }

    /// Tokenize and dispatch one line.
    ///
    /// `source` supplies continuation lines when the statement opens a
    /// multi-line body. Errors carry the innermost statement that was
    /// being dispatched when they surfaced.
    pub fn run_line(&mut self, line: &str, source: &mut dyn LineSource) -> EvalResult {
        let tokens =
            rill_lexer::tokenize_line(line).map_err(|e| EvalError::from(e).with_statement(line))?;
        self.dispatch(&tokens, source)
            .map_err(|e| e.with_statement(line))
    }

    /// Run a whole script, stopping at the first error.
    pub fn run_script(&mut self, text: &str) -> EvalResult {
        let mut source = BufferedLines::from_text(text);
        self.run_lines(&mut source)
    }

    /// Drain a line source, dispatching each line in order.
    pub fn run_lines(&mut self, source: &mut dyn LineSource) -> EvalResult {
        while let Some(line) = source.next_line() {
            self.run_line(&line, source)?;
        }
        Ok(())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
