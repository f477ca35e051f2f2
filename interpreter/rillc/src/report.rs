//! Error display for the front end.

use rill_eval::EvalError;

/// Render an error to stderr: the message, then the statement that was
/// being dispatched when it surfaced.
pub fn report_error(err: &EvalError) {
    eprintln!("error: {err}");
    if let Some(statement) = &err.statement {
        eprintln!("  --> {statement}");
    }
}
