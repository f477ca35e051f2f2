//! CLI commands: run and lex script files.

use rill_eval::Interpreter;

use crate::report;

/// Execute a script file.
///
/// Returns `false` if the file could not be read or a statement failed;
/// the error has already been displayed.
pub fn run_file(path: &str) -> bool {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: cannot read `{path}`: {err}");
            return false;
        }
    };

    tracing::debug!(path = %path, lines = text.lines().count(), "running script");
    let mut interp = Interpreter::new();
    match interp.run_script(&text) {
        Ok(()) => true,
        Err(err) => {
            report::report_error(&err);
            false
        }
    }
}

/// Tokenize a file and print one row of tokens per source line.
///
/// Debugging aid; lexical errors are reported per line without
/// stopping.
pub fn lex_file(path: &str) -> bool {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: cannot read `{path}`: {err}");
            return false;
        }
    };

    let mut clean = true;
    for (no, line) in text.lines().enumerate() {
        match rill_lexer::tokenize_line(line) {
            Ok(tokens) => {
                let rendered: Vec<String> = tokens
                    .iter()
                    .map(|t| format!("{:?}({})", t.kind(), t))
                    .collect();
                println!("{:>4}: {}", no + 1, rendered.join(" "));
            }
            Err(err) => {
                eprintln!("{:>4}: error: {err}", no + 1);
                clean = false;
            }
        }
    }
    clean
}
