//! Interactive line-reading front end.
//!
//! Owns prompting, history, EOF handling, and the in-band `exit` line;
//! none of these reach the engine. Body lines of a multi-line construct
//! are read with a distinct continuation prompt.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use rill_eval::{Interpreter, LineSource};

use crate::report;

/// Pulls continuation lines (loop and function bodies) from the editor
/// under a `..` prompt, so multi-line constructs can be typed
/// interactively.
struct ReplSource<'a> {
    editor: &'a mut DefaultEditor,
}

impl LineSource for ReplSource<'_> {
    fn next_line(&mut self) -> Option<String> {
        self.editor.readline(".. ").ok()
    }
}

/// Run the interactive session until `exit`, EOF, or Ctrl-C.
pub fn run() {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("error: cannot start line editor: {err}");
            return;
        }
    };
    let mut interp = Interpreter::new();

    println!("Rill {}", env!("CARGO_PKG_VERSION"));
    println!("Enter your code (type 'exit' to quit)");

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if line.trim() == "exit" {
                    break;
                }
                let _ = editor.add_history_entry(line.as_str());

                let mut source = ReplSource {
                    editor: &mut editor,
                };
                if let Err(err) = interp.run_line(&line, &mut source) {
                    report::report_error(&err);
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("error: {err}");
                break;
            }
        }
    }
}
