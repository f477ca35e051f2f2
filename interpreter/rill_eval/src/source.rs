//! Where continuation lines come from.
//!
//! Multi-line constructs (`while`, `func`) consume raw lines beyond the
//! one being dispatched. `LineSource` makes that collaborator explicit:
//! the REPL supplies lines interactively at the top level, and stored
//! bodies or script files replay through the same dispatch path via
//! [`BufferedLines`].

/// A supplier of raw source lines.
pub trait LineSource {
    /// The next raw line, or `None` when the source is exhausted.
    fn next_line(&mut self) -> Option<String>;
}

/// A line source over an in-memory sequence (stored bodies, scripts).
#[derive(Clone, Debug)]
pub struct BufferedLines {
    lines: Vec<String>,
    pos: usize,
}

impl BufferedLines {
    /// Wrap an owned sequence of lines.
    pub fn new(lines: Vec<String>) -> Self {
        BufferedLines { lines, pos: 0 }
    }

    /// Split a whole script into lines.
    pub fn from_text(text: &str) -> Self {
        BufferedLines::new(text.lines().map(String::from).collect())
    }
}

impl LineSource for BufferedLines {
    fn next_line(&mut self) -> Option<String> {
        let line = self.lines.get(self.pos)?.clone();
        self.pos += 1;
        Some(line)
    }
}

/// The empty line source, for dispatching single self-contained lines.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoMoreLines;

impl LineSource for NoMoreLines {
    fn next_line(&mut self) -> Option<String> {
        None
    }
}
