//! Output sinks for emitted text lines.
//!
//! Everything the demonstration prints goes through a [`Sink`], so tests can
//! capture the lines instead of parsing process output.

use std::io::{self, Write};

use tracing::warn;

/// Destination for emitted lines. Emitting never fails from the caller's view.
pub trait Sink {
    /// Emit one line of text (without a trailing newline).
    fn line(&mut self, text: &str);
}

/// Writes each line to standard output.
///
/// After the first failed write (e.g. a closed pipe) the remaining lines are
/// dropped, and only that first failure is logged.
pub struct Console {
    out: Box<dyn Write>,
    failed: bool,
}

impl Console {
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    fn new(out: Box<dyn Write>) -> Self {
        Self { out, failed: false }
    }
}

impl Sink for Console {
    fn line(&mut self, text: &str) {
        if self.failed {
            return;
        }
        if let Err(e) = writeln!(self.out, "{}", text) {
            self.failed = true;
            warn!(error = %e, "Failed to write to stdout, dropping remaining output");
        }
    }
}

/// Captures lines in memory.
impl Sink for Vec<String> {
    fn line(&mut self, text: &str) {
        self.push(text.to_owned());
    }
}
