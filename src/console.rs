use std::io::{self, Write};
use std::sync::Arc;

use log::warn;
use parking_lot::Mutex;

#[derive(Debug, Clone)]
enum Sink {
    Stdout,
    Capture(Arc<Mutex<Vec<String>>>),
}

/// A Console is where commands and actors write their notices, one line at a time.
///
/// Clones of a Console share the same sink, so lines emitted through any clone
/// appear in the order they were written.
#[derive(Debug, Clone)]
pub struct Console {
    sink: Sink,
}

impl Console {
    /// Create a console writing to the standard output.
    pub fn stdout() -> Self {
        Console { sink: Sink::Stdout }
    }

    /// Create a console keeping every line in memory.
    pub fn capture() -> Self {
        Console {
            sink: Sink::Capture(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    /// Emit a single line.
    pub fn println(&self, line: &str) {
        match &self.sink {
            Sink::Stdout => {
                let mut out = io::stdout().lock();

                if let Err(e) = writeln!(out, "{}", line) {
                    warn!("> console: cannot write to stdout: {}", e);
                }
            }
            Sink::Capture(lines) => lines.lock().push(line.to_string()),
        }
    }

    /// Get a snapshot of the captured lines.
    /// A stdout console never captures anything.
    pub fn lines(&self) -> Vec<String> {
        match &self.sink {
            Sink::Stdout => Vec::new(),
            Sink::Capture(lines) => lines.lock().clone(),
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Console::stdout()
    }
}
