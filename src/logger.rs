//! Error output for the interpreter.

use std::io::Write;

use lox_scanner::ErrorReporter;

/// Reporter that renders errors onto an output stream as they arrive.
///
/// Remembers whether anything has been reported so the caller can pick an
/// exit status once a run finishes.
pub struct Logger<W: Write> {
    output: W,
    errored: bool,
}

impl<W: Write> Logger<W> {
    /// Create a logger writing to the given stream.
    pub fn new(output: W) -> Self {
        Self {
            output,
            errored: false,
        }
    }

    /// Check if any error has been reported since the last reset.
    pub fn has_errored(&self) -> bool {
        self.errored
    }

    /// Reset the error flag.
    pub fn clear_errors(&mut self) {
        self.errored = false;
    }

    /// Render one report. `location` qualifies where on the line the error
    /// sits; scan errors leave it empty. Write failures on the stream are
    /// ignored.
    fn report(&mut self, line: u32, location: &str, message: &str) {
        self.errored = true;
        let _ = writeln!(self.output, "[line {line}] Error{location}: {message}");
    }
}

impl<W: Write> ErrorReporter for Logger<W> {
    fn error(&mut self, line: u32, message: &str) {
        self.report(line, "", message);
    }
}
