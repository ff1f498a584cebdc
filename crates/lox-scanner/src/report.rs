//! Error reporting interface between the scanner and its host.
//!
//! The scanner pushes each error out through an [`ErrorReporter`] as soon as
//! it is found, then keeps scanning. It never stores diagnostics itself, so
//! hosts decide whether errors are printed, collected, or dropped.

/// An interface for an object that can receive scan errors as they are found.
pub trait ErrorReporter {
    /// Record an error at the given 1-based source line.
    fn error(&mut self, line: u32, message: &str);
}

/// Reporter that discards every error.
#[derive(Debug, Default)]
pub struct NullReporter;

impl ErrorReporter for NullReporter {
    fn error(&mut self, _line: u32, _message: &str) {}
}

/// Reporter that buffers `(line, message)` pairs for later inspection.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    errors: Vec<(u32, String)>,
}

impl CollectingReporter {
    /// Create an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any errors were reported.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The reported errors, in report order.
    pub fn errors(&self) -> &[(u32, String)] {
        &self.errors
    }

    /// Take accumulated errors, leaving an empty vec.
    pub fn take_errors(&mut self) -> Vec<(u32, String)> {
        std::mem::take(&mut self.errors)
    }
}

impl ErrorReporter for CollectingReporter {
    fn error(&mut self, line: u32, message: &str) {
        self.errors.push((line, message.to_string()));
    }
}
