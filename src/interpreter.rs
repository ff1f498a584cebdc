//! Interpreter driver.
//!
//! Scanning is the only stage wired up so far: a run scans the source and
//! prints the token stream, one token per line.

use std::io::{self, Write};

use lox_scanner::{ErrorReporter, Scanner};

/// Runs Lox source and writes the results to its output stream.
pub struct Interpreter<W: Write> {
    output: W,
}

impl<W: Write> Interpreter<W> {
    /// Create an interpreter writing to the given stream.
    pub fn new(output: W) -> Self {
        Self { output }
    }

    /// Scan `source` and print one token per line, the EOF token included.
    ///
    /// Scan errors go to the reporter and do not stop the run; only a
    /// failure to write output ends it early.
    pub fn run<I>(&mut self, source: I, reporter: &mut dyn ErrorReporter) -> io::Result<()>
    where
        I: Iterator<Item = char>,
    {
        for token in Scanner::new(source, reporter) {
            writeln!(self.output, "{token}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lox_scanner::CollectingReporter;

    /// Helper to run a source string and return the printed lines.
    fn run_source(source: &str) -> (Vec<String>, CollectingReporter) {
        let mut output = Vec::new();
        let mut reporter = CollectingReporter::new();
        Interpreter::new(&mut output).run(source.chars(), &mut reporter).unwrap();

        let lines = String::from_utf8(output).unwrap().lines().map(str::to_string).collect();
        (lines, reporter)
    }

    #[test]
    fn prints_one_token_per_line() {
        let (lines, reporter) = run_source("1 + 2");
        assert_eq!(lines, vec!["NUMBER 1 1.0", "PLUS + null", "NUMBER 2 2.0", "EOF  null"]);
        assert!(!reporter.has_errors());
    }

    #[test]
    fn empty_source_still_prints_eof() {
        let (lines, _) = run_source("");
        assert_eq!(lines, vec!["EOF  null"]);
    }

    #[test]
    fn string_tokens_render_their_contents() {
        let (lines, _) = run_source("\"hi\"");
        assert_eq!(lines[0], "STRING \"hi\" hi");
    }

    #[test]
    fn errors_reach_the_reporter_not_the_output() {
        let (lines, reporter) = run_source("#");
        assert_eq!(lines, vec!["EOF  null"]);
        assert_eq!(reporter.errors(), &[(1, "Unexpected character".to_string())]);
    }
}
