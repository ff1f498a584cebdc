//! Command-line interface for the interpreter.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::interpreter::Interpreter;
use crate::logger::Logger;

const HELP: &str = "\
lox - a Lox interpreter

USAGE:
    lox FILENAME

ARGS:
    FILENAME    The path to the Lox script to run.
";

/// Exit status for bad command-line usage.
pub const EX_USAGE: u8 = 64;
/// Exit status for source that failed to scan.
pub const EX_DATAERR: u8 = 65;

/// Run the interpreter for the given arguments and return the exit status.
///
/// Tokens land on `output`, diagnostics on `errors`. The streams are
/// injected so runs can be driven from tests without a child process.
pub fn run(args: Vec<OsString>, output: &mut dyn Write, errors: &mut dyn Write) -> u8 {
    let mut pargs = pico_args::Arguments::from_vec(args);

    if pargs.contains(["-h", "--help"]) {
        let _ = write!(output, "{HELP}");
        return 0;
    }

    let script: PathBuf = match pargs.opt_free_from_str() {
        Ok(Some(path)) => path,
        _ => {
            let _ = write!(output, "{HELP}");
            return EX_USAGE;
        }
    };

    if !pargs.finish().is_empty() {
        let _ = write!(output, "{HELP}");
        return EX_USAGE;
    }

    run_file(&script, output, errors)
}

/// Scan one source file and print its tokens.
fn run_file(script: &Path, output: &mut dyn Write, errors: &mut dyn Write) -> u8 {
    let source = match std::fs::read_to_string(script) {
        Ok(source) => source,
        Err(err) => {
            let _ = writeln!(errors, "Error opening source file {}: {}", script.display(), err);
            return 1;
        }
    };

    let (run_result, errored) = {
        let mut logger = Logger::new(&mut *errors);
        let mut interpreter = Interpreter::new(output);
        let result = interpreter.run(source.chars(), &mut logger);
        (result, logger.has_errored())
    };

    if let Err(err) = run_result {
        let _ = writeln!(errors, "Error writing output: {err}");
        return 1;
    }

    if errored { EX_DATAERR } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to run the CLI and capture status and both streams.
    fn run_cli(args: &[&str]) -> (u8, String, String) {
        let mut output = Vec::new();
        let mut errors = Vec::new();
        let status = run(args.iter().map(OsString::from).collect(), &mut output, &mut errors);
        (status, String::from_utf8(output).unwrap(), String::from_utf8(errors).unwrap())
    }

    #[test]
    fn no_arguments_prints_usage() {
        let (status, output, _) = run_cli(&[]);
        assert_eq!(status, EX_USAGE);
        assert!(output.contains("USAGE"));
    }

    #[test]
    fn extra_arguments_print_usage() {
        let (status, output, _) = run_cli(&["one.lox", "two.lox"]);
        assert_eq!(status, EX_USAGE);
        assert!(output.contains("USAGE"));
    }

    #[test]
    fn help_flag_exits_cleanly() {
        let (status, output, _) = run_cli(&["--help"]);
        assert_eq!(status, 0);
        assert!(output.contains("lox FILENAME"));
    }

    #[test]
    fn missing_file_reports_and_fails() {
        let (status, output, errors) = run_cli(&["no_such_script.lox"]);
        assert_eq!(status, 1);
        assert!(output.is_empty());
        assert!(errors.contains("Error opening source file no_such_script.lox"));
    }
}
