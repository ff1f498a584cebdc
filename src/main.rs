use std::env;
use std::io::{stderr, stdout};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<_> = env::args_os().skip(1).collect();
    let status = lox::cli::run(args, &mut stdout(), &mut stderr());
    ExitCode::from(status)
}
