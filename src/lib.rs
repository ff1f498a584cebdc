//! A tree-walking Lox interpreter, currently through its scanning stage:
//! source goes in, the token stream comes out.
//!
//! The lexical machinery lives in the `lox-scanner` crate; this crate wires
//! it to files, output streams, and the command line.

pub mod cli;
pub mod interpreter;
pub mod logger;

// Re-export the scanner surface at crate root
pub use lox_scanner::{
    CollectingReporter, ErrorReporter, Literal, Lookahead, NullReporter, ScanError, Scanner,
    Token, TokenKind,
};
