//! Lexical analysis for Lox.
//!
//! This crate covers the scanning stage of the interpreter:
//! - A [`Scanner`] that turns source characters into [`Token`]s
//! - A [`Lookahead`] adapter giving the scanner its two-character window
//! - Scan errors and the [`ErrorReporter`] seam they are pushed through
//!
//! # Example
//!
//! ```
//! use lox_scanner::{CollectingReporter, Scanner, TokenKind};
//!
//! let mut reporter = CollectingReporter::new();
//! let tokens: Vec<_> = Scanner::new("1 + 2".chars(), &mut reporter).collect();
//!
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Number,
//!         TokenKind::Plus,
//!         TokenKind::Number,
//!         TokenKind::Eof,
//!     ],
//! );
//! assert!(!reporter.has_errors());
//! ```

mod error;
mod lookahead;
mod report;
mod scanner;
mod token;

pub use error::ScanError;
pub use lookahead::Lookahead;
pub use report::{CollectingReporter, ErrorReporter, NullReporter};
pub use scanner::Scanner;
pub use token::{Literal, Token, TokenKind};
