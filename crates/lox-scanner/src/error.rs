//! Scan error types.

use thiserror::Error;

/// An error encountered during scanning.
///
/// The display strings are the exact messages reported to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// A character outside the Lox lexical grammar.
    #[error("Unexpected character")]
    UnexpectedCharacter,
    /// A string literal still open when the source ran out.
    #[error("Unterminated string")]
    UnterminatedString,
}
