//! Error types for generation.
//!
//! `Display` output of [`GenerateError`] is the exact, stable message for
//! each failure; offsets and other context are carried as fields only.

use brechars_lexer::LexErrorKind;
use thiserror::Error;

/// Why a `generate` call failed. No partial output accompanies an error.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum GenerateError {
    /// The first token was not the opening `[`.
    #[error("missing opening '['")]
    MissingOpen,
    /// A range start not followed by a dash and a valid end.
    #[error("invalid range")]
    InvalidRange,
    /// A well-formed class token naming no known class.
    #[error("invalid class '{name}'")]
    InvalidClass { name: String },
    /// The lexer rejected the expression at byte `offset`.
    #[error("{kind}")]
    Syntax { kind: LexErrorKind, offset: usize },
}
