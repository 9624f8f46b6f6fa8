//! Lexical error kinds.
//!
//! Each variant renders to a fixed message. The messages are part of the
//! observable contract, so callers may compare them verbatim.

use thiserror::Error;

/// What kind of lexical error halted the scanner.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// The expression did not start with `[` (after leading whitespace).
    #[error("expecting [")]
    ExpectingOpen,
    /// A `-` that is not part of a range.
    #[error("parse error, unexpected '-'")]
    UnexpectedDash,
    /// The input ended before the closing `]`.
    #[error("parse error, unexpected EOF")]
    UnexpectedEof,
    /// A range end of `-`, `]`, `[` or `^`.
    #[error("parse error, invalid range end")]
    InvalidRangeEnd,
    /// A class name not closed by `:`.
    #[error("parse error, expecting ':'")]
    ExpectingColon,
}

#[cfg(test)]
mod tests {
    use super::LexErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages_are_fixed() {
        let cases = [
            (LexErrorKind::ExpectingOpen, "expecting ["),
            (LexErrorKind::UnexpectedDash, "parse error, unexpected '-'"),
            (LexErrorKind::UnexpectedEof, "parse error, unexpected EOF"),
            (LexErrorKind::InvalidRangeEnd, "parse error, invalid range end"),
            (LexErrorKind::ExpectingColon, "parse error, expecting ':'"),
        ];
        for (kind, message) in cases {
            assert_eq!(kind.to_string(), message);
        }
    }
}
