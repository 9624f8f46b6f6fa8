//! Tokens produced by the bracket-expression scanner.

use std::fmt;

use crate::LexErrorKind;

/// Byte range of a token in the source expression.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Token discriminant.
///
/// `RangeStart`, `RangeDash` and `RangeEnd` are always emitted as a
/// contiguous triple.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// The opening `[`.
    BreStart,
    /// The closing `]`. Always the last token of a well-formed expression.
    BreEnd,
    /// First endpoint of a range.
    RangeStart,
    /// The `-` between range endpoints.
    RangeDash,
    /// Second endpoint of a range.
    RangeEnd,
    /// One or more literal characters, emitted verbatim.
    Character,
    /// A named class including both colons, e.g. `:digit:`.
    ///
    /// The name is not validated here; any lowercase run is accepted.
    Class,
    /// The negation marker `^` in first position.
    Not,
    /// Lexical failure. Always the last token produced.
    Error(LexErrorKind),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::BreStart => f.write_str("BreStart"),
            TokenKind::BreEnd => f.write_str("BreEnd"),
            TokenKind::RangeStart => f.write_str("RangeStart"),
            TokenKind::RangeDash => f.write_str("RangeDash"),
            TokenKind::RangeEnd => f.write_str("RangeEnd"),
            TokenKind::Character => f.write_str("Character"),
            TokenKind::Class => f.write_str("Class"),
            TokenKind::Not => f.write_str("Not"),
            TokenKind::Error(kind) => write!(f, "Error({kind})"),
        }
    }
}

/// A single token, borrowing its text from the source expression.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Source text covered by the token. For `Error` tokens this is the
    /// offending input, possibly empty at EOF.
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self { kind, text, span }
    }

    /// Returns the first character of the token text.
    ///
    /// Range endpoints hold one character, unless a digitless `\u` escape
    /// was left pending in front of the start point.
    pub fn first_char(&self) -> Option<char> {
        self.text.chars().next()
    }
}
