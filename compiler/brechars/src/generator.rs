//! Expansion of a bracket expression into the characters it matches.
//!
//! The generator pulls tokens from [`brechars_lexer::Lexer`] one at a time
//! and builds the output in a single pass. Negation is ordinary recursive
//! descent: the tokens after `^` are expanded by a nested call sharing the
//! same lexer, and that expansion becomes the exclusion list.

use brechars_lexer::{Lexer, Token, TokenKind};
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::bounds::Bounds;
use crate::classes::PosixClass;
use crate::errors::GenerateError;
use crate::options::Options;

/// Expands bracket expressions within fixed codepoint bounds.
///
/// Holds only its resolved bounds; each [`generate`](Self::generate) call
/// owns its own lexer, so one generator can serve any number of calls,
/// from any number of threads.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Generator {
    bounds: Bounds,
}

impl Generator {
    /// A generator with the default ASCII bounds.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self {
            bounds: options.resolve(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Return every character matched by `expression`, in expression order.
    ///
    /// Literal characters are emitted verbatim; classes, ranges and negated
    /// lists are limited to the configured bounds. Duplicates are kept.
    #[tracing::instrument(level = "debug", skip_all, fields(len = expression.len()))]
    pub fn generate(&self, expression: &str) -> Result<String, GenerateError> {
        let mut tokens = Lexer::new(expression);
        match tokens.next() {
            Some(Token {
                kind: TokenKind::BreStart,
                ..
            }) => {}
            other => {
                debug!(first = ?other.map(|t| t.kind), "expression does not open with '['");
                return Err(GenerateError::MissingOpen);
            }
        }
        let out = self.build_sequence(&mut tokens);
        if let Err(err) = &out {
            debug!(%err, "generation failed");
        }
        out
    }

    /// Consume tokens until the stream ends, appending each expansion.
    fn build_sequence(&self, tokens: &mut Lexer<'_>) -> Result<String, GenerateError> {
        let mut out = String::new();
        let no_exclusions = FxHashSet::default();
        while let Some(token) = tokens.next() {
            match token.kind {
                TokenKind::Character => out.push_str(token.text),
                TokenKind::Class => {
                    let class = PosixClass::from_name(token.text).ok_or_else(|| {
                        GenerateError::InvalidClass {
                            name: token.text.to_owned(),
                        }
                    })?;
                    let members = class.members(self.bounds);
                    out.extend(self.bounds.filter(members, &no_exclusions));
                }
                TokenKind::RangeStart => {
                    let (start, end) = range_endpoints(token, tokens)?;
                    out.extend(self.bounds.range(start, end));
                }
                TokenKind::Not => {
                    let excluded: FxHashSet<char> =
                        self.build_sequence(tokens)?.chars().collect();
                    out.extend(self.bounds.filter(self.bounds.alphabet(), &excluded));
                }
                TokenKind::BreStart | TokenKind::BreEnd => {}
                TokenKind::Error(kind) => {
                    return Err(GenerateError::Syntax {
                        kind,
                        offset: token.span.start,
                    });
                }
                TokenKind::RangeDash | TokenKind::RangeEnd => {
                    unreachable!("{} token outside of a range", token.kind)
                }
            }
        }
        Ok(out)
    }
}

/// Read the `RangeDash`, `RangeEnd` pair that must follow `start`.
fn range_endpoints(
    start: Token<'_>,
    tokens: &mut Lexer<'_>,
) -> Result<(char, char), GenerateError> {
    let dash = tokens.next();
    if !matches!(dash, Some(t) if t.kind == TokenKind::RangeDash) {
        return Err(GenerateError::InvalidRange);
    }
    let end = match tokens.next() {
        Some(t) if t.kind == TokenKind::RangeEnd => t,
        _ => return Err(GenerateError::InvalidRange),
    };
    match (start.first_char(), end.first_char()) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(GenerateError::InvalidRange),
    }
}

/// Expand `expression` with the default ASCII bounds.
pub fn generate(expression: &str) -> Result<String, GenerateError> {
    Generator::new().generate(expression)
}
