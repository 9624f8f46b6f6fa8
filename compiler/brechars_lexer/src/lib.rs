//! Tokenizer for POSIX bracket expressions such as `[a-z]`, `[:digit:]`
//! or `[^:cntrl::punct:]`.
//!
//! This crate is standalone: it only splits an expression into typed
//! tokens. Resolving classes, ranges and negation into characters is the
//! job of the `brechars` crate.
//!
//! ```
//! use brechars_lexer::{tokenize, TokenKind};
//!
//! let kinds: Vec<_> = tokenize("[a-c]").map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::BreStart,
//!         TokenKind::RangeStart,
//!         TokenKind::RangeDash,
//!         TokenKind::RangeEnd,
//!         TokenKind::BreEnd,
//!     ]
//! );
//! ```

mod cursor;
mod lex_error;
mod scanner;
mod token;

pub use cursor::Cursor;
pub use lex_error::LexErrorKind;
pub use scanner::{tokenize, Lexer};
pub use token::{Span, Token, TokenKind};
