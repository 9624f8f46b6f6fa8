//! Enumerate the characters matched by a POSIX bracket expression.
//!
//! This is not a regex matcher. Given `[a-d]`, `[:digit:]` or
//! `[^:cntrl::punct:]` it returns the concrete, ordered characters the
//! expression stands for, limited to configurable codepoint bounds
//! (ASCII by default).
//!
//! ```
//! use brechars::{generate, Options};
//!
//! assert_eq!(generate("[a-d]").unwrap(), "abcd");
//! assert_eq!(generate("[:xdigit:]").unwrap(), "abcdefABCDEF0123456789");
//!
//! let generator = Options::new().min_rune('a').max_rune('z').build();
//! assert_eq!(generator.generate("[^:cntrl::punct:]").unwrap().len(), 26);
//! ```
//!
//! # Tracing
//!
//! Generation is instrumented with `tracing`. Call [`init_tracing`] and set
//! `RUST_LOG=brechars=debug` (or `brechars_lexer=trace` for every token).

mod bounds;
mod classes;
mod errors;
mod generator;
mod options;

use std::sync::Once;

pub use bounds::Bounds;
pub use brechars_lexer::{LexErrorKind, TokenKind};
pub use classes::PosixClass;
pub use errors::GenerateError;
pub use generator::{generate, Generator};
pub use options::Options;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
