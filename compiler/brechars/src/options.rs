//! Generator configuration.
//!
//! Both bounds are optional. Unset bounds resolve independently to the
//! ASCII defaults when the generator is built, so setting only `max_rune`
//! keeps the default minimum. No combination is rejected: a minimum above
//! the maximum is a window that admits nothing, leaving only literals.
//!
//! Options are serde-friendly, so they can come from a config file:
//!
//! ```
//! let options: brechars::Options =
//!     serde_json::from_str(r#"{ "min_rune": "a", "max_rune": "f" }"#).unwrap();
//! let generator = options.build();
//! assert_eq!(generator.generate("[a-z]").unwrap(), "abcdef");
//! ```

use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::generator::Generator;

/// Unresolved generator options.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Lowest codepoint any class, range or negation may produce.
    pub min_rune: Option<char>,
    /// Highest codepoint any class, range or negation may produce.
    pub max_rune: Option<char>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum rune for generated sequences.
    #[must_use]
    pub fn min_rune(mut self, min: char) -> Self {
        self.min_rune = Some(min);
        self
    }

    /// Set the maximum rune for generated sequences.
    #[must_use]
    pub fn max_rune(mut self, max: char) -> Self {
        self.max_rune = Some(max);
        self
    }

    /// Fill in the defaults for unset bounds.
    pub fn resolve(&self) -> Bounds {
        Bounds::new(
            self.min_rune.unwrap_or(Bounds::ASCII.min()),
            self.max_rune.unwrap_or(Bounds::ASCII.max()),
        )
    }

    /// Resolve the options into a ready generator.
    pub fn build(self) -> Generator {
        Generator::with_options(self)
    }
}

#[cfg(test)]
mod tests;
