//! Codepoint bounds applied to every generated character.
//!
//! All enumeration goes through `RangeInclusive<char>`, which steps over the
//! surrogate block `U+D800..=U+DFFF`.

use rustc_hash::FxHashSet;

/// Inclusive `[min, max]` window of generated codepoints.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Bounds {
    min: char,
    max: char,
}

impl Bounds {
    /// `U+0000..=U+007F`, used when neither bound is configured.
    pub const ASCII: Bounds = Bounds {
        min: '\u{0000}',
        max: '\u{007F}',
    };

    /// Create bounds without validation; `min > max` admits nothing.
    pub const fn new(min: char, max: char) -> Self {
        Self { min, max }
    }

    #[inline]
    pub const fn min(self) -> char {
        self.min
    }

    #[inline]
    pub const fn max(self) -> char {
        self.max
    }

    #[inline]
    pub fn contains(self, c: char) -> bool {
        self.min <= c && c <= self.max
    }

    /// Every character in bounds, ascending.
    pub fn alphabet(self) -> std::ops::RangeInclusive<char> {
        self.min..=self.max
    }

    /// Every character from `start` to `end` inclusive that lies in bounds,
    /// ascending. A descending pair is swapped first.
    pub fn range(self, start: char, end: char) -> std::ops::RangeInclusive<char> {
        let (lo, hi) = if start > end { (end, start) } else { (start, end) };
        lo.max(self.min)..=hi.min(self.max)
    }

    /// Keep the characters of `chars` that lie in bounds and are not in
    /// `excluded`, preserving order.
    pub fn filter<'a, I>(
        self,
        chars: I,
        excluded: &'a FxHashSet<char>,
    ) -> impl Iterator<Item = char> + 'a
    where
        I: IntoIterator<Item = char>,
        I::IntoIter: 'a,
    {
        chars
            .into_iter()
            .filter(move |c| self.contains(*c) && !excluded.contains(c))
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::ASCII
    }
}
