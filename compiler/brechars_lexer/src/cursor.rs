//! Character cursor over a bracket expression.
//!
//! The cursor walks the source one `char` at a time and tracks a byte
//! offset, so token text can be sliced straight out of the source without
//! copying. EOF is reported as `None` from [`Cursor::current`]; interior
//! `U+0000` characters are ordinary characters and never mistaken for EOF.

/// Cheap, copyable cursor over the expression text.
///
/// The cursor is [`Copy`], enabling cheap state snapshots.
///
/// # Invariant
///
/// `pos` always sits on a UTF-8 character boundary of `source` and never
/// exceeds `source.len()`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Returns the character at the current position, or `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Returns the character one position ahead of current.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().nth(1)
    }

    /// Advance past the current character. No-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Extract a source substring as `&str`.
    ///
    /// `start..end` must be character boundaries previously reported by
    /// [`pos()`](Self::pos).
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.source[start..end]
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current character.
    ///
    /// Returns the number of characters consumed.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut eaten = 0;
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
            eaten += 1;
        }
        eaten
    }

    /// Advance past any Unicode whitespace.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
    }
}
