//! Hand-written scanner for POSIX bracket expressions.
//!
//! The scanner is an explicit state machine driven by a [`Cursor`]. Each
//! call to [`Lexer::next`] runs state transitions until one of them emits a
//! token, so tokens are computed lazily as the evaluator pulls them.
//!
//! # Grammar
//!
//! ```text
//! expr   = ws* '[' first body* ']'
//! first  = '^' ( '-' | ']' )? | ']' | '-' | <empty>
//! body   = ':' [a-z]* ':' | '\' ( ('u'|'x') hex* )? | c '-' c | c
//! ```
//!
//! A lexical violation produces a single `Error` token, after which the
//! lexer is exhausted. The closing `]` likewise ends the stream; anything
//! after it is never read.

use tracing::trace;

use crate::cursor::Cursor;
use crate::token::{Span, Token, TokenKind};
use crate::LexErrorKind;

/// Scanner states.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    /// Leading whitespace, then the opening `[`.
    Start,
    /// First content position, where `^`, `]` and `-` have special meaning.
    BreFirst,
    /// Just after `^`: a `-` or `]` here is literal.
    AfterNot,
    /// Main body of the expression.
    Bre,
    /// Inside a range, the `-` is next.
    RangeDash,
    /// Inside a range, the end point is next.
    RangeEnd,
    /// After `:`, scanning a class name.
    Class,
    /// After `\u` or `\x`, scanning hex digits.
    Unicode,
    /// Terminal token emitted; nothing more to produce.
    Done,
}

/// Result of running one state.
type Step<'a> = (Option<Token<'a>>, State);

/// Pull-based bracket-expression lexer.
///
/// Implements [`Iterator`]; once the closing `]` or an `Error` token has
/// been yielded, every further call returns `None`.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    state: State,
    /// Byte offset where the pending token began.
    token_start: usize,
}

/// Create a lexer over `source`.
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            state: State::Start,
            token_start: 0,
        }
    }

    fn step(&mut self) -> Step<'a> {
        match self.state {
            State::Start => self.start(),
            State::BreFirst => self.bre_first(),
            State::AfterNot => self.after_not(),
            State::Bre => self.bre(),
            State::RangeDash => self.range_dash(),
            State::RangeEnd => self.range_end(),
            State::Class => self.class(),
            State::Unicode => self.unicode(),
            State::Done => (None, State::Done),
        }
    }

    // ─── Token construction ─────────────────────────────────────────

    /// Emit the text scanned since the last token as a token of `kind`.
    fn emit(&mut self, kind: TokenKind) -> Token<'a> {
        let start = self.token_start;
        let end = self.cursor.pos();
        self.token_start = end;
        let token = Token::new(kind, self.cursor.slice_from(start), Span::new(start, end));
        trace!(kind = %token.kind, text = token.text, "emit");
        token
    }

    fn error(&mut self, kind: LexErrorKind) -> Step<'a> {
        (Some(self.emit(TokenKind::Error(kind))), State::Done)
    }

    /// Drop any scanned-but-unemitted text.
    fn ignore(&mut self) {
        self.token_start = self.cursor.pos();
    }

    // ─── States ─────────────────────────────────────────────────────

    fn start(&mut self) -> Step<'a> {
        self.cursor.eat_whitespace();
        self.ignore();
        let open = self.cursor.current();
        self.cursor.advance();
        if open != Some('[') {
            return self.error(LexErrorKind::ExpectingOpen);
        }
        (Some(self.emit(TokenKind::BreStart)), State::BreFirst)
    }

    fn bre_first(&mut self) -> Step<'a> {
        match self.cursor.current() {
            Some('^') => {
                self.cursor.advance();
                (Some(self.emit(TokenKind::Not)), State::AfterNot)
            }
            // `[]` on its own is the empty expression.
            Some(']') if self.cursor.peek().is_none() => {
                self.cursor.advance();
                (Some(self.emit(TokenKind::BreEnd)), State::Done)
            }
            Some(']' | '-') => {
                self.cursor.advance();
                (Some(self.emit(TokenKind::Character)), State::Bre)
            }
            _ => (None, State::Bre),
        }
    }

    fn after_not(&mut self) -> Step<'a> {
        match self.cursor.current() {
            Some('-' | ']') => {
                self.cursor.advance();
                (Some(self.emit(TokenKind::Character)), State::Bre)
            }
            _ => (None, State::Bre),
        }
    }

    fn bre(&mut self) -> Step<'a> {
        let Some(c) = self.cursor.current() else {
            return self.error(LexErrorKind::UnexpectedEof);
        };
        self.cursor.advance();
        match c {
            ']' => (Some(self.emit(TokenKind::BreEnd)), State::Done),
            ':' => (None, State::Class),
            '-' => self.error(LexErrorKind::UnexpectedDash),
            '\\' => {
                if matches!(self.cursor.current(), Some('u' | 'x')) {
                    self.cursor.advance();
                    (None, State::Unicode)
                } else {
                    (Some(self.emit(TokenKind::Character)), State::Bre)
                }
            }
            _ if self.cursor.current() == Some('-') => {
                (Some(self.emit(TokenKind::RangeStart)), State::RangeDash)
            }
            _ => (Some(self.emit(TokenKind::Character)), State::Bre),
        }
    }

    fn range_dash(&mut self) -> Step<'a> {
        debug_assert_eq!(self.cursor.current(), Some('-'));
        self.cursor.advance();
        (Some(self.emit(TokenKind::RangeDash)), State::RangeEnd)
    }

    fn range_end(&mut self) -> Step<'a> {
        match self.cursor.current() {
            None => self.error(LexErrorKind::UnexpectedEof),
            Some('-' | ']' | '[' | '^') => {
                self.cursor.advance();
                self.error(LexErrorKind::InvalidRangeEnd)
            }
            Some(_) => {
                self.cursor.advance();
                (Some(self.emit(TokenKind::RangeEnd)), State::Bre)
            }
        }
    }

    fn class(&mut self) -> Step<'a> {
        self.cursor.eat_while(|c| c.is_ascii_lowercase());
        if self.cursor.current() != Some(':') {
            return self.error(LexErrorKind::ExpectingColon);
        }
        self.cursor.advance();
        (Some(self.emit(TokenKind::Class)), State::Bre)
    }

    /// Hex digits after `\u` / `\x` are passed through undecoded.
    ///
    /// Without digits nothing is emitted and the escape text stays pending,
    /// so it becomes the prefix of whatever token comes next: `[\uz]` yields
    /// the literal `\uz`, `[\u:digit:]` the class `\u:digit:`.
    fn unicode(&mut self) -> Step<'a> {
        let escape_start = self.token_start;
        self.ignore();
        if self.cursor.eat_while(|c| c.is_ascii_hexdigit()) > 0 {
            return (Some(self.emit(TokenKind::Character)), State::Bre);
        }
        self.token_start = escape_start;
        (None, State::Bre)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        while self.state != State::Done {
            let (token, next) = self.step();
            self.state = next;
            if token.is_some() {
                return token;
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
