//! Character cursor over the input text.
//!
//! The cursor only ever moves forward; every operation first skips whitespace, so callers see the
//! input as a stream of significant characters.

use tracing::*;

use crate::error::{Error, ErrorKind};
use crate::span::Span;

/// Same set as C's `isspace` in the default locale.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

#[derive(Debug, Clone)]
pub struct Tokenizer<'src> {
    src: &'src str,
    pos: usize,
}

impl<'src> Tokenizer<'src> {
    pub fn new(src: &'src str) -> Self {
        Tokenizer { src, pos: 0 }
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Span from `start` up to the cursor.
    pub fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.pos)
    }

    fn current(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    /// Span covering the character under the cursor, or an empty span at end-of-input.
    pub(crate) fn current_span(&self) -> Span {
        match self.current() {
            Some(c) => Span::new(self.pos, self.pos + c.len_utf8()),
            None => Span::point(self.pos),
        }
    }

    fn bump(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_space(&mut self) {
        while self.current().is_some_and(is_space) {
            self.bump();
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'src str {
        let start = self.pos;
        while self.current().is_some_and(&pred) {
            self.bump();
        }
        &self.src[start..self.pos]
    }

    /// The next significant character, without consuming it. `None` at end-of-input.
    pub fn lookahead(&mut self) -> Option<char> {
        self.skip_space();
        self.current()
    }

    /// Consume `expected`, which must be the next significant character.
    pub fn expect_and_consume(&mut self, expected: char) -> Result<(), Error> {
        self.skip_space();
        match self.current() {
            Some(c) if c == expected => {
                self.bump();
                Ok(())
            }
            found => {
                debug!(?expected, ?found, pos = self.pos, "unexpected character");
                Err(Error::at(
                    ErrorKind::Expected { expected, found },
                    self.current_span(),
                ))
            }
        }
    }

    /// Everything up to (not including) the next `"` or the end of input. The quotes themselves
    /// are left for [`Tokenizer::expect_and_consume`]. Leading whitespace is skipped like
    /// everywhere else.
    pub fn take_string_lexeme(&mut self) -> String {
        self.skip_space();
        self.take_while(|c| c != '"').to_owned()
    }

    /// A run of ASCII digits, in decimal. An empty run is `0`.
    pub fn take_integer_lexeme(&mut self) -> Result<i64, Error> {
        self.skip_space();
        let start = self.pos;
        let digits = self.take_while(|c| c.is_ascii_digit());
        if digits.is_empty() {
            return Ok(0);
        }
        // Only digits remain, so the sole failure mode is overflow.
        digits
            .parse::<i64>()
            .map_err(|_| Error::at(ErrorKind::IntegerOverflow, self.span_from(start)))
    }
}
