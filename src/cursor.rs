//! Forward-only byte cursor used by the grammar.

use crate::span::Span;

/// A position in a byte slice. Cloning is the only form of backtracking.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) const fn new(bytes: &'a [u8], pos: usize) -> Self {
        Self { bytes, pos }
    }

    pub(crate) const fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) const fn is_at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    pub(crate) fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    pub(crate) fn byte_at(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// Text covered by `span`, if it is valid UTF-8.
    pub(crate) fn text(&self, span: Span) -> Option<&'a str> {
        std::str::from_utf8(self.bytes.get(span.range())?).ok()
    }

    /// Span from `start` to the current position.
    pub(crate) const fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.pos)
    }

    /// Consumes `b` if it is next.
    pub(crate) fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes `s` if the input continues with it.
    pub(crate) fn eat_str(&mut self, s: &str) -> bool {
        let end = self.pos + s.len();
        if self.bytes.get(self.pos..end) == Some(s.as_bytes()) {
            self.pos = end;
            true
        } else {
            false
        }
    }

    /// Consumes bytes matching `pred`, at most `max` of them. Returns the count.
    pub(crate) fn eat_up_to(&mut self, max: usize, pred: impl Fn(u8) -> bool) -> usize {
        let mut n = 0;
        while n < max && self.peek().is_some_and(&pred) {
            self.pos += 1;
            n += 1;
        }
        n
    }

    /// Consumes bytes matching `pred`. Returns the count.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        self.eat_up_to(usize::MAX, pred)
    }

    /// Consumes bytes matching `pred` or `%HH` triplets. Returns bytes consumed.
    ///
    /// A `%` without two hex digits after it ends the run.
    pub(crate) fn eat_encoded_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        loop {
            match self.peek() {
                Some(b) if pred(b) => self.pos += 1,
                Some(b'%') if self.at_pct_triplet() => self.pos += 3,
                _ => break,
            }
        }
        self.pos - start
    }

    fn at_pct_triplet(&self) -> bool {
        self.peek_at(1).is_some_and(|b| b.is_ascii_hexdigit())
            && self.peek_at(2).is_some_and(|b| b.is_ascii_hexdigit())
    }
}
