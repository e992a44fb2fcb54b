//! Byte spans into scanned text.

use std::fmt;
use std::ops::Range;

/// A half-open byte range `[start, end)` into the text a match was taken from.
///
/// Spans produced by the matcher always fall on UTF-8 character boundaries,
/// since every byte the grammar accepts is ASCII.
///
/// # Examples
///
/// ```
/// use generic_uri::find_all;
///
/// let text = "see https://example.com now";
/// let (span, _) = find_all(text).next().unwrap();
/// assert_eq!(span.start(), 4);
/// assert_eq!(span.get(text), Some("https://example.com"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Creates a span. `end` is clamped so the span is never inverted.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        let end = if end < start { start } else { end };
        Self { start, end }
    }

    /// Creates an empty span at `at`.
    #[must_use]
    pub const fn empty(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Returns the start offset.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the end offset (exclusive).
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns the length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the span as a `Range`.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the text this span covers in `source`, or `None` if the span
    /// does not lie within `source` on character boundaries.
    #[must_use]
    pub fn get<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.range())
    }

    /// Returns this span moved `offset` bytes towards the start.
    pub(crate) const fn shift_back(self, offset: usize) -> Self {
        Self {
            start: self.start - offset,
            end: self.end - offset,
        }
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.range()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_inverted_range() {
        let span = Span::new(5, 2);
        assert_eq!(span.start(), 5);
        assert!(span.is_empty());
    }

    #[test]
    fn get_slices_source() {
        let span = Span::new(0, 5);
        assert_eq!(span.get("https://x"), Some("https"));
        assert_eq!(span.len(), 5);
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        assert_eq!(Span::new(2, 10).get("abc"), None);
    }

    #[test]
    fn get_off_char_boundary_is_none() {
        assert_eq!(Span::new(0, 1).get("é"), None);
    }

    #[test]
    fn shift_back_preserves_length() {
        let span = Span::new(10, 14).shift_back(10);
        assert_eq!(span, Span::new(0, 4));
    }

    #[test]
    fn display_shows_range() {
        assert_eq!(Span::new(3, 7).to_string(), "3..7");
        let range: Range<usize> = Span::new(3, 7).into();
        assert_eq!(range, 3..7);
    }
}
