//! Full-string matching and scanning entry points.

use std::iter::FusedIterator;

use tracing::trace;

use crate::config::MatchConfig;
use crate::grammar::{parse_at, Anchor, Attempt};
use crate::span::Span;
use crate::uri_match::UriMatch;

/// Matches URIs under a fixed [`MatchConfig`].
///
/// The free functions [`match_uri`](crate::match_uri) and
/// [`find_all`](crate::find_all) use `UriMatcher::default()`.
///
/// # Examples
///
/// ```
/// use generic_uri::{Ipv4Mode, MatchConfig, UriMatcher};
///
/// let lenient = UriMatcher::default();
/// assert!(lenient.match_uri("http://999.999.999.999").is_some());
///
/// let strict = UriMatcher::new(MatchConfig::new().with_ipv4_mode(Ipv4Mode::Strict));
/// assert!(strict.match_uri("http://999.999.999.999").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UriMatcher {
    config: MatchConfig,
}

impl UriMatcher {
    /// Creates a matcher with the given configuration.
    #[must_use]
    pub const fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Matches the whole of `input` as one URI.
    ///
    /// Returns `None` if `input`, from its first byte to its last, is not a
    /// URI. There is no partial result.
    #[must_use]
    pub fn match_uri<'a>(&self, input: &'a str) -> Option<UriMatch<'a>> {
        match parse_at(input.as_bytes(), 0, &self.config, Anchor::WholeInput) {
            Attempt::Matched(parts) => Some(UriMatch::new(input, parts)),
            Attempt::Failed { .. } => {
                trace!(len = input.len(), "input is not a uri");
                None
            }
        }
    }

    /// Returns true if the whole of `input` is a URI.
    #[must_use]
    pub fn is_match(&self, input: &str) -> bool {
        self.match_uri(input).is_some()
    }

    /// Finds the leftmost URI in `text` starting at or after byte `start`.
    ///
    /// Returns `None` if there is none, or if `start` is past the end.
    #[must_use]
    pub fn find_at<'a>(&self, text: &'a str, start: usize) -> Option<(Span, UriMatch<'a>)> {
        let bytes = text.as_bytes();
        let mut pos = start;
        while pos < bytes.len() {
            match parse_at(bytes, pos, &self.config, Anchor::Prefix) {
                Attempt::Matched(parts) => {
                    trace!(start = parts.whole.start(), end = parts.whole.end(), "found uri");
                    return Some((parts.whole, UriMatch::new(text, parts)));
                }
                Attempt::Failed { resume } => pos = resume,
            }
        }
        None
    }

    /// Returns an iterator over every non-overlapping URI in `text`,
    /// leftmost first.
    #[must_use]
    pub const fn find_all<'a>(&self, text: &'a str) -> FindAll<'a> {
        FindAll {
            matcher: *self,
            text,
            pos: 0,
        }
    }
}

/// Iterator over the URIs embedded in a text.
///
/// Created by [`find_all`](crate::find_all) or [`UriMatcher::find_all`].
/// Each item is the span of the match together with the match itself.
/// Scanning resumes where the previous match ended; cloning the iterator
/// snapshots its position.
#[derive(Debug, Clone)]
pub struct FindAll<'a> {
    matcher: UriMatcher,
    text: &'a str,
    pos: usize,
}

impl FindAll<'_> {
    /// Returns the byte offset the next search starts from.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }
}

impl<'a> Iterator for FindAll<'a> {
    type Item = (Span, UriMatch<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((span, m)) = self.matcher.find_at(self.text, self.pos) {
            self.pos = span.end();
            Some((span, m))
        } else {
            self.pos = self.text.len();
            None
        }
    }
}

impl FusedIterator for FindAll<'_> {}
