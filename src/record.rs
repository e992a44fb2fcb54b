//! Owned URI record.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::NoMatchError;
use crate::grammar::Parts;
use crate::matcher::UriMatcher;
use crate::uri_match::UriMatch;

/// An owned copy of a match: the matched text plus its component spans.
///
/// Use this when a match has to outlive the text it was found in.
///
/// # Examples
///
/// ```
/// use generic_uri::UriRecord;
///
/// let record: UriRecord = "http://192.168.1.1:8080/admin".parse().unwrap();
/// assert_eq!(record.as_match().ipv4(), Some("192.168.1.1"));
/// assert_eq!(record.as_match().port(), Some(":8080"));
///
/// assert!("not-a-uri".parse::<UriRecord>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UriRecord {
    text: String,
    /// Spans relative to `text`
    parts: Parts,
}

impl UriRecord {
    /// Matches the whole of `input` with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `NoMatchError` if `input` is not a URI under the grammar.
    pub fn parse(input: &str) -> Result<Self, NoMatchError> {
        UriMatcher::default()
            .match_uri(input)
            .map(|m| m.to_owned_record())
            .ok_or_else(|| NoMatchError {
                input: input.to_string(),
            })
    }

    pub(crate) const fn from_parts(text: String, parts: Parts) -> Self {
        Self { text, parts }
    }

    /// Returns a borrowed view with all component accessors.
    #[must_use]
    pub fn as_match(&self) -> UriMatch<'_> {
        UriMatch::new(&self.text, self.parts)
    }

    /// Returns the URI text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the record, returning the URI text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for UriRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for UriRecord {
    type Err = NoMatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for UriRecord {
    type Error = NoMatchError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl AsRef<str> for UriRecord {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialOrd for UriRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UriRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UriRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UriRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
