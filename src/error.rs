//! Error types.
//!
//! Matching itself has a single failure, the absence of a match, which the
//! matcher reports as `None`. These types exist for the `FromStr` and
//! `TryFrom` conversions that need a `Result`.

use std::fmt;

/// The input is not a URI under the grammar.
///
/// Carries no detail about which component failed: a match either
/// succeeds as a whole or not at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoMatchError {
    /// The input that failed to match
    pub input: String,
}

impl fmt::Display for NoMatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a URI", self.input)
    }
}

impl std::error::Error for NoMatchError {}

/// A component name that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownComponentError {
    /// The unrecognized name
    pub name: String,
}

impl fmt::Display for UnknownComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown component '{}'; expected one of scheme, userinfo, host, domain, ipv4, ipv6, port, path, query, fragment",
            self.name
        )
    }
}

impl std::error::Error for UnknownComponentError {}
