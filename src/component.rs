//! Named URI components.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownComponentError;

/// A named component of a match, for access by name.
///
/// # Examples
///
/// ```
/// use generic_uri::{match_uri, Component};
///
/// let m = match_uri("https://example.com:443/").unwrap();
/// let port: Component = "port".parse().unwrap();
/// assert_eq!(m.get(port), Some(":443"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Component {
    /// The scheme, without its `:`.
    Scheme,
    /// User information, with its trailing `@`.
    Userinfo,
    /// The host as written, with IPv6 brackets.
    Host,
    /// A domain host.
    Domain,
    /// An IPv4 host.
    Ipv4,
    /// An IPv6 host, without brackets.
    Ipv6,
    /// The port, with its leading `:`.
    Port,
    /// The path, with its leading `/`. May be empty.
    Path,
    /// The query, with its leading `?`.
    Query,
    /// The fragment, with its leading `#`.
    Fragment,
}

impl Component {
    /// All components, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Scheme,
        Self::Userinfo,
        Self::Host,
        Self::Domain,
        Self::Ipv4,
        Self::Ipv6,
        Self::Port,
        Self::Path,
        Self::Query,
        Self::Fragment,
    ];

    /// Returns the lowercase name of this component.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scheme => "scheme",
            Self::Userinfo => "userinfo",
            Self::Host => "host",
            Self::Domain => "domain",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
            Self::Port => "port",
            Self::Path => "path",
            Self::Query => "query",
            Self::Fragment => "fragment",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Component {
    type Err = UnknownComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownComponentError {
                name: s.to_string(),
            })
    }
}
