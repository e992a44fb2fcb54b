//! Matching configuration.

/// How IPv4 literals are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ipv4Mode {
    /// Any 1-3 digit octet is accepted, so `999.999.999.999` matches.
    #[default]
    Lenient,
    /// Octets must be in `0..=255`.
    Strict,
}

/// Configuration for a [`UriMatcher`](crate::UriMatcher).
///
/// The defaults reproduce the reference grammar exactly; each switch only
/// narrows or widens what is accepted, never how a match is split into
/// components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchConfig {
    /// IPv4 octet checking.
    ///
    /// Default: [`Ipv4Mode::Lenient`]
    pub ipv4_mode: Ipv4Mode,

    /// Whether an empty authority followed by a path (`file:///etc/hosts`)
    /// is accepted. The host is then absent from the match.
    ///
    /// Default: true
    pub allow_empty_host: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            ipv4_mode: Ipv4Mode::Lenient,
            allow_empty_host: true,
        }
    }
}

impl MatchConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the IPv4 checking mode.
    #[must_use]
    pub const fn with_ipv4_mode(mut self, mode: Ipv4Mode) -> Self {
        self.ipv4_mode = mode;
        self
    }

    /// Enables or disables empty-host authorities.
    #[must_use]
    pub const fn with_allow_empty_host(mut self, allow: bool) -> Self {
        self.allow_empty_host = allow;
        self
    }
}
