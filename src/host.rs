//! Host alternatives of the authority.
//!
//! # Grammar Reference
//!
//! ```abnf
//! host      = ipv6-lit / ipv4-lit / domain
//! ipv6-lit  = "[" 7( 1*4HEXDIG ":" ) 1*4HEXDIG "]"
//! ipv4-lit  = 1*3DIGIT "." 1*3DIGIT "." 1*3DIGIT "." 1*3DIGIT
//! domain    = label *( "." label ) "." tld
//! label     = alphanum [ *61( alphanum / "-" ) alphanum ]
//! ```
//!
//! Alternatives are tried in that order. IPv4 and domain hosts must end where
//! the dotted label run ends, so a TLD is always the last label of the run and
//! never a prefix of path text.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use tracing::trace;

use crate::char_class::is_label;
use crate::config::{Ipv4Mode, MatchConfig};
use crate::constants::{
    IPV4_OCTETS, IPV6_GROUPS, MAX_DNS_LABEL_LENGTH, MAX_IPV4_OCTET_DIGITS, MAX_IPV4_OCTET_VALUE,
    MAX_IPV6_GROUP_DIGITS, MIN_DOMAIN_LABELS,
};
use crate::cursor::Cursor;
use crate::span::Span;
use crate::tld::is_valid_tld;

/// The resolved host of a match, borrowing from the matched text.
///
/// # Examples
///
/// ```
/// use generic_uri::{match_uri, Host};
///
/// let m = match_uri("http://[::1]").map(|m| m.host_kind());
/// assert!(m.is_none()); // compressed IPv6 is not accepted
///
/// let m = match_uri("http://10.0.0.1/").unwrap();
/// assert_eq!(m.host_kind(), Some(Host::Ipv4("10.0.0.1")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Host<'a> {
    /// A registered name ending in a known TLD (e.g., "www.example.com")
    Domain(&'a str),
    /// A dotted-quad literal (e.g., "192.168.1.1")
    Ipv4(&'a str),
    /// An eight-group IPv6 literal without its brackets
    Ipv6(&'a str),
}

impl<'a> Host<'a> {
    /// Returns the host text. IPv6 literals are returned without brackets.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        match self {
            Self::Domain(s) | Self::Ipv4(s) | Self::Ipv6(s) => s,
        }
    }

    /// Returns the address for IP literals.
    ///
    /// Returns `None` for domains and for lenient IPv4 literals that are not
    /// real addresses (octets above 255 or with leading zeros).
    #[must_use]
    pub fn to_ip_addr(&self) -> Option<IpAddr> {
        match self {
            Self::Domain(_) => None,
            Self::Ipv4(s) => s.parse::<Ipv4Addr>().ok().map(IpAddr::V4),
            Self::Ipv6(s) => s.parse::<Ipv6Addr>().ok().map(IpAddr::V6),
        }
    }

    /// Returns true if this is a domain host.
    #[must_use]
    pub const fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }

    /// Returns true if this is an IPv4 or IPv6 literal.
    #[must_use]
    pub const fn is_ip(&self) -> bool {
        matches!(self, Self::Ipv4(_) | Self::Ipv6(_))
    }
}

impl fmt::Display for Host<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ipv6(s) => write!(f, "[{s}]"),
            Self::Domain(s) | Self::Ipv4(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum HostKind {
    Domain,
    Ipv4,
    Ipv6,
}

/// Host spans: `whole` keeps IPv6 brackets, `addr` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct HostSpan {
    pub(crate) whole: Span,
    pub(crate) addr: Span,
    pub(crate) kind: HostKind,
}

impl HostSpan {
    pub(crate) const fn shift_back(self, offset: usize) -> Self {
        Self {
            whole: self.whole.shift_back(offset),
            addr: self.addr.shift_back(offset),
            kind: self.kind,
        }
    }
}

/// Parses a host at the cursor, advancing it past the host on success.
pub(crate) fn parse_host(cursor: &mut Cursor<'_>, config: &MatchConfig) -> Option<HostSpan> {
    let start = cursor.pos();
    let (end, kind) = parse_ipv6(*cursor)
        .map(|c| (c, HostKind::Ipv6))
        .or_else(|| parse_ipv4(*cursor, config.ipv4_mode).map(|c| (c, HostKind::Ipv4)))
        .or_else(|| parse_domain(*cursor).map(|c| (c, HostKind::Domain)))?;

    let whole = end.span_from(start);
    let addr = match kind {
        HostKind::Ipv6 => Span::new(whole.start() + 1, whole.end() - 1),
        HostKind::Ipv4 | HostKind::Domain => whole,
    };
    trace!(?kind, start, end = end.pos(), "resolved host");
    *cursor = end;
    Some(HostSpan { whole, addr, kind })
}

fn parse_ipv6(mut c: Cursor<'_>) -> Option<Cursor<'_>> {
    if !c.eat(b'[') {
        return None;
    }
    for group in 0..IPV6_GROUPS {
        if group > 0 && !c.eat(b':') {
            return None;
        }
        if c.eat_up_to(MAX_IPV6_GROUP_DIGITS, |b| b.is_ascii_hexdigit()) == 0 {
            return None;
        }
    }
    c.eat(b']').then_some(c)
}

fn parse_ipv4(mut c: Cursor<'_>, mode: Ipv4Mode) -> Option<Cursor<'_>> {
    for octet in 0..IPV4_OCTETS {
        if octet > 0 && !c.eat(b'.') {
            return None;
        }
        let start = c.pos();
        if c.eat_up_to(MAX_IPV4_OCTET_DIGITS, |b| b.is_ascii_digit()) == 0 {
            return None;
        }
        if mode == Ipv4Mode::Strict && octet_value(&c, start) > MAX_IPV4_OCTET_VALUE {
            return None;
        }
    }
    (!continues_host(&c)).then_some(c)
}

fn parse_domain(mut c: Cursor<'_>) -> Option<Cursor<'_>> {
    let mut labels = 0;
    loop {
        let start = c.pos();
        let len = c.eat_while(is_label);
        let label = c.span_from(start);
        if len == 0 || len > MAX_DNS_LABEL_LENGTH || !is_bounded_label(&c, label) {
            return None;
        }
        labels += 1;
        if !continues_host(&c) {
            let tld_ok = c.text(label).is_some_and(is_valid_tld);
            return (labels >= MIN_DOMAIN_LABELS && tld_ok).then_some(c);
        }
        c.eat(b'.');
    }
}

/// Labels begin and end with an alphanumeric.
fn is_bounded_label(c: &Cursor<'_>, label: Span) -> bool {
    let is_alnum = |b: Option<u8>| b.is_some_and(|b| b.is_ascii_alphanumeric());
    is_alnum(c.byte_at(label.start())) && is_alnum(c.byte_at(label.end() - 1))
}

/// True if the byte run at the cursor would extend a dotted label run.
fn continues_host(c: &Cursor<'_>) -> bool {
    match c.peek() {
        Some(b'.') => c.peek_at(1).is_some_and(|b| b.is_ascii_alphanumeric()),
        Some(b) => is_label(b),
        None => false,
    }
}

fn octet_value(c: &Cursor<'_>, start: usize) -> u16 {
    (start..c.pos())
        .filter_map(|i| c.byte_at(i))
        .fold(0, |acc, b| acc * 10 + u16::from(b - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(input: &str) -> Option<(HostKind, &str)> {
        host_with(input, &MatchConfig::default())
    }

    fn host_with<'a>(input: &'a str, config: &MatchConfig) -> Option<(HostKind, &'a str)> {
        let mut c = Cursor::new(input.as_bytes(), 0);
        let span = parse_host(&mut c, config)?;
        Some((span.kind, &input[span.addr.range()]))
    }

    #[test]
    fn parse_domain_host() {
        assert_eq!(host("www.example.com"), Some((HostKind::Domain, "www.example.com")));
    }

    #[test]
    fn domain_stops_before_path() {
        assert_eq!(host("example.com/a.b"), Some((HostKind::Domain, "example.com")));
    }

    #[test]
    fn domain_stops_before_trailing_dot() {
        assert_eq!(host("example.com."), Some((HostKind::Domain, "example.com")));
    }

    #[test]
    fn domain_requires_known_tld() {
        assert_eq!(host("example.invalidtld123"), None);
    }

    #[test]
    fn domain_tld_is_last_label_of_run() {
        assert_eq!(host("example.com.evil"), None);
        assert_eq!(host("example.com-x"), None);
    }

    #[test]
    fn domain_tld_ignores_case() {
        assert_eq!(host("EXAMPLE.COM"), Some((HostKind::Domain, "EXAMPLE.COM")));
    }

    #[test]
    fn domain_needs_two_labels() {
        assert_eq!(host("localhost"), None);
        assert_eq!(host("com"), None);
    }

    #[test]
    fn domain_label_hyphen_rules() {
        assert_eq!(host("my-host.org"), Some((HostKind::Domain, "my-host.org")));
        assert_eq!(host("-host.org"), None);
        assert_eq!(host("host-.org"), None);
    }

    #[test]
    fn domain_label_length_limit() {
        let ok = format!("{}.com", "a".repeat(MAX_DNS_LABEL_LENGTH));
        assert!(host(&ok).is_some());
        let too_long = format!("{}.com", "a".repeat(MAX_DNS_LABEL_LENGTH + 1));
        assert_eq!(host(&too_long), None);
    }

    #[test]
    fn parse_ipv4_host() {
        assert_eq!(host("192.168.1.1:80"), Some((HostKind::Ipv4, "192.168.1.1")));
    }

    #[test]
    fn ipv4_is_lenient_by_default() {
        assert_eq!(host("999.999.999.999"), Some((HostKind::Ipv4, "999.999.999.999")));
    }

    #[test]
    fn ipv4_strict_mode_checks_octets() {
        let strict = MatchConfig::new().with_ipv4_mode(Ipv4Mode::Strict);
        assert_eq!(host_with("999.1.1.1", &strict), None);
        assert_eq!(host_with("255.0.0.255", &strict), Some((HostKind::Ipv4, "255.0.0.255")));
    }

    #[test]
    fn ipv4_octet_width_is_bounded() {
        assert_eq!(host("1.2.3.4567"), None);
        assert_eq!(host("1.2.3"), None);
    }

    #[test]
    fn numeric_prefix_falls_back_to_domain() {
        assert_eq!(host("1.2.3.4.com"), Some((HostKind::Domain, "1.2.3.4.com")));
    }

    #[test]
    fn parse_ipv6_host() {
        let (kind, addr) = host("[2001:0db8:0000:0000:0000:0000:0000:0001]/x").unwrap();
        assert_eq!(kind, HostKind::Ipv6);
        assert_eq!(addr, "2001:0db8:0000:0000:0000:0000:0000:0001");
    }

    #[test]
    fn ipv6_rejects_compressed_form() {
        assert_eq!(host("[::1]"), None);
        assert_eq!(host("[2001:db8::1]"), None);
    }

    #[test]
    fn ipv6_rejects_wrong_group_count() {
        assert_eq!(host("[1:2:3:4:5:6:7]"), None);
        assert_eq!(host("[1:2:3:4:5:6:7:8:9]"), None);
        assert_eq!(host("[1:2:3:4:5:6:7:12345]"), None);
    }

    #[test]
    fn ipv6_whole_span_keeps_brackets() {
        let input = "[1:2:3:4:5:6:7:8]";
        let mut c = Cursor::new(input.as_bytes(), 0);
        let span = parse_host(&mut c, &MatchConfig::default()).unwrap();
        assert_eq!(&input[span.whole.range()], input);
        assert_eq!(&input[span.addr.range()], "1:2:3:4:5:6:7:8");
    }

    #[test]
    fn host_view_to_ip_addr() {
        assert!(Host::Ipv4("127.0.0.1").to_ip_addr().is_some());
        assert!(Host::Ipv4("999.0.0.1").to_ip_addr().is_none());
        assert!(Host::Ipv6("0:0:0:0:0:0:0:1").to_ip_addr().is_some());
        assert!(Host::Domain("example.com").to_ip_addr().is_none());
    }

    #[test]
    fn host_view_display_brackets_ipv6() {
        assert_eq!(Host::Ipv6("1:2:3:4:5:6:7:8").to_string(), "[1:2:3:4:5:6:7:8]");
        assert_eq!(Host::Domain("a.com").to_string(), "a.com");
    }
}
