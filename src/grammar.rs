//! Recursive-descent recognizer for the generic URI grammar.
//!
//! # Grammar Reference
//!
//! ```abnf
//! uri       = scheme ":" authority [ path ] [ query ] [ fragment ]
//! scheme    = 1*( ALPHA / DIGIT / "+" / "-" / "." )
//! authority = "//" [ userinfo ] host [ port ]
//! userinfo  = 1*( unreserved / pct-encoded / sub-delims / ":" ) "@"
//! port      = ":" 1*DIGIT
//! path      = "/" *( pchar / "/" )
//! query     = "?" *( pchar / "/" / "?" )
//! fragment  = "#" *( pchar / "/" / "?" )
//! ```
//!
//! Every component is taken greedily. The only alternative that is retried
//! is userinfo: when the host after `@` fails, the authority is re-read
//! without userinfo. Each attempt is linear in the bytes it consumes.

use crate::char_class::{is_path, is_query_or_fragment, is_scheme, is_userinfo};
use crate::component::Component;
use crate::config::MatchConfig;
use crate::constants::AUTHORITY_SEPARATOR;
use crate::cursor::Cursor;
use crate::host::{parse_host, HostKind, HostSpan};
use crate::span::Span;

/// Component spans of one match, as offsets into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Parts {
    pub(crate) whole: Span,
    pub(crate) scheme: Span,
    pub(crate) userinfo: Option<Span>,
    pub(crate) host: Option<HostSpan>,
    pub(crate) port: Option<Span>,
    pub(crate) path: Span,
    pub(crate) query: Option<Span>,
    pub(crate) fragment: Option<Span>,
}

impl Parts {
    pub(crate) fn span(&self, component: Component) -> Option<Span> {
        let addr_of = |kind: HostKind| {
            self.host
                .filter(|host| host.kind == kind)
                .map(|host| host.addr)
        };
        match component {
            Component::Scheme => Some(self.scheme),
            Component::Userinfo => self.userinfo,
            Component::Host => self.host.map(|host| host.whole),
            Component::Domain => addr_of(HostKind::Domain),
            Component::Ipv4 => addr_of(HostKind::Ipv4),
            Component::Ipv6 => addr_of(HostKind::Ipv6),
            Component::Port => self.port,
            Component::Path => Some(self.path),
            Component::Query => self.query,
            Component::Fragment => self.fragment,
        }
    }

    /// Re-expresses every span relative to the start of the match.
    pub(crate) fn rebased(self) -> Self {
        let offset = self.whole.start();
        let shift = |span: Span| span.shift_back(offset);
        Self {
            whole: shift(self.whole),
            scheme: shift(self.scheme),
            userinfo: self.userinfo.map(shift),
            host: self.host.map(|host| host.shift_back(offset)),
            port: self.port.map(shift),
            path: shift(self.path),
            query: self.query.map(shift),
            fragment: self.fragment.map(shift),
        }
    }
}

/// Outcome of trying the grammar at one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Attempt {
    Matched(Parts),
    /// No match here. No start before `resume` can match either: every
    /// start inside the same scheme run reaches the same `:` and fails the
    /// same way.
    Failed { resume: usize },
}

/// Whether the match must consume the rest of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Anchor {
    WholeInput,
    Prefix,
}

pub(crate) fn parse_at(
    bytes: &[u8],
    start: usize,
    config: &MatchConfig,
    anchor: Anchor,
) -> Attempt {
    let mut c = Cursor::new(bytes, start);
    if c.eat_while(is_scheme) == 0 {
        return Attempt::Failed { resume: start + 1 };
    }
    let scheme = c.span_from(start);
    let resume = scheme.end() + 1;

    parse_after_scheme(c, scheme, config)
        .filter(|(_, end)| anchor == Anchor::Prefix || end.is_at_end())
        .map_or(Attempt::Failed { resume }, |(parts, _)| Attempt::Matched(parts))
}

fn parse_after_scheme<'a>(
    mut c: Cursor<'a>,
    scheme: Span,
    config: &MatchConfig,
) -> Option<(Parts, Cursor<'a>)> {
    if !c.eat_str(AUTHORITY_SEPARATOR) {
        return None;
    }
    let (userinfo, host, port) = parse_authority(&mut c, config)?;

    let path_start = c.pos();
    if c.eat(b'/') {
        c.eat_encoded_while(is_path);
    }
    let path = c.span_from(path_start);

    let query = optional_part(&mut c, b'?');
    let fragment = optional_part(&mut c, b'#');

    let parts = Parts {
        whole: c.span_from(scheme.start()),
        scheme,
        userinfo,
        host,
        port,
        path,
        query,
        fragment,
    };
    Some((parts, c))
}

type Authority = (Option<Span>, Option<HostSpan>, Option<Span>);

fn parse_authority(c: &mut Cursor<'_>, config: &MatchConfig) -> Option<Authority> {
    if config.allow_empty_host && c.peek() == Some(b'/') {
        return Some((None, None, None));
    }

    let start = c.pos();
    let mut with_userinfo = *c;
    let userinfo_len = with_userinfo.eat_encoded_while(is_userinfo);
    if userinfo_len > 0 && with_userinfo.eat(b'@') {
        let userinfo = with_userinfo.span_from(start);
        if let Some(host) = parse_host(&mut with_userinfo, config) {
            *c = with_userinfo;
            let port = parse_port(c);
            return Some((Some(userinfo), Some(host), port));
        }
    }

    let host = parse_host(c, config)?;
    let port = parse_port(c);
    Some((None, Some(host), port))
}

fn parse_port(c: &mut Cursor<'_>) -> Option<Span> {
    if c.peek() != Some(b':') || !c.peek_at(1).is_some_and(|b| b.is_ascii_digit()) {
        return None;
    }
    let start = c.pos();
    c.eat(b':');
    c.eat_while(|b| b.is_ascii_digit());
    Some(c.span_from(start))
}

/// Query or fragment: `lead` followed by its body, or nothing.
fn optional_part(c: &mut Cursor<'_>, lead: u8) -> Option<Span> {
    let start = c.pos();
    if !c.eat(lead) {
        return None;
    }
    c.eat_encoded_while(is_query_or_fragment);
    Some(c.span_from(start))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(input: &str) -> Option<Parts> {
        match parse_at(input.as_bytes(), 0, &MatchConfig::default(), Anchor::WholeInput) {
            Attempt::Matched(parts) => Some(parts),
            Attempt::Failed { .. } => None,
        }
    }

    fn text(input: &str, component: Component) -> Option<&str> {
        let parts = parts(input)?;
        parts.span(component).map(|span| &input[span.range()])
    }

    #[test]
    fn scheme_excludes_colon() {
        assert_eq!(text("svn+ssh://host.org", Component::Scheme), Some("svn+ssh"));
    }

    #[test]
    fn scheme_may_start_with_digit() {
        assert_eq!(text("9p://host.org", Component::Scheme), Some("9p"));
    }

    #[test]
    fn authority_separator_required() {
        assert!(parts("mailto:user@example.com").is_none());
        assert!(parts("http:/example.com").is_none());
    }

    #[test]
    fn userinfo_keeps_trailing_at() {
        assert_eq!(text("ftp://anon@ftp.example.org", Component::Userinfo), Some("anon@"));
    }

    #[test]
    fn empty_userinfo_is_rejected() {
        assert!(parts("http://@example.com").is_none());
    }

    #[test]
    fn userinfo_accepts_pct_encoded() {
        assert_eq!(
            text("http://a%40b:p@example.com", Component::Userinfo),
            Some("a%40b:p@")
        );
    }

    #[test]
    fn port_keeps_leading_colon() {
        assert_eq!(text("http://example.com:8080", Component::Port), Some(":8080"));
    }

    #[test]
    fn port_has_no_range_check() {
        assert_eq!(text("http://example.com:999999", Component::Port), Some(":999999"));
    }

    #[test]
    fn bare_colon_is_not_a_port() {
        assert!(parts("http://example.com:").is_none());
    }

    #[test]
    fn path_is_empty_but_present_without_slash() {
        assert_eq!(text("http://example.com", Component::Path), Some(""));
    }

    #[test]
    fn path_root_only() {
        assert_eq!(text("http://example.com/", Component::Path), Some("/"));
    }

    #[test]
    fn path_accepts_pchar_set() {
        let input = "http://example.com/a-b_c.d~e!$&'()*+,;=:@/f%20g";
        assert_eq!(text(input, Component::Path), Some("/a-b_c.d~e!$&'()*+,;=:@/f%20g"));
    }

    #[test]
    fn bad_percent_escape_fails_whole_match() {
        assert!(parts("http://example.com/a%zz").is_none());
        assert!(parts("http://example.com/a%2").is_none());
    }

    #[test]
    fn query_may_contain_slash_and_question_mark() {
        assert_eq!(
            text("http://example.com/p?a=1/2?b", Component::Query),
            Some("?a=1/2?b")
        );
    }

    #[test]
    fn fragment_follows_query() {
        let input = "http://example.com?q#frag/x?y";
        assert_eq!(text(input, Component::Query), Some("?q"));
        assert_eq!(text(input, Component::Fragment), Some("#frag/x?y"));
        assert_eq!(text(input, Component::Path), Some(""));
    }

    #[test]
    fn empty_query_and_fragment_are_present() {
        let input = "http://example.com/?#";
        assert_eq!(text(input, Component::Query), Some("?"));
        assert_eq!(text(input, Component::Fragment), Some("#"));
    }

    #[test]
    fn second_hash_fails_whole_match() {
        assert!(parts("http://example.com/#a#b").is_none());
    }

    #[test]
    fn empty_host_with_path() {
        let input = "file:///usr/local/bin/script.sh";
        assert_eq!(text(input, Component::Host), None);
        assert_eq!(text(input, Component::Path), Some("/usr/local/bin/script.sh"));
    }

    #[test]
    fn empty_host_can_be_disabled() {
        let config = MatchConfig::new().with_allow_empty_host(false);
        let attempt = parse_at(b"file:///etc/hosts", 0, &config, Anchor::WholeInput);
        assert!(matches!(attempt, Attempt::Failed { .. }));
    }

    #[test]
    fn empty_authority_without_path_fails() {
        assert!(parts("http://").is_none());
        assert!(parts("http://?q").is_none());
    }

    #[test]
    fn prefix_anchor_stops_at_first_foreign_byte() {
        let input = "http://example.com/a b";
        let attempt = parse_at(input.as_bytes(), 0, &MatchConfig::default(), Anchor::Prefix);
        let Attempt::Matched(parts) = attempt else {
            panic!("expected a match");
        };
        assert_eq!(&input[parts.whole.range()], "http://example.com/a");
    }

    #[test]
    fn failed_attempt_resumes_after_scheme_run() {
        let attempt = parse_at(b"abc:def", 0, &MatchConfig::default(), Anchor::Prefix);
        assert_eq!(attempt, Attempt::Failed { resume: 4 });
        let attempt = parse_at(b" abc", 0, &MatchConfig::default(), Anchor::Prefix);
        assert_eq!(attempt, Attempt::Failed { resume: 1 });
    }

    #[test]
    fn userinfo_falls_back_when_host_after_at_fails() {
        let input = "http://a.com@nohost/x";
        let attempt = parse_at(input.as_bytes(), 0, &MatchConfig::default(), Anchor::Prefix);
        let Attempt::Matched(parts) = attempt else {
            panic!("expected a match");
        };
        assert_eq!(parts.userinfo, None);
        assert_eq!(&input[parts.whole.range()], "http://a.com");
    }

    #[test]
    fn rebased_parts_start_at_zero() {
        let input = "see http://a.com/x";
        let attempt = parse_at(input.as_bytes(), 4, &MatchConfig::default(), Anchor::Prefix);
        let Attempt::Matched(parts) = attempt else {
            panic!("expected a match");
        };
        let rebased = parts.rebased();
        assert_eq!(rebased.whole, Span::new(0, 14));
        assert_eq!(rebased.path, Span::new(12, 14));
    }
}
