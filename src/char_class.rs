//! RFC 3986 character classes over ASCII bytes.
//!
//! ```abnf
//! unreserved  = ALPHA / DIGIT / "-" / "." / "_" / "~"
//! sub-delims  = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="
//! pchar       = unreserved / pct-encoded / sub-delims / ":" / "@"
//! pct-encoded = "%" HEXDIG HEXDIG
//! ```
//!
//! `pct-encoded` spans three bytes and is handled by the cursor, not here.

/// `scheme` character: `ALPHA / DIGIT / "+" / "-" / "."`.
pub(crate) const fn is_scheme(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

pub(crate) const fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

pub(crate) const fn is_sub_delim(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}

/// `userinfo` character, excluding `pct-encoded`.
pub(crate) const fn is_userinfo(b: u8) -> bool {
    is_unreserved(b) || is_sub_delim(b) || b == b':'
}

/// `pchar`, excluding `pct-encoded`.
pub(crate) const fn is_pchar(b: u8) -> bool {
    is_unreserved(b) || is_sub_delim(b) || matches!(b, b':' | b'@')
}

/// Path body character: `pchar / "/"`.
pub(crate) const fn is_path(b: u8) -> bool {
    is_pchar(b) || b == b'/'
}

/// Query and fragment body character: `pchar / "/" / "?"`.
pub(crate) const fn is_query_or_fragment(b: u8) -> bool {
    is_pchar(b) || matches!(b, b'/' | b'?')
}

/// Domain label character: `ALPHA / DIGIT / "-"`.
pub(crate) const fn is_label(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}
