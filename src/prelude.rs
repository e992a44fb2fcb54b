//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use generic_uri::prelude::*;
//!
//! let m = match_uri("http://192.168.1.1:8080/admin").unwrap();
//! assert_eq!(m.get(Component::Ipv4), Some("192.168.1.1"));
//! ```

pub use crate::{
    // Entry points
    find_all, is_valid_tld, match_uri, FindAll, UriMatcher,
    // Match types
    Component, Host, Span, UriMatch, UriRecord,
    // Configuration
    Ipv4Mode, MatchConfig,
    // Errors
    NoMatchError, UnknownComponentError,
    // Constants
    AUTHORITY_SEPARATOR, IPV4_OCTETS, IPV6_GROUPS, MAX_DNS_LABEL_LENGTH, MAX_IPV4_OCTET_DIGITS,
    MAX_IPV4_OCTET_VALUE, MAX_IPV6_GROUP_DIGITS, MIN_DOMAIN_LABELS, TLDS,
};
