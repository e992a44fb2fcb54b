//! Constants for URI grammar limits.

/// DNS label maximum length.
pub const MAX_DNS_LABEL_LENGTH: usize = 63;

/// Minimum number of labels in a domain host (at least one label plus the TLD).
pub const MIN_DOMAIN_LABELS: usize = 2;

/// Number of dot-separated octets in an IPv4 literal.
pub const IPV4_OCTETS: usize = 4;

/// Maximum digits per IPv4 octet.
pub const MAX_IPV4_OCTET_DIGITS: usize = 3;

/// Largest octet value accepted in strict IPv4 mode.
pub const MAX_IPV4_OCTET_VALUE: u16 = 255;

/// Number of colon-separated groups in an IPv6 literal.
pub const IPV6_GROUPS: usize = 8;

/// Maximum hex digits per IPv6 group.
pub const MAX_IPV6_GROUP_DIGITS: usize = 4;

/// Separator between the scheme and the authority.
pub const AUTHORITY_SEPARATOR: &str = "://";
