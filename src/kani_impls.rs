//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{is_valid_tld, Component, Ipv4Mode, MatchConfig, UriMatcher};

/// Bytes that drive the grammar into every branch.
const URI_CHARS: &[u8] = b"ab09.-+:/@[]%?#!Fz";

/// Maximum generated input length
const MAX_LEN: usize = 8;

fn arbitrary_uri_char() -> char {
    let idx: usize = kani::any();
    URI_CHARS[idx % URI_CHARS.len()] as char
}

fn arbitrary_input() -> String {
    let len: usize = kani::any();
    let len = len % (MAX_LEN + 1);
    (0..len).map(|_| arbitrary_uri_char()).collect()
}

impl kani::Arbitrary for Ipv4Mode {
    fn any() -> Self {
        if kani::any() {
            Ipv4Mode::Strict
        } else {
            Ipv4Mode::Lenient
        }
    }
}

impl kani::Arbitrary for MatchConfig {
    fn any() -> Self {
        MatchConfig::new()
            .with_ipv4_mode(kani::any())
            .with_allow_empty_host(kani::any())
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: matching never panics, under any configuration
#[kani::proof]
#[kani::unwind(10)]
fn proof_match_never_panics() {
    let input = arbitrary_input();
    let matcher = UriMatcher::new(kani::any());
    let _ = matcher.match_uri(&input);
}

/// Proof: a full match covers the input and displays as it
#[kani::proof]
#[kani::unwind(10)]
fn proof_match_reconstructs_input() {
    let input = arbitrary_input();
    if let Some(m) = UriMatcher::new(kani::any()).match_uri(&input) {
        assert_eq!(m.as_str(), input);
        assert_eq!(m.to_string(), input);
    }
}

/// Proof: a host resolves to exactly one of domain, ipv4, ipv6
#[kani::proof]
#[kani::unwind(10)]
fn proof_host_exclusive() {
    let input = arbitrary_input();
    if let Some(m) = UriMatcher::new(kani::any()).match_uri(&input) {
        let resolved = [Component::Domain, Component::Ipv4, Component::Ipv6]
            .into_iter()
            .filter(|c| m.get(*c).is_some())
            .count();
        let expected = usize::from(m.host().is_some());
        assert_eq!(resolved, expected);
    }
}

/// Proof: scanning yields ordered, non-overlapping matches
#[kani::proof]
#[kani::unwind(10)]
fn proof_find_all_ordered() {
    let input = arbitrary_input();
    let mut last_end = 0;
    for (span, m) in UriMatcher::default().find_all(&input) {
        assert!(span.start() >= last_end);
        assert!(span.end() <= input.len());
        assert_eq!(m.as_str(), &input[span.range()]);
        last_end = span.end();
    }
}

/// Proof: TLD lookup ignores ASCII case
#[kani::proof]
#[kani::unwind(4)]
fn proof_tld_case_insensitive() {
    let bytes: [u8; 3] = kani::any();
    kani::assume(bytes.iter().all(u8::is_ascii_alphabetic));
    let label = String::from_utf8_lossy(&bytes).into_owned();
    assert_eq!(
        is_valid_tld(&label),
        is_valid_tld(&label.to_ascii_uppercase())
    );
}
