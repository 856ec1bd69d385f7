//! Hostname helpers used by blacklist matching.
//!
//! Matching is exact-string: no case folding or IDNA conversion happens here.

/// Query name that always bypasses recording and filtering.
pub const LOCALHOST_FQDN: &str = "localhost.";

/// Strips exactly one trailing terminator dot.
pub fn normalize_hostname(hostname: &str) -> &str {
    hostname.strip_suffix('.').unwrap_or(hostname)
}

/// Last two labels of a normalized hostname with more than two labels.
///
/// This is a registrable-domain approximation, not a public-suffix lookup:
/// `a.b.co.uk` reduces to `co.uk`.
pub fn two_label_parent(normalized: &str) -> Option<&str> {
    let mut dots = normalized.rmatch_indices('.').map(|(idx, _)| idx);
    let _last = dots.next()?;
    let cut = dots.next()?;
    Some(&normalized[cut + 1..])
}

/// Candidate strings tested against the blacklist, in lookup order.
pub fn blacklist_candidates(hostname: &str, wildcard: bool) -> Vec<&str> {
    let normalized = normalize_hostname(hostname);
    let mut candidates = vec![normalized];
    if wildcard {
        if let Some(parent) = two_label_parent(normalized) {
            candidates.push(parent);
        }
    }
    candidates
}
