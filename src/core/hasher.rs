//! SHA-256 fingerprints of canonical URLs, for use as deduplication keys.

use sha2::{Digest, Sha256};

use crate::core::normalizer::normalize;
use crate::error::UrlError;

/// SHA-256 digest of the canonical form of `url`.
pub fn fingerprint_bytes(url: &str) -> Result<[u8; 32], UrlError> {
    let canonical = normalize(url)?;
    Ok(Sha256::digest(canonical.as_bytes()).into())
}

/// Lowercase hex SHA-256 of the canonical form of `url`.
///
/// Equivalent URLs share a fingerprint:
///
/// ```
/// use canonurl::fingerprint;
///
/// let a = fingerprint("HTTP://Example.com:80/a/../b").unwrap();
/// let b = fingerprint("http://example.com/b").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 64);
/// ```
pub fn fingerprint(url: &str) -> Result<String, UrlError> {
    Ok(hex::encode(fingerprint_bytes(url)?))
}
