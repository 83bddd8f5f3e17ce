//! Equality of URLs by canonical form.

use crate::core::normalizer::normalize;
use crate::error::UrlError;

/// Check whether two URLs normalize to the same canonical string.
///
/// # Examples
///
/// ```
/// use canonurl::compare;
///
/// assert!(compare("http://examPLe.com:80/abc?x=&b=1", "http://eXAmple.com/abc?b=1").unwrap());
/// assert!(!compare("http://example.com/a", "http://example.com/b").unwrap());
/// ```
pub fn compare(url_a: &str, url_b: &str) -> Result<bool, UrlError> {
    Ok(normalize(url_a)? == normalize(url_b)?)
}
