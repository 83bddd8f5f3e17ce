//! Encoding a URL into its ASCII transport form.
//!
//! The inverse direction of normalization: host labels go to IDNA ASCII and
//! path, query values and fragment are percent-encoded. Existing `%XX`
//! escapes are left alone.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};

use crate::core::composer::construct;
use crate::error::UrlError;
use crate::types::UrlParts;
use crate::url::extract::extract;
use crate::url::psl::is_ip_literal;

const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/')
    .remove(b'%');

const FRAGMENT: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');

/// Encode a URL: IDNA-ASCII host, percent-encoded path, query values and fragment.
///
/// # Examples
///
/// ```
/// use canonurl::encode;
///
/// let encoded = encode("http://bücher.example/ä b?q=ü&x=1#frag ment").unwrap();
/// assert_eq!(
///     encoded,
///     "http://xn--bcher-kva.example/%C3%A4%20b?q=%C3%BC&x=1#frag%20ment"
/// );
/// ```
pub fn encode(url: &str) -> Result<String, UrlError> {
    let parts = extract(url)?;

    let encoded = UrlParts {
        subdomain: host_to_ascii(&parts.subdomain)?,
        domain: host_to_ascii(&parts.domain)?,
        tld: host_to_ascii(&parts.tld)?,
        path: utf8_percent_encode(&parts.path, PATH).to_string(),
        query: encode_query(&parts.query),
        fragment: utf8_percent_encode(&parts.fragment, FRAGMENT).to_string(),
        ..parts
    };

    Ok(construct(&encoded))
}

fn host_to_ascii(host: &str) -> Result<String, UrlError> {
    if host.is_empty() || is_ip_literal(host) {
        return Ok(host.to_string());
    }

    let labels = host
        .split('.')
        .map(label_to_ascii)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(labels.join("."))
}

fn label_to_ascii(label: &str) -> Result<String, UrlError> {
    if label.is_empty() {
        return Ok(String::new());
    }

    idna::domain_to_ascii(label).map_err(|err| UrlError::HostDecode {
        label: label.to_string(),
        reason: format!("{err:?}"),
    })
}

/// Percent-encode the value of every `key=value` pair; keys are kept as-is.
fn encode_query(query: &str) -> String {
    query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => format!("{key}={}", utf8_percent_encode(value, QUERY_VALUE)),
            None => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_ascii_url_unchanged() {
        assert_eq!(
            encode("https://www.example.com/a/b?x=1&y=2#top").unwrap(),
            "https://www.example.com/a/b?x=1&y=2#top"
        );
    }

    #[test]
    fn test_encode_keeps_existing_escapes() {
        assert_eq!(
            encode("http://example.com/a%20b?q=a%26b").unwrap(),
            "http://example.com/a%20b?q=a%26b"
        );
    }

    #[test]
    fn test_encode_query_values() {
        assert_eq!(encode_query("q=a b&empty=&flag"), "q=a%20b&empty=&flag");
        assert_eq!(encode_query("path=/x/y&p=a+b"), "path=/x/y&p=a%2Bb");
        assert_eq!(encode_query(""), "");
    }

    #[test]
    fn test_encode_idna_host() {
        assert_eq!(encode("http://münchen.de/").unwrap(), "http://xn--mnchen-3ya.de/");
    }

    #[test]
    fn test_host_to_ascii_reports_failing_label() {
        assert_eq!(host_to_ascii("www.bücher").unwrap(), "www.xn--bcher-kva");
        match host_to_ascii("www.XN--A-!") {
            Err(UrlError::HostDecode { label, .. }) => assert_eq!(label, "XN--A-!"),
            other => panic!("Expected HostDecode, got {other:?}"),
        }
    }

    #[test]
    fn test_encode_ip_host() {
        assert_eq!(encode("http://[::1]:8080/ü").unwrap(), "http://[::1]:8080/%C3%BC");
    }
}
