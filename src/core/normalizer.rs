//! Componentwise URL canonicalization.
//!
//! Each component has its own normalizer; [`normalize`] chains them into the
//! canonical string used for equality checks.

use crate::core::composer::construct;
use crate::core::decoder::unquote;
use crate::error::UrlError;
use crate::types::{default_port, is_known_scheme, Component, UrlParts};
use crate::url::psl::is_ip_literal;
use crate::url::splitter::{split, split_leading_authority, split_netloc};

/// Normalize a URL into its canonical string form.
///
/// This function:
/// 1. Trims surrounding whitespace and splits the URL
/// 2. Lowercases scheme and host and decodes IDNA labels to Unicode
/// 3. Drops the port when it is the scheme default
/// 4. Collapses the path, sorts the query and decodes the fragment
///
/// # Examples
///
/// ```
/// use canonurl::normalize;
///
/// assert_eq!(normalize("hTtp://ExAMPLe.COM:80").unwrap(), "http://example.com/");
/// assert_eq!(normalize("http://example.com/a/./b/../c?z=3&y=&x=1").unwrap(), "http://example.com/a/c?x=1&z=3");
/// ```
pub fn normalize(url: &str) -> Result<String, UrlError> {
    let url = url.trim();
    if url.is_empty() {
        return Ok(String::new());
    }

    let parts = split(url);
    let (authority, path) = if parts.scheme.is_empty() {
        let (authority, path) = split_leading_authority(&parts.path);
        let path = if path.is_empty() {
            path
        } else {
            normalize_path(&path)?
        };
        (authority, path)
    } else if is_known_scheme(&parts.scheme) {
        (parts.authority.clone(), normalize_path(&parts.path)?)
    } else {
        (parts.authority.clone(), parts.path.clone())
    };

    let (username, password, host, port) = split_netloc(&authority);

    let canonical = UrlParts {
        port: normalize_port(&parts.scheme, &port),
        domain: normalize_host(&host)?,
        query: normalize_query(&parts.query)?,
        fragment: normalize_fragment(&parts.fragment)?,
        scheme: parts.scheme,
        username,
        password,
        path,
        original: url.to_string(),
        ..Default::default()
    };

    Ok(construct(&canonical))
}

/// Normalize a path: decode, resolve `.`/`..` segments and squeeze slashes.
///
/// `""`, `"/"` and `"//"` all become `"/"`. A trailing slash survives.
pub fn normalize_path(path: &str) -> Result<String, UrlError> {
    if matches!(path, "" | "/" | "//") {
        return Ok("/".to_string());
    }

    let decoded = unquote(path, Component::Path.exceptions())?;
    let mut normalized = remove_dot_segments(&decoded);
    if path.ends_with('/') && normalized != "/" {
        normalized.push('/');
    }
    Ok(normalized)
}

/// Resolve dot segments the way POSIX path normalization does.
///
/// `..` at the root of an absolute path is dropped; a relative path keeps
/// leading `..` segments and collapses to `.` when nothing is left.
fn remove_dot_segments(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !absolute {
                    segments.push("..");
                }
            }
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    if absolute {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Normalize a query: keep complete `key=value` pairs and sort them.
///
/// Pairs with an empty key or value, or without `=`, are dropped.
pub fn normalize_query(query: &str) -> Result<String, UrlError> {
    // Shortest meaningful query is "k=v".
    if query.len() < 3 {
        return Ok(String::new());
    }

    let decoded = unquote(query, Component::Query.exceptions())?;
    let mut pairs: Vec<String> = decoded
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (!key.is_empty() && !value.is_empty()).then(|| format!("{key}={value}"))
        })
        .collect();
    pairs.sort();

    Ok(pairs.join("&"))
}

/// Normalize a fragment by decoding everything but its delimiters.
pub fn normalize_fragment(fragment: &str) -> Result<String, UrlError> {
    unquote(fragment, Component::Fragment.exceptions())
}

/// Normalize a host by decoding IDNA labels to Unicode.
///
/// Hosts that already carry an `xn--` label, and IP literals, are returned
/// unchanged.
pub fn normalize_host(host: &str) -> Result<String, UrlError> {
    if host.contains("xn--") || is_ip_literal(host) {
        return Ok(host.to_string());
    }

    let labels = host
        .split('.')
        .map(decode_label)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(labels.join("."))
}

fn decode_label(label: &str) -> Result<String, UrlError> {
    if label.is_empty() {
        return Ok(String::new());
    }

    let (decoded, result) = idna::domain_to_unicode(label);
    result.map_err(|err| UrlError::HostDecode {
        label: label.to_string(),
        reason: format!("{err:?}"),
    })?;

    // UTS46 maps full-width forms such as U+FF0F onto ASCII delimiters.
    if let Some(c) = decoded.chars().find(|&c| is_host_delimiter(c)) {
        return Err(UrlError::HostDecode {
            label: label.to_string(),
            reason: format!("decodes to URL delimiter {c:?}"),
        });
    }
    Ok(decoded)
}

/// Characters that would end or split the host in a composed URL.
fn is_host_delimiter(c: char) -> bool {
    matches!(c, '/' | '?' | '#' | '@' | ':' | '[' | ']' | '\\' | '%') || c.is_whitespace()
}

/// Return the port unless it is the default for `scheme`.
///
/// # Examples
///
/// ```
/// use canonurl::normalize_port;
///
/// assert_eq!(normalize_port("http", "80"), "");
/// assert_eq!(normalize_port("http", "8080"), "8080");
/// assert_eq!(normalize_port("gopher", "70"), "70");
/// ```
pub fn normalize_port(scheme: &str, port: &str) -> String {
    match default_port(scheme) {
        Some(default) if default == port => String::new(),
        _ => port.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_roots() {
        assert_eq!(normalize_path("").unwrap(), "/");
        assert_eq!(normalize_path("/").unwrap(), "/");
        assert_eq!(normalize_path("//").unwrap(), "/");
    }

    #[test]
    fn test_normalize_path_collapses_slashes() {
        assert_eq!(normalize_path("/a/b///c").unwrap(), "/a/b/c");
        assert_eq!(normalize_path("///a").unwrap(), "/a");
    }

    #[test]
    fn test_normalize_path_dot_segments() {
        assert_eq!(normalize_path("/a/./b/../c").unwrap(), "/a/c");
        assert_eq!(normalize_path("/../../a").unwrap(), "/a");
        assert_eq!(normalize_path("/a/b/..").unwrap(), "/a");
        assert_eq!(normalize_path("/a/..").unwrap(), "/");
        assert_eq!(normalize_path("/a/../").unwrap(), "/");
    }

    #[test]
    fn test_normalize_path_relative() {
        assert_eq!(normalize_path("a/../../b").unwrap(), "../b");
        assert_eq!(normalize_path("a/..").unwrap(), ".");
    }

    #[test]
    fn test_normalize_path_keeps_trailing_slash() {
        assert_eq!(normalize_path("/a/b/").unwrap(), "/a/b/");
        assert_eq!(normalize_path("/a//b//").unwrap(), "/a/b/");
    }

    #[test]
    fn test_normalize_path_decoding() {
        assert_eq!(normalize_path("/%7Euser/%61bc").unwrap(), "/~user/abc");
        assert_eq!(normalize_path("/a%2Fb").unwrap(), "/a%2Fb");
        assert_eq!(normalize_path("/a%20b").unwrap(), "/a%20b");
        assert_eq!(normalize_path("/a/%2E%2E/b").unwrap(), "/b");
        assert_eq!(normalize_path("/100%25").unwrap(), "/100%25");
    }

    #[test]
    fn test_normalize_path_invalid_escape() {
        assert!(matches!(normalize_path("/a%zz"), Err(UrlError::Decode { .. })));
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("z=3&y=&x=1").unwrap(), "x=1&z=3");
        assert_eq!(normalize_query("b=2&a=1&a=0").unwrap(), "a=0&a=1&b=2");
        assert_eq!(normalize_query("flag&=v&k=v").unwrap(), "k=v");
        assert_eq!(normalize_query("a=b=c").unwrap(), "a=b=c");
    }

    #[test]
    fn test_normalize_query_too_short() {
        assert_eq!(normalize_query("").unwrap(), "");
        assert_eq!(normalize_query("a=").unwrap(), "");
        assert_eq!(normalize_query("ab").unwrap(), "");
    }

    #[test]
    fn test_normalize_query_keeps_delimiters_encoded() {
        assert_eq!(normalize_query("q=a%26b%3Dc&p=%41").unwrap(), "p=A&q=a%26b%3Dc");
        assert_eq!(normalize_query("q=a+b%2Bc").unwrap(), "q=a+b%2Bc");
    }

    #[test]
    fn test_normalize_fragment() {
        assert_eq!(normalize_fragment("").unwrap(), "");
        assert_eq!(normalize_fragment("sec%74ion%23x").unwrap(), "section%23x");
        assert_eq!(normalize_fragment("b=2&a=1").unwrap(), "b=2&a=1");
    }

    #[test]
    fn test_normalize_host() {
        assert_eq!(normalize_host("example.com").unwrap(), "example.com");
        assert_eq!(normalize_host("xn--caf-dma.com").unwrap(), "xn--caf-dma.com");
        assert_eq!(normalize_host("café.com").unwrap(), "café.com");
        assert_eq!(normalize_host("127.0.0.1").unwrap(), "127.0.0.1");
        assert_eq!(normalize_host("[::1]").unwrap(), "[::1]");
        assert_eq!(normalize_host("").unwrap(), "");
    }

    #[test]
    fn test_normalize_host_rejects_bad_label() {
        match normalize_host("XN--A-!.com") {
            Err(UrlError::HostDecode { label, .. }) => assert_eq!(label, "XN--A-!"),
            other => panic!("Expected HostDecode, got {other:?}"),
        }
    }

    #[test]
    fn test_normalize_host_rejects_mapped_delimiters() {
        for (host, label) in [
            ("a\u{FF0F}b.com", "a\u{FF0F}b"),
            ("a\u{FF1F}b.com", "a\u{FF1F}b"),
            ("a\u{FF03}b.com", "a\u{FF03}b"),
            ("a\u{FF20}b.com", "a\u{FF20}b"),
            ("www.ab\u{FF1A}x", "ab\u{FF1A}x"),
            ("a b.com", "a b"),
        ] {
            match normalize_host(host) {
                Err(UrlError::HostDecode { label: failed, .. }) => assert_eq!(failed, label),
                other => panic!("Expected HostDecode for {host}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_normalize_host_full_width_dot() {
        assert_eq!(normalize_host("a\u{FF0E}example.com").unwrap(), "a.example.com");
    }

    #[test]
    fn test_normalize_port() {
        assert_eq!(normalize_port("http", "80"), "");
        assert_eq!(normalize_port("http", "8080"), "8080");
        assert_eq!(normalize_port("https", "443"), "");
        assert_eq!(normalize_port("https", "80"), "80");
        assert_eq!(normalize_port("unknown", "80"), "80");
        assert_eq!(normalize_port("", "80"), "80");
    }

    #[test]
    fn test_normalize_full_url() {
        assert_eq!(normalize("hTtp://ExAMPLe.COM:80").unwrap(), "http://example.com/");
        assert_eq!(
            normalize("  https://User:PW@Example.com:8443//a/../b/?b=2&a=1#Top  ").unwrap(),
            "https://User:PW@example.com:8443/b/?a=1&b=2#Top"
        );
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize("").unwrap(), "");
        assert_eq!(normalize("   ").unwrap(), "");
    }

    #[test]
    fn test_normalize_relative() {
        assert_eq!(normalize("Example.com").unwrap(), "example.com");
        assert_eq!(normalize("Example.com/a/../b").unwrap(), "example.com/b");
        assert_eq!(normalize("/a//b?y=2&x=1").unwrap(), "/a/b?x=1&y=2");
    }

    #[test]
    fn test_normalize_unknown_scheme_keeps_path() {
        assert_eq!(normalize("custom://Host/a/../b").unwrap(), "custom://host/a/../b");
    }

    #[test]
    fn test_normalize_idempotent() {
        for url in [
            "HTTP://www.Example.com:80/a/./b/../c/?z=1&a=2#F%20g",
            "example.com/%7Efoo/%2e%2e/bar",
            "http://[::1]:8080/x?q=%25",
            "ftp://user@files.example.com:21/pub/",
            "mailto:Someone@Example.com",
        ] {
            let once = normalize(url).unwrap();
            assert_eq!(normalize(&once).unwrap(), once, "not idempotent for {url}");
        }
    }
}
