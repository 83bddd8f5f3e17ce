//! Decomposition of URLs into [`UrlParts`].

use crate::core::normalizer::{normalize_host, normalize_port};
use crate::error::UrlError;
use crate::types::UrlParts;
use crate::url::psl::{split_host, PublicSuffixList};
use crate::url::splitter::{split, split_leading_authority, split_netloc};

/// Parse a URL that carries an explicit scheme.
///
/// The host is IDNA-decoded and split along the process-wide Public Suffix
/// List, and a default port is dropped. Path, query and fragment are kept
/// as they appear in the input. Without a scheme there is no authority, so
/// only `path`, `query` and `fragment` are filled in.
///
/// # Examples
///
/// ```
/// use canonurl::{parse_with, PublicSuffixList};
///
/// let psl = PublicSuffixList::from_rules(["uk", "co.uk"]);
/// let url = parse_with("http://www.example.co.uk:80/a?b=1#c", &psl).unwrap();
/// assert_eq!(url.subdomain, "www");
/// assert_eq!(url.domain, "example");
/// assert_eq!(url.tld, "co.uk");
/// assert_eq!(url.port, "");
/// assert_eq!(url.path, "/a");
/// ```
pub fn parse(url: &str) -> Result<UrlParts, UrlError> {
    parse_using(url, split_host)
}

/// [`parse`] against an explicit suffix list instead of the process-wide one.
pub fn parse_with(url: &str, list: &PublicSuffixList) -> Result<UrlParts, UrlError> {
    parse_using(url, |host| list.split_host(host))
}

/// Best-effort decomposition of a possibly relative URL.
///
/// Unlike [`parse`], a schemeless input such as `example.com/a` is read as
/// authority followed by path.
pub fn extract(url: &str) -> Result<UrlParts, UrlError> {
    extract_using(url, split_host)
}

/// [`extract`] against an explicit suffix list instead of the process-wide one.
pub fn extract_with(url: &str, list: &PublicSuffixList) -> Result<UrlParts, UrlError> {
    extract_using(url, |host| list.split_host(host))
}

fn parse_using<F>(url: &str, classify: F) -> Result<UrlParts, UrlError>
where
    F: Fn(&str) -> (String, String, String),
{
    let url = url.trim();
    let parts = split(url);

    if parts.scheme.is_empty() {
        return Ok(UrlParts {
            path: parts.path,
            query: parts.query,
            fragment: parts.fragment,
            original: url.to_string(),
            ..Default::default()
        });
    }

    let mut result = decompose(&parts.scheme, &parts.authority, &classify)?;
    result.path = parts.path;
    result.query = parts.query;
    result.fragment = parts.fragment;
    result.original = url.to_string();
    Ok(result)
}

fn extract_using<F>(url: &str, classify: F) -> Result<UrlParts, UrlError>
where
    F: Fn(&str) -> (String, String, String),
{
    let url = url.trim();
    let parts = split(url);

    let (authority, path) = if parts.scheme.is_empty() {
        split_leading_authority(&parts.path)
    } else {
        (parts.authority, parts.path)
    };

    let mut result = decompose(&parts.scheme, &authority, &classify)?;
    result.path = path;
    result.query = parts.query;
    result.fragment = parts.fragment;
    result.original = url.to_string();
    Ok(result)
}

/// Scheme, user-info, classified host and port of an authority.
fn decompose<F>(scheme: &str, authority: &str, classify: &F) -> Result<UrlParts, UrlError>
where
    F: Fn(&str) -> (String, String, String),
{
    let (username, password, host, port) = split_netloc(authority);
    let host = normalize_host(&host)?;
    let (subdomain, domain, tld) = classify(&host);

    Ok(UrlParts {
        scheme: scheme.to_string(),
        username,
        password,
        subdomain,
        domain,
        tld,
        port: normalize_port(scheme, &port),
        ..Default::default()
    })
}
