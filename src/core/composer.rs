//! Reassembly of URL components into a string.

use std::fmt;

use crate::types::{SplitResult, UrlParts};

/// Build a URL string from its parts, leaving out absent parts and their separators.
///
/// # Examples
///
/// ```
/// use canonurl::{construct, UrlParts};
///
/// let parts = UrlParts {
///     scheme: "https".to_string(),
///     username: "bob".to_string(),
///     subdomain: "www".to_string(),
///     domain: "example".to_string(),
///     tld: "com".to_string(),
///     port: "8443".to_string(),
///     path: "/docs".to_string(),
///     query: "page=2".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(construct(&parts), "https://bob@www.example.com:8443/docs?page=2");
/// ```
pub fn construct(parts: &UrlParts) -> String {
    let mut url = String::new();

    if !parts.scheme.is_empty() {
        url.push_str(&parts.scheme);
        url.push_str("://");
    }

    if !parts.username.is_empty() {
        url.push_str(&parts.username);
        if !parts.password.is_empty() {
            url.push(':');
            url.push_str(&parts.password);
        }
        url.push('@');
    }

    url.push_str(&parts.host());

    if !parts.port.is_empty() {
        url.push(':');
        url.push_str(&parts.port);
    }

    url.push_str(&parts.path);

    if !parts.query.is_empty() {
        url.push('?');
        url.push_str(&parts.query);
    }

    if !parts.fragment.is_empty() {
        url.push('#');
        url.push_str(&parts.fragment);
    }

    url
}

impl fmt::Display for UrlParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&construct(self))
    }
}

impl fmt::Display for SplitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}://{}", self.scheme, self.authority)?;
        }
        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment)?;
        }
        Ok(())
    }
}
