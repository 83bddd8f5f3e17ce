//! Core data structures produced by splitting and parsing.

use crate::error::UrlError;

/// Schemes whose paths are hierarchical and get dot-segment normalization.
pub const SCHEMES: &[&str] = &[
    "http", "https", "ftp", "sftp", "file", "gopher", "imap", "mms", "news", "nntp", "telnet",
    "prospero", "rsync", "rtsp", "rtspu", "svn", "git", "ws", "wss",
];

/// Characters accepted in a scheme name.
pub(crate) fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Characters that make up an IPv4 or bare IPv6 host.
pub(crate) fn is_ip_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == ':'
}

/// Check whether `scheme` is one of the registered [`SCHEMES`].
pub fn is_known_scheme(scheme: &str) -> bool {
    SCHEMES.contains(&scheme)
}

/// Registered default port for a scheme, if any.
pub fn default_port(scheme: &str) -> Option<&'static str> {
    match scheme {
        "http" | "ws" => Some("80"),
        "https" | "wss" => Some("443"),
        "ftp" => Some("21"),
        "sftp" => Some("22"),
        "ldap" => Some("389"),
        _ => None,
    }
}

/// URL component with its own set of delimiters that must stay percent-encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// Path (`/a/b`)
    Path,
    /// Query string without the `?`
    Query,
    /// Fragment without the `#`
    Fragment,
}

impl Component {
    /// Characters that must not be decoded in this component.
    ///
    /// `%` is always included so that a decoded `%25` is never re-read as an escape.
    pub fn exceptions(self) -> &'static [char] {
        match self {
            Component::Path => &[' ', '/', '?', '+', '#', '%'],
            Component::Query => &[' ', '&', '=', '+', '#', '%'],
            Component::Fragment => &[' ', '+', '#', '%'],
        }
    }
}

/// Raw decomposition of a URL string. Absent parts are empty strings.
///
/// When `scheme` is empty, `authority` is empty too and anything that looked
/// like an authority is part of `path`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitResult {
    /// Lowercased scheme (http, https, ...)
    pub scheme: String,
    /// User-info, host and port (user:pw@example.com:8080)
    pub authority: String,
    /// Path including leading slash (/a/b)
    pub path: String,
    /// Query string without the '?'
    pub query: String,
    /// Fragment without the '#'
    pub fragment: String,
}

/// Fully decomposed URL with the host split along the Public Suffix List.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts {
    /// URL scheme (http, https, ftp)
    pub scheme: String,
    /// User name from the user-info part
    pub username: String,
    /// Password from the user-info part
    pub password: String,
    /// Subdomain (www, api.v2)
    pub subdomain: String,
    /// Registrable label left of the public suffix (example)
    pub domain: String,
    /// Public suffix (com, co.uk)
    pub tld: String,
    /// Port, empty when absent or equal to the scheme default
    pub port: String,
    /// Path component (/api/v1/users)
    pub path: String,
    /// Query string without the '?'
    pub query: String,
    /// Fragment without the '#'
    pub fragment: String,
    /// The input this value was built from
    pub original: String,
}

impl UrlParts {
    /// Full host: subdomain, domain and tld joined by dots, empty parts skipped.
    pub fn host(&self) -> String {
        [&self.subdomain, &self.domain, &self.tld]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Check if a subdomain is present.
    pub fn has_subdomain(&self) -> bool {
        !self.subdomain.is_empty()
    }

    /// Check if the port is explicitly specified (and not the default).
    pub fn has_port(&self) -> bool {
        !self.port.is_empty()
    }

    /// Hand the composed URL to the `url` crate.
    pub fn to_url(&self) -> Result<::url::Url, UrlError> {
        Ok(::url::Url::parse(&self.to_string())?)
    }
}
