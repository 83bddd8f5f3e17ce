//! Delimiter-scanning URL splitter and authority parser.
//!
//! Neither function can fail: malformed input degrades to a best-effort
//! decomposition, usually with everything in `path`.

use tracing::trace;

use crate::types::{is_scheme_char, SplitResult};

/// Split a URL into scheme, authority, path, query and fragment.
///
/// The input is expected to be trimmed already. Without a recognizable scheme
/// the input is a relative reference and whatever precedes the path is folded
/// back into `path`.
///
/// # Examples
///
/// ```
/// use canonurl::split;
///
/// let parts = split("http://www.example.com/abc?x=1&y=2#foo");
/// assert_eq!(parts.scheme, "http");
/// assert_eq!(parts.authority, "www.example.com");
/// assert_eq!(parts.path, "/abc");
/// assert_eq!(parts.query, "x=1&y=2");
/// assert_eq!(parts.fragment, "foo");
/// ```
pub fn split(url: &str) -> SplitResult {
    let (scheme, rest) = split_scheme(url);

    let i_path = rest.find('/');
    let i_query = rest.find('?');
    let i_frag = rest.find('#');

    // Path, if any, ends at whichever of '?' and '#' comes first.
    let path_end = match (i_query, i_frag) {
        (Some(q), Some(f)) => q.min(f),
        (Some(q), None) => q,
        (None, Some(f)) => f,
        (None, None) => rest.len(),
    };

    let (authority, path) = match i_path {
        Some(p) if p < path_end => (&rest[..p], &rest[p..path_end]),
        _ => (&rest[..path_end], ""),
    };

    let query = match (i_query, i_frag) {
        (Some(q), Some(f)) if q < f => &rest[q + 1..f],
        (Some(_), Some(_)) => "",
        (Some(q), None) => &rest[q + 1..],
        (None, _) => "",
    };

    let fragment = i_frag.map(|f| &rest[f + 1..]).unwrap_or("");

    trace!(%scheme, authority, path, query, fragment, "split url");

    if scheme.is_empty() {
        return SplitResult {
            scheme,
            authority: String::new(),
            path: format!("{authority}{path}"),
            query: query.to_string(),
            fragment: fragment.to_string(),
        };
    }

    SplitResult {
        scheme,
        authority: authority.to_string(),
        path: path.to_string(),
        query: query.to_string(),
        fragment: fragment.to_string(),
    }
}

/// Separate the scheme from the rest of the URL.
///
/// A `[` before the first `:` means the colon belongs to an IPv6 literal.
fn split_scheme(url: &str) -> (String, &str) {
    let Some(colon) = url.find(':') else {
        return (String::new(), url);
    };

    if url.find('[').is_some_and(|bracket| bracket < colon) {
        return (String::new(), url);
    }

    let candidate = &url[..colon];
    if candidate.is_empty() || !candidate.chars().all(is_scheme_char) {
        return (String::new(), url);
    }

    let rest = url[colon..].trim_start_matches([':', '/']);
    (candidate.to_ascii_lowercase(), rest)
}

/// Separate an authority-looking prefix from a schemeless path.
///
/// Everything before the first `/` is the authority; the rest, if any, keeps
/// its leading slash.
pub(crate) fn split_leading_authority(path: &str) -> (String, String) {
    match path.split_once('/') {
        Some((authority, rest)) => (authority.to_string(), format!("/{rest}")),
        None => (path.to_string(), String::new()),
    }
}

/// Split an authority into `(username, password, host, port)`.
///
/// User-info is split off at the last `@` and keeps its case; the host and
/// port are lowercased with trailing dots and colons removed. The port is not
/// validated.
///
/// # Examples
///
/// ```
/// use canonurl::split_netloc;
///
/// let (user, pw, host, port) = split_netloc("admin:s3cret@Example.COM:8080");
/// assert_eq!((user.as_str(), pw.as_str()), ("admin", "s3cret"));
/// assert_eq!((host.as_str(), port.as_str()), ("example.com", "8080"));
/// ```
pub fn split_netloc(authority: &str) -> (String, String, String, String) {
    let (user_info, host_port) = match authority.rsplit_once('@') {
        Some((user_info, host_port)) => (user_info, host_port),
        None => ("", authority),
    };

    let (username, password) = user_info.split_once(':').unwrap_or((user_info, ""));

    let host_port = host_port.trim_end_matches(['.', ':']).to_lowercase();

    // A trailing ']' means the last colon sits inside an IPv6 literal.
    let (host, port) = match host_port.rsplit_once(':') {
        Some((host, port)) if !host_port.ends_with(']') => (host.to_string(), port.to_string()),
        _ => (host_port.clone(), String::new()),
    };

    (username.to_string(), password.to_string(), host, port)
}
