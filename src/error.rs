//! Error types for URL decoding, host normalization and suffix list loading.

use thiserror::Error;

/// Errors that can occur while canonicalizing or decomposing a URL.
///
/// Splitting and authority parsing never fail; only decoding, IDNA conversion
/// and suffix list loading produce errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UrlError {
    /// A `%` was not followed by two hexadecimal digits.
    #[error("Invalid percent-escape in chunk '%{chunk}'")]
    Decode {
        /// Text following the offending `%`, up to the next `%`.
        chunk: String,
    },

    /// The IDNA codec rejected a host label.
    #[error("Cannot decode host label '{label}': {reason}")]
    HostDecode {
        /// The label that failed to convert.
        label: String,
        /// Codec error description.
        reason: String,
    },

    /// No Public Suffix List is installed and none could be loaded.
    #[error("Public Suffix List unavailable: {0}")]
    SuffixListUnavailable(String),

    /// Handing a canonical URL to the `url` crate failed.
    #[error("URL parsing error: {0}")]
    UrlParseError(String),
}

impl From<::url::ParseError> for UrlError {
    fn from(err: ::url::ParseError) -> Self {
        UrlError::UrlParseError(err.to_string())
    }
}
