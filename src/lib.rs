//! canonurl - URL decomposition and canonicalization
//!
//! This crate splits URL strings into their parts with a lightweight
//! delimiter scanner, classifies hosts into subdomain, domain and public
//! suffix using the Public Suffix List, and produces a canonical form for
//! equality checks such as deduplication or crawl-frontier keys.
//!
//! # Features
//!
//! - **Forgiving**: splitting never fails; malformed input degrades to a best-effort decomposition
//! - **Selective decoding**: percent-escapes are decoded except for each component's delimiters
//! - **Canonical**: dot segments collapsed, query pairs sorted, default ports dropped, IDNA hosts decoded
//! - **Suffix-aware**: exact, wildcard and exception rules of the Public Suffix List
//! - **Thread-safe**: all operations are pure; the suffix list is an immutable, swappable snapshot
//!
//! # Quick Start
//!
//! ```
//! use canonurl::{compare, normalize, parse_with, split, PublicSuffixList};
//!
//! // Canonical form
//! assert_eq!(normalize("hTtp://ExAMPLe.COM:80/a/./b?z=1&a=2")?, "http://example.com/a/b?a=2&z=1");
//!
//! // Equality by canonical form
//! assert!(compare("http://examPLe.com:80/abc?x=&b=1", "http://eXAmple.com/abc?b=1")?);
//!
//! // Raw split
//! let parts = split("https://api.github.com/repos?page=1#readme");
//! assert_eq!(parts.authority, "api.github.com");
//!
//! // Host classification against a suffix list
//! let psl = PublicSuffixList::parse("com\nuk\nco.uk\n");
//! let url = parse_with("https://www.example.co.uk/", &psl)?;
//! assert_eq!((url.subdomain.as_str(), url.domain.as_str(), url.tld.as_str()), ("www", "example", "co.uk"));
//! # Ok::<(), canonurl::UrlError>(())
//! ```
//!
//! # Public Suffix List
//!
//! [`split_host`], [`parse`] and [`extract`] use a process-wide list. It is
//! loaded on first use from the file named by `PUBLIC_SUFFIX_LIST` (or, with
//! the `fetch` feature, downloaded from publicsuffix.org), or installed
//! explicitly through [`registry::install`]. Without a list, hosts are not
//! split: the whole host becomes `domain`.
//!
//! # Error Handling
//!
//! Fallible functions return `Result<T, UrlError>`. Common error cases:
//!
//! - Invalid percent-escapes (`%` not followed by two hex digits)
//! - Host labels rejected by the IDNA codec
//! - No Public Suffix List available (only from the loading functions)

// Re-export splitting and classification
pub use crate::url::{
    extract, extract_with, parse, parse_with, split, split_host, split_netloc, PublicSuffixList,
    SuffixListSource,
};

// Re-export canonicalization
pub use crate::core::{
    compare, construct, encode, fingerprint, fingerprint_bytes, normalize, normalize_fragment,
    normalize_host, normalize_path, normalize_port, normalize_query, unquote,
};

// Re-export public types
pub use error::UrlError;
pub use types::{default_port, is_known_scheme, Component, SplitResult, UrlParts, SCHEMES};
pub use crate::url::registry;

// Module declarations
pub mod core;
pub mod error;
pub mod types;
pub mod url;
