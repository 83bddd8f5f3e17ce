//! URL decomposition and host classification.
//!
//! This module contains the structural side of URL handling:
//! - Delimiter-based splitting of URLs and authorities
//! - Public Suffix List rules and host classification
//! - The process-wide suffix list snapshot and where it is loaded from
//! - `parse` / `extract` into [`UrlParts`](crate::types::UrlParts)

pub mod extract;
pub mod psl;
pub mod registry;
pub mod source;
pub mod splitter;

// Re-export main functionality
pub use extract::{extract, extract_with, parse, parse_with};
pub use psl::{split_host, PublicSuffixList};
pub use source::{SuffixListSource, PSL_ENV_VAR, PSL_URL};
pub use splitter::{split, split_netloc};
