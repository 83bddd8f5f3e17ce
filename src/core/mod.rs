//! Canonicalization of URL components.
//!
//! This module contains the value-level operations:
//! - Selective percent-decoding
//! - Per-component normalizers and the full `normalize` pipeline
//! - Reassembly of components, comparison and fingerprints
//! - Encoding back to an ASCII transport form

pub mod composer;
pub mod decoder;
pub mod encoder;
pub mod hasher;
pub mod matcher;
pub mod normalizer;

// Re-export main functionality
pub use composer::construct;
pub use decoder::unquote;
pub use encoder::encode;
pub use hasher::{fingerprint, fingerprint_bytes};
pub use matcher::compare;
pub use normalizer::{
    normalize, normalize_fragment, normalize_host, normalize_path, normalize_port, normalize_query,
};
