//! Where the Public Suffix List comes from.
//!
//! `PUBLIC_SUFFIX_LIST` points at a local copy. Without it the list is
//! downloaded, provided the crate is built with the `fetch` feature.

use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::UrlError;
use crate::url::psl::PublicSuffixList;

/// Environment variable naming a local copy of the list.
pub const PSL_ENV_VAR: &str = "PUBLIC_SUFFIX_LIST";

/// Well-known location of the published list.
pub const PSL_URL: &str = "https://publicsuffix.org/list/effective_tld_names.dat";

/// A resolved place to read the Public Suffix List from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuffixListSource {
    /// Local file in the published list format
    File(PathBuf),
    /// Remote URL serving the published list format
    Remote(String),
}

impl SuffixListSource {
    /// Resolve the source from the environment.
    pub fn from_env() -> Result<Self, UrlError> {
        Self::resolve(std::env::var_os(PSL_ENV_VAR))
    }

    fn resolve(local: Option<OsString>) -> Result<Self, UrlError> {
        match local {
            Some(path) if !path.is_empty() => {
                debug!(path = ?path, "using local public suffix list");
                Ok(SuffixListSource::File(PathBuf::from(path)))
            }
            _ if cfg!(feature = "fetch") => {
                debug!(url = PSL_URL, "using remote public suffix list");
                Ok(SuffixListSource::Remote(PSL_URL.to_string()))
            }
            _ => Err(UrlError::SuffixListUnavailable(format!(
                "{PSL_ENV_VAR} is not set and remote fetching is disabled"
            ))),
        }
    }

    /// Read and parse the list. An empty rule set counts as a failure.
    pub fn load(&self) -> Result<PublicSuffixList, UrlError> {
        let text = match self {
            SuffixListSource::File(path) => fs::read_to_string(path).map_err(|err| {
                UrlError::SuffixListUnavailable(format!("cannot read {}: {err}", path.display()))
            })?,
            SuffixListSource::Remote(url) => fetch(url)?,
        };

        let list = PublicSuffixList::parse(&text);
        if list.is_empty() {
            return Err(UrlError::SuffixListUnavailable(format!("{self} contains no rules")));
        }
        Ok(list)
    }
}

impl fmt::Display for SuffixListSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuffixListSource::File(path) => write!(f, "{}", path.display()),
            SuffixListSource::Remote(url) => f.write_str(url),
        }
    }
}

#[cfg(feature = "fetch")]
fn fetch(url: &str) -> Result<String, UrlError> {
    reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(|err| UrlError::SuffixListUnavailable(format!("cannot fetch {url}: {err}")))
}

#[cfg(not(feature = "fetch"))]
fn fetch(url: &str) -> Result<String, UrlError> {
    Err(UrlError::SuffixListUnavailable(format!(
        "cannot fetch {url}: built without the `fetch` feature"
    )))
}
