//! Process-wide Public Suffix List snapshot.
//!
//! The list is immutable once built. Installing or refreshing replaces the
//! whole `Arc` under a short write lock, so a reader always holds either the
//! previous or the complete new snapshot.

use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::{Lazy, OnceCell};
use tracing::{info, warn};

use crate::error::UrlError;
use crate::url::psl::PublicSuffixList;
use crate::url::source::SuffixListSource;

static SNAPSHOT: Lazy<RwLock<Option<Arc<PublicSuffixList>>>> = Lazy::new(|| RwLock::new(None));

/// Set once the lazy load has been tried; it is never retried.
static LAZY_LOAD: OnceCell<()> = OnceCell::new();

fn snapshot() -> Option<Arc<PublicSuffixList>> {
    SNAPSHOT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Publish `list` as the process-wide snapshot, replacing any previous one.
pub fn install(list: PublicSuffixList) -> Arc<PublicSuffixList> {
    let list = Arc::new(list);
    *SNAPSHOT.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&list));
    info!(rules = list.len(), "installed public suffix list");
    list
}

/// Load from `source` and install the result.
pub fn load_from(source: &SuffixListSource) -> Result<Arc<PublicSuffixList>, UrlError> {
    let list = source.load()?;
    info!(%source, "loaded public suffix list");
    Ok(install(list))
}

/// Load from the source configured in the environment and install it.
pub fn load_default() -> Result<Arc<PublicSuffixList>, UrlError> {
    load_from(&SuffixListSource::from_env()?)
}

/// Rebuild the list from its configured source and swap it in.
///
/// On failure the current snapshot stays in place.
pub fn refresh() -> Result<Arc<PublicSuffixList>, UrlError> {
    load_default().inspect_err(|err| warn!(error = %err, "public suffix list refresh failed"))
}

/// Current snapshot, loading it on first use if nothing was installed.
pub fn current() -> Result<Arc<PublicSuffixList>, UrlError> {
    if let Some(list) = snapshot() {
        return Ok(list);
    }

    LAZY_LOAD.get_or_init(|| {
        if let Err(err) = load_default() {
            warn!(error = %err, "no public suffix list, hosts will not be split");
        }
    });

    snapshot().ok_or_else(|| {
        UrlError::SuffixListUnavailable("no list installed and none could be loaded".to_string())
    })
}

/// True once a snapshot has been installed.
pub fn is_loaded() -> bool {
    snapshot().is_some()
}
