//! Browser-side persistence and notices.

use prime::cache::parse_cached_count;
use prime::{CacheError, CountCache, Notifier, COUNT_CACHE_KEY};

/// Transfer count kept in `window.localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageCache;

impl LocalStorageCache {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl CountCache for LocalStorageCache {
    fn load(&self) -> Option<u64> {
        let raw = Self::storage()?.get_item(COUNT_CACHE_KEY).ok().flatten()?;
        parse_cached_count(&raw)
    }

    fn store(&self, count: u64) -> Result<(), CacheError> {
        let storage = Self::storage()
            .ok_or_else(|| CacheError::Unavailable("localStorage is not available".into()))?;
        storage
            .set_item(COUNT_CACHE_KEY, &count.to_string())
            .map_err(|e| CacheError::Unavailable(format!("{:?}", e)))
    }
}

/// Blocking `window.alert`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn blocking_notice(&self, message: &str) {
        if let Err(e) = gloo_utils::window().alert_with_message(message) {
            log::error!("Failed to show alert: {:?}", e);
        }
    }
}
