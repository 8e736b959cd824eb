//! Feed page cache
//!
//! Explicit, injected replacement for an ambient query cache: pagers receive
//! an `Arc<PageCache>` and consult it before the network. A key is the feed's
//! identity (tab + filters); entries under one key never affect another.
//! Invalidation drops a whole key, matching the "refetch from page 0 on
//! manual refresh" policy - individual pages are never refetched.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::entities::{FeedKey, FeedPage};

#[derive(Default)]
pub struct PageCache {
    inner: RwLock<HashMap<FeedKey, HashMap<u32, FeedPage>>>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cached page, if present
    pub fn get(&self, key: &FeedKey, page: u32) -> Option<FeedPage> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.get(key).and_then(|pages| pages.get(&page)).cloned()
    }

    /// Store a fetched page
    pub fn set(&self, key: &FeedKey, page: u32, data: FeedPage) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        inner.entry(key.clone()).or_default().insert(page, data);
    }

    /// Drop every page cached under a key
    pub fn invalidate(&self, key: &FeedKey) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        inner.remove(key);
    }

    /// Drop everything
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        inner.clear();
    }

    /// Number of pages cached under a key
    pub fn page_count(&self, key: &FeedKey) -> usize {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.get(key).map(|pages| pages.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{FeedKind, FeedQuery, FeedTab};
    use crate::test_utils::test_page;

    fn explore_key() -> FeedKey {
        FeedQuery::new(FeedTab::Explore).key()
    }

    #[test]
    fn get_returns_none_when_empty() {
        let cache = PageCache::new();
        assert!(cache.get(&explore_key(), 0).is_none());
    }

    #[test]
    fn set_then_get() {
        let cache = PageCache::new();
        let key = explore_key();
        cache.set(&key, 0, test_page(&[1, 2, 3], true));

        let page = cache.get(&key, 0).unwrap();
        assert_eq!(page.items.len(), 3);
        assert!(page.has_more);
        assert!(cache.get(&key, 1).is_none());
    }

    #[test]
    fn keys_are_isolated() {
        let cache = PageCache::new();
        let explore = explore_key();
        let filtered = FeedQuery::new(FeedTab::Explore)
            .with_kind(FeedKind::CarAdded)
            .key();

        cache.set(&explore, 0, test_page(&[1], false));
        assert!(cache.get(&filtered, 0).is_none());
    }

    #[test]
    fn invalidate_drops_whole_key() {
        let cache = PageCache::new();
        let key = explore_key();
        let other = FeedQuery::new(FeedTab::Following).key();

        cache.set(&key, 0, test_page(&[1], true));
        cache.set(&key, 1, test_page(&[2], false));
        cache.set(&other, 0, test_page(&[9], false));

        cache.invalidate(&key);

        assert_eq!(cache.page_count(&key), 0);
        assert_eq!(cache.page_count(&other), 1);
    }

    #[test]
    fn clear_drops_everything() {
        let cache = PageCache::new();
        cache.set(&explore_key(), 0, test_page(&[1], false));
        cache.clear();
        assert_eq!(cache.page_count(&explore_key()), 0);
    }
}
