//! Feed pager
//!
//! Client-side state for one feed instance: the append-only item sequence,
//! the "is a fetch already in flight" guard, and the error flag the UI shows
//! a retry affordance for.
//!
//! The pager has exactly two states, idle and fetching-next. `load_next`
//! enters fetching-next only when no fetch is in flight and the last page
//! said more pages exist; it returns to idle on completion, success or not.
//! A failed fetch does not advance the page counter, so retrying re-issues
//! the identical request.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::app::cache::PageCache;
use crate::domain::entities::{FeedItem, FeedKey, FeedQuery};
use crate::domain::ports::FeedApi;

/// Result of a `load_next` call
///
/// Fetch failures are absorbed here - recorded on the pager, not returned as
/// an error - because every failure in this flow is recoverable by a
/// user-initiated retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was appended (possibly empty)
    Loaded { added: usize },
    /// Another fetch is in flight; nothing was done
    AlreadyFetching,
    /// The last page reported `has_more: false`; nothing was done
    Exhausted,
    /// The fetch failed; the error flag is set and the page counter unchanged
    Failed,
}

struct PagerState {
    items: Vec<FeedItem>,
    pages_loaded: u32,
    has_more: bool,
    last_error: Option<String>,
}

/// Pagination controller for one feed instance
pub struct FeedPager<F: FeedApi> {
    api: Arc<F>,
    cache: Arc<PageCache>,
    query: FeedQuery,
    key: FeedKey,
    in_flight: AtomicBool,
    state: Mutex<PagerState>,
}

impl<F: FeedApi> FeedPager<F> {
    /// Create a pager for the feed identified by `query`'s tab and filters.
    /// `query.page` is ignored; the pager supplies the page index itself.
    pub fn new(api: Arc<F>, cache: Arc<PageCache>, query: FeedQuery) -> Self {
        let key = query.key();
        Self {
            api,
            cache,
            query,
            key,
            in_flight: AtomicBool::new(false),
            state: Mutex::new(PagerState {
                items: Vec::new(),
                pages_loaded: 0,
                has_more: true,
                last_error: None,
            }),
        }
    }

    /// Fetch the next page and append it to the sequence
    pub async fn load_next(&self) -> LoadOutcome {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return LoadOutcome::AlreadyFetching;
        }

        let outcome = self.fetch_and_append().await;
        self.in_flight.store(false, Ordering::Release);
        outcome
    }

    async fn fetch_and_append(&self) -> LoadOutcome {
        let next_page = {
            let state = self.lock_state();
            if !state.has_more {
                return LoadOutcome::Exhausted;
            }
            state.pages_loaded
        };

        if let Some(page) = self.cache.get(&self.key, next_page) {
            let added = page.items.len();
            let mut state = self.lock_state();
            state.items.extend(page.items);
            state.has_more = page.has_more;
            state.pages_loaded += 1;
            state.last_error = None;
            return LoadOutcome::Loaded { added };
        }

        let query = self.query.clone().at_page(next_page);
        match self.api.fetch_page(&query).await {
            Ok(page) => {
                self.cache.set(&self.key, next_page, page.clone());
                let added = page.items.len();
                let mut state = self.lock_state();
                state.items.extend(page.items);
                state.has_more = page.has_more;
                state.pages_loaded += 1;
                state.last_error = None;
                LoadOutcome::Loaded { added }
            }
            Err(e) => {
                tracing::warn!(page = next_page, "feed page fetch failed: {}", e);
                let mut state = self.lock_state();
                state.last_error = Some(e.to_string());
                LoadOutcome::Failed
            }
        }
    }

    /// Invalidate the whole sequence: clear items, reset paging, drop the
    /// cached pages for this feed. Returns false if a fetch is in flight.
    pub fn refresh(&self) -> bool {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }

        {
            let mut state = self.lock_state();
            state.items.clear();
            state.pages_loaded = 0;
            state.has_more = true;
            state.last_error = None;
        }
        self.cache.invalidate(&self.key);

        self.in_flight.store(false, Ordering::Release);
        true
    }

    /// Snapshot of the loaded items, in fetch order
    pub fn items(&self) -> Vec<FeedItem> {
        self.lock_state().items.clone()
    }

    /// Id of the first (newest) loaded item
    pub fn top_item_id(&self) -> Option<i64> {
        self.lock_state().items.first().map(|item| item.id)
    }

    pub fn len(&self) -> usize {
        self.lock_state().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_state().items.is_empty()
    }

    pub fn pages_loaded(&self) -> u32 {
        self.lock_state().pages_loaded
    }

    pub fn has_more(&self) -> bool {
        self.lock_state().has_more
    }

    /// Whether the last fetch failed
    pub fn is_error(&self) -> bool {
        self.lock_state().last_error.is_some()
    }

    pub fn last_error(&self) -> Option<String> {
        self.lock_state().last_error.clone()
    }

    /// The feed identity this pager serves
    pub fn key(&self) -> &FeedKey {
        &self.key
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, PagerState> {
        // State is only held for short synchronous sections, never across an
        // await, so poisoning can only come from a panicking accessor.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
