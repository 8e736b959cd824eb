//! Domain ports (traits)
//!
//! Port traits define the interfaces the application layer requires.
//! The HTTP adapter provides the production implementation; tests use the
//! in-memory mocks in `test_utils`.

use async_trait::async_trait;

use crate::domain::entities::{FeedPage, FeedQuery};
use crate::error::ApiError;

/// Port for reading the social activity feed
///
/// `fetch_page` is a plain GET: not idempotent-sensitive, safe to repeat with
/// identical parameters. No retry policy lives at this level.
#[async_trait]
pub trait FeedApi: Send + Sync {
    /// Fetch one page of the feed
    async fn fetch_page(&self, query: &FeedQuery) -> Result<FeedPage, ApiError>;
}
