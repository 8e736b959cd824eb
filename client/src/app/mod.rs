//! Application layer
//!
//! Client-side orchestration of the feed: pagination state, the page cache,
//! and the unread-activity watcher.

pub mod cache;
pub mod pager;
pub mod watcher;

pub use cache::PageCache;
pub use pager::{FeedPager, LoadOutcome};
pub use watcher::{ActivityWatcher, NewActivityDetector, NewActivityIndicator};
