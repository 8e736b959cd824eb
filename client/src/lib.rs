//! Cochera client library
//!
//! Client-side core for the Cochera die-cast collection platform: typed
//! wrappers over the REST backend plus the feed synchronization flow
//! (pagination, page cache, unread-activity watching, presentation).
//!
//! The backend itself, authentication and image hosting are external
//! collaborators; this crate only consumes their contracts.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;

#[cfg(test)]
pub mod test_utils;


pub use adapters::ApiClient;
pub use app::{ActivityWatcher, FeedPager, LoadOutcome, NewActivityIndicator, PageCache};
pub use config::Config;
pub use domain::entities::{
    Car, CollectionGroup, FeedItem, FeedKey, FeedKind, FeedMetadata, FeedPage, FeedQuery, FeedTab,
    NewCar, NewGroup, NewWishlistItem, WishPriority, WishlistItem,
};
pub use domain::ports::FeedApi;
pub use error::ApiError;
