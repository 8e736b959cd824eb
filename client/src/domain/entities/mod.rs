//! Domain entities
//!
//! Typed mirrors of the backend's JSON. The feed types carry the core
//! semantics; the catalog types exist for the thin REST wrappers.

pub mod car;
pub mod feed;
pub mod group;
pub mod wishlist;

pub use car::{Car, NewCar};
pub use feed::{FeedItem, FeedKey, FeedKind, FeedMetadata, FeedPage, FeedQuery, FeedTab};
pub use group::{CollectionGroup, NewGroup};
pub use wishlist::{NewWishlistItem, WishPriority, WishlistItem};
