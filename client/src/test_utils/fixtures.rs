//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;

use crate::domain::entities::{FeedItem, FeedKind, FeedMetadata, FeedPage};

/// Create a feed item with default actor identity and empty metadata
pub fn test_feed_item(id: i64, kind: FeedKind) -> FeedItem {
    FeedItem {
        id,
        kind,
        user_id: 7,
        username: "coleccionista".to_string(),
        user_first_name: Some("Ana".to_string()),
        user_last_name: Some("Reyes".to_string()),
        user_picture: None,
        car_id: None,
        group_id: None,
        metadata: FeedMetadata::default(),
        created_at: Utc::now(),
    }
}

/// Create a feed item with specific metadata
pub fn test_feed_item_with_metadata(id: i64, kind: FeedKind, metadata: FeedMetadata) -> FeedItem {
    FeedItem {
        metadata,
        ..test_feed_item(id, kind)
    }
}

/// Create a feed page of `car_added` items with the given ids
pub fn test_page(ids: &[i64], has_more: bool) -> FeedPage {
    FeedPage {
        items: ids
            .iter()
            .map(|&id| test_feed_item(id, FeedKind::CarAdded))
            .collect(),
        has_more,
    }
}
