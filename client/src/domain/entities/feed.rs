//! Feed domain entities
//!
//! A `FeedItem` is one social-activity event produced by the backend when a
//! collector does something trackable. Items are immutable on the client; the
//! feed is an append-only log for the duration of a session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Event kind of a feed item
///
/// The backend sends a string discriminator. Kinds the client does not know
/// about yet are preserved verbatim in `Unknown` so a backend deploy cannot
/// break rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeedKind {
    CarAdded,
    GroupCreated,
    MilestoneReached,
    WishlistAchieved,
    Unknown(String),
}

impl FeedKind {
    /// Wire name of the kind
    pub fn as_str(&self) -> &str {
        match self {
            FeedKind::CarAdded => "car_added",
            FeedKind::GroupCreated => "group_created",
            FeedKind::MilestoneReached => "milestone_reached",
            FeedKind::WishlistAchieved => "wishlist_achieved",
            FeedKind::Unknown(s) => s,
        }
    }

    /// Parse a wire name. Never fails; unrecognized kinds become `Unknown`.
    pub fn parse(s: &str) -> Self {
        match s {
            "car_added" => FeedKind::CarAdded,
            "group_created" => FeedKind::GroupCreated,
            "milestone_reached" => FeedKind::MilestoneReached,
            "wishlist_achieved" => FeedKind::WishlistAchieved,
            other => FeedKind::Unknown(other.to_string()),
        }
    }
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for FeedKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FeedKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(FeedKind::parse(&s))
    }
}

/// Feed partition: global explore view vs. subscribed users only
///
/// Travels as a query parameter, never as a JSON body, so `Display` and
/// `FromStr` are the only conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedTab {
    Explore,
    Following,
}

impl std::fmt::Display for FeedTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedTab::Explore => write!(f, "explore"),
            FeedTab::Following => write!(f, "following"),
        }
    }
}

impl std::str::FromStr for FeedTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "explore" => Ok(FeedTab::Explore),
            "following" => Ok(FeedTab::Following),
            _ => Err(format!("Unknown feed tab: {}", s)),
        }
    }
}

/// Loosely typed metadata bag attached to a feed item
///
/// Shape depends on the item kind; every field is optional and missing fields
/// degrade to placeholder text at render time. No client-side validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<i64>,
}

/// One social-activity event record
///
/// `id` is monotonically increasing server-side and doubles as the "is this
/// newer than what I've seen" cursor. Actor identity is denormalized at
/// event-creation time and never live-updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: FeedKind,
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub user_first_name: Option<String>,
    #[serde(default)]
    pub user_last_name: Option<String>,
    #[serde(default)]
    pub user_picture: Option<String>,
    #[serde(default)]
    pub car_id: Option<i64>,
    #[serde(default)]
    pub group_id: Option<i64>,
    #[serde(default)]
    pub metadata: FeedMetadata,
    pub created_at: DateTime<Utc>,
}

/// One batch of feed items plus the pagination flag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPage {
    pub items: Vec<FeedItem>,
    pub has_more: bool,
}

/// Parameters for one feed page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    pub tab: FeedTab,
    /// Zero-based page index
    pub page: u32,
    pub limit: u32,
    /// Optional event-kind filter
    pub kind: Option<FeedKind>,
    /// Optional filter to a single collector's activity
    pub target_user_id: Option<i64>,
}

impl FeedQuery {
    pub fn new(tab: FeedTab) -> Self {
        Self {
            tab,
            page: 0,
            limit: crate::config::DEFAULT_PAGE_LIMIT,
            kind: None,
            target_user_id: None,
        }
    }

    pub fn with_kind(mut self, kind: FeedKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_target_user(mut self, user_id: i64) -> Self {
        self.target_user_id = Some(user_id);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn at_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Query string pairs for `GET /feed`
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("tab", self.tab.to_string()),
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(kind) = &self.kind {
            pairs.push(("type", kind.to_string()));
        }
        if let Some(user_id) = self.target_user_id {
            pairs.push(("targetUserId", user_id.to_string()));
        }
        pairs
    }

    /// Cache key for this query: tab + filters, page excluded
    pub fn key(&self) -> FeedKey {
        FeedKey {
            tab: self.tab,
            kind: self.kind.clone(),
            target_user_id: self.target_user_id,
        }
    }
}

/// Identity of a feed instance: the tab plus its filters
///
/// Pages of the same key belong to the same append-only sequence and share a
/// cache slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedKey {
    pub tab: FeedTab,
    pub kind: Option<FeedKind>,
    pub target_user_id: Option<i64>,
}
