//! Wishlist domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Priority of a wishlist entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WishPriority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for WishPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WishPriority::Low => write!(f, "low"),
            WishPriority::Medium => write!(f, "medium"),
            WishPriority::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for WishPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(WishPriority::Low),
            "medium" => Ok(WishPriority::Medium),
            "high" => Ok(WishPriority::High),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

/// A model the collector wants but does not yet own
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub priority: Option<WishPriority>,
    /// Set once the collector obtains the model; an achieved wish emits a
    /// `wishlist_achieved` feed event server-side.
    #[serde(default)]
    pub achieved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl WishlistItem {
    pub fn is_achieved(&self) -> bool {
        self.achieved_at.is_some()
    }
}

/// Data needed to add a wishlist entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWishlistItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<WishPriority>,
}
