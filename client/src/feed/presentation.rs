//! Feed presentation
//!
//! Pure mapping from a feed item to its display metadata, plus the terminal
//! rendering used by the CLI. Deterministic: same item, same output. Missing
//! metadata degrades to placeholder copy, never an error.

use chrono::{DateTime, Utc};

use crate::domain::entities::{FeedItem, FeedKind};

/// Display metadata for one feed card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    /// Icon name, as the frontend asset catalog knows it
    pub icon: &'static str,
    /// Accent color, hex
    pub accent: &'static str,
    /// Headline shown next to the actor's name (product copy is Spanish)
    pub headline: String,
}

/// Map an item's kind (and metadata) to its display metadata
///
/// The `Unknown` arm is the defensive fallback for event kinds the backend
/// introduces before this client learns about them.
pub fn presentation(item: &FeedItem) -> Presentation {
    match &item.kind {
        FeedKind::CarAdded => Presentation {
            icon: "directions_car",
            accent: "#1e88e5",
            headline: match &item.metadata.car_name {
                Some(name) => format!("agregó {} a su colección", name),
                None => "agregó un vehículo a su colección".to_string(),
            },
        },
        FeedKind::GroupCreated => Presentation {
            icon: "collections_bookmark",
            accent: "#8e24aa",
            headline: match &item.metadata.group_name {
                Some(name) => format!("creó el grupo \"{}\"", name),
                None => "creó un grupo nuevo".to_string(),
            },
        },
        FeedKind::MilestoneReached => Presentation {
            icon: "emoji_events",
            accent: "#fbc02d",
            headline: match item.metadata.milestone {
                Some(count) => format!("{} Vehículos logrados", count),
                None => "Nuevo hito alcanzado".to_string(),
            },
        },
        FeedKind::WishlistAchieved => Presentation {
            icon: "star",
            accent: "#43a047",
            headline: match &item.metadata.car_name {
                Some(name) => format!("consiguió {} de su lista de deseos", name),
                None => "consiguió un vehículo de su lista de deseos".to_string(),
            },
        },
        FeedKind::Unknown(_) => Presentation {
            icon: "notifications",
            accent: "#757575",
            headline: "tiene actividad nueva".to_string(),
        },
    }
}

/// Pick the card image for an item
///
/// Milestones never show an image, even when the metadata carries one.
pub fn card_image(item: &FeedItem) -> Option<&str> {
    match &item.kind {
        FeedKind::CarAdded | FeedKind::WishlistAchieved => item.metadata.car_image.as_deref(),
        FeedKind::GroupCreated => item.metadata.group_image.as_deref(),
        FeedKind::MilestoneReached | FeedKind::Unknown(_) => None,
    }
}

/// Relative timestamp, Spanish copy
pub fn relative_time(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(created_at);
    let minutes = delta.num_minutes();
    let hours = delta.num_hours();
    let days = delta.num_days();

    if minutes < 1 {
        "justo ahora".to_string()
    } else if minutes < 60 {
        format!("hace {} min", minutes)
    } else if hours < 24 {
        format!("hace {} h", hours)
    } else if days < 7 {
        format!("hace {} días", days)
    } else {
        created_at.format("%d/%m/%Y").to_string()
    }
}

/// Render one feed card as a terminal line pair
pub fn render_item(item: &FeedItem, now: DateTime<Utc>) -> String {
    let p = presentation(item);
    let mut line = format!(
        "[{}] {} {} · {}",
        p.icon,
        item.username,
        p.headline,
        relative_time(item.created_at, now)
    );
    if let Some(image) = card_image(item) {
        line.push_str(&format!("\n    img: {}", image));
    }
    format!("{}\n", line)
}

/// Render the whole feed to terminal text
///
/// An empty feed is a distinct state, not an error (see `render_error`).
pub fn render_feed(items: &[FeedItem], now: DateTime<Utc>) -> String {
    let mut buf = String::new();
    buf.push_str("# Actividad\n\n");

    if items.is_empty() {
        buf.push_str("_Sin actividad por ahora._\n");
        return buf;
    }

    for item in items {
        buf.push_str(&render_item(item, now));
    }
    buf
}

/// Render the feed's error state with its retry affordance
pub fn render_error(message: &str) -> String {
    format!(
        "! No se pudo cargar la actividad.\n    {}\n    Reintentar: vuelve a ejecutar el comando.\n",
        message
    )
}

/// Render the "new activity" banner
pub fn render_new_activity_banner() -> String {
    "^ Hay actividad nueva - actualiza el feed\n".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FeedMetadata;
    use crate::test_utils::{test_feed_item, test_feed_item_with_metadata};

    // ===== presentation =====

    #[test]
    fn car_added_headline_uses_car_name() {
        let item = test_feed_item_with_metadata(
            1,
            FeedKind::CarAdded,
            FeedMetadata {
                car_name: Some("Toyota AE86".to_string()),
                ..Default::default()
            },
        );
        let p = presentation(&item);
        assert_eq!(p.icon, "directions_car");
        assert_eq!(p.headline, "agregó Toyota AE86 a su colección");
    }

    #[test]
    fn car_added_missing_name_degrades_to_placeholder() {
        let item = test_feed_item(1, FeedKind::CarAdded);
        let p = presentation(&item);
        assert_eq!(p.headline, "agregó un vehículo a su colección");
    }

    #[test]
    fn milestone_headline_and_no_image() {
        let item = test_feed_item_with_metadata(
            1,
            FeedKind::MilestoneReached,
            FeedMetadata {
                milestone: Some(50),
                // Present but must be ignored for milestones
                car_image: Some("https://img/stray.jpg".to_string()),
                ..Default::default()
            },
        );

        let p = presentation(&item);
        assert_eq!(p.headline, "50 Vehículos logrados");
        assert_eq!(p.icon, "emoji_events");
        assert_eq!(card_image(&item), None);
    }

    #[test]
    fn milestone_missing_count_degrades() {
        let item = test_feed_item(1, FeedKind::MilestoneReached);
        assert_eq!(presentation(&item).headline, "Nuevo hito alcanzado");
    }

    #[test]
    fn group_created_headline() {
        let item = test_feed_item_with_metadata(
            1,
            FeedKind::GroupCreated,
            FeedMetadata {
                group_name: Some("JDM".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(presentation(&item).headline, "creó el grupo \"JDM\"");
    }

    #[test]
    fn wishlist_achieved_headline() {
        let item = test_feed_item_with_metadata(
            1,
            FeedKind::WishlistAchieved,
            FeedMetadata {
                car_name: Some("Mazda RX-7".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(
            presentation(&item).headline,
            "consiguió Mazda RX-7 de su lista de deseos"
        );
    }

    #[test]
    fn unknown_kind_falls_back_without_panicking() {
        let item = test_feed_item(1, FeedKind::Unknown("badge_earned".to_string()));
        let p = presentation(&item);
        assert_eq!(p.icon, "notifications");
        assert_eq!(p.accent, "#757575");
        assert_eq!(p.headline, "tiene actividad nueva");
        assert_eq!(card_image(&item), None);
    }

    // ===== card_image =====

    #[test]
    fn card_image_per_kind() {
        let car = test_feed_item_with_metadata(
            1,
            FeedKind::CarAdded,
            FeedMetadata {
                car_image: Some("https://img/car.jpg".to_string()),
                group_image: Some("https://img/group.jpg".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(card_image(&car), Some("https://img/car.jpg"));

        let group = test_feed_item_with_metadata(
            2,
            FeedKind::GroupCreated,
            FeedMetadata {
                car_image: Some("https://img/car.jpg".to_string()),
                group_image: Some("https://img/group.jpg".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(card_image(&group), Some("https://img/group.jpg"));

        let wish = test_feed_item_with_metadata(
            3,
            FeedKind::WishlistAchieved,
            FeedMetadata {
                car_image: Some("https://img/wish.jpg".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(card_image(&wish), Some("https://img/wish.jpg"));
    }

    #[test]
    fn card_image_missing_metadata_is_none() {
        let item = test_feed_item(1, FeedKind::CarAdded);
        assert_eq!(card_image(&item), None);
    }

    // ===== relative_time =====

    #[test]
    fn relative_time_buckets() {
        let now = Utc::now();
        assert_eq!(relative_time(now, now), "justo ahora");
        assert_eq!(
            relative_time(now - chrono::Duration::minutes(5), now),
            "hace 5 min"
        );
        assert_eq!(
            relative_time(now - chrono::Duration::hours(3), now),
            "hace 3 h"
        );
        assert_eq!(
            relative_time(now - chrono::Duration::days(2), now),
            "hace 2 días"
        );
    }

    #[test]
    fn relative_time_old_items_show_date() {
        let now = Utc::now();
        let old = now - chrono::Duration::days(30);
        assert_eq!(relative_time(old, now), old.format("%d/%m/%Y").to_string());
    }

    // ===== render_feed =====

    #[test]
    fn render_feed_empty_state_is_not_error_state() {
        let empty = render_feed(&[], Utc::now());
        assert!(empty.contains("Sin actividad por ahora"));
        assert!(!empty.contains("No se pudo cargar"));

        let error = render_error("API error: 500 - boom");
        assert!(error.contains("No se pudo cargar"));
        assert!(error.contains("boom"));
        assert!(!error.contains("Sin actividad"));
    }

    #[test]
    fn render_feed_includes_actor_and_headline() {
        let item = test_feed_item_with_metadata(
            1,
            FeedKind::MilestoneReached,
            FeedMetadata {
                milestone: Some(50),
                ..Default::default()
            },
        );
        let out = render_feed(&[item.clone()], Utc::now());
        assert!(out.contains(&item.username));
        assert!(out.contains("50 Vehículos logrados"));
    }

    #[test]
    fn render_item_appends_image_line_when_present() {
        let item = test_feed_item_with_metadata(
            1,
            FeedKind::CarAdded,
            FeedMetadata {
                car_image: Some("https://img/car.jpg".to_string()),
                ..Default::default()
            },
        );
        let out = render_item(&item, Utc::now());
        assert!(out.contains("img: https://img/car.jpg"));
    }
}
