//! Feed module
//!
//! Presentation mapping and terminal rendering for feed items.

pub mod presentation;

pub use presentation::{
    card_image, presentation, relative_time, render_error, render_feed, render_item,
    render_new_activity_banner, Presentation,
};
