//! Domain layer
//!
//! Contains pure domain models and port traits with no transport code.
//! - `entities`: Feed and catalog models matching the backend's wire shape
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
