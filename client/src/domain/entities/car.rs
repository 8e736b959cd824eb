//! Car domain entity
//!
//! A die-cast model in a collector's catalog, as the backend reports it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model_year: Option<i32>,
    /// Scale of the model, e.g. "1:64"
    #[serde(default)]
    pub scale: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Car {
    /// Short display label: "Brand Name" or just the name
    pub fn label(&self) -> String {
        match &self.brand {
            Some(brand) => format!("{} {}", brand, self.name),
            None => self.name.clone(),
        }
    }
}

/// Data needed to register a new car
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCar {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
}
