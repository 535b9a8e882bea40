//! Game model as exposed by the catalog port.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A game from the external catalog. Never persisted locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Catalog identifier, kept as a string so it can be used as a path
    /// segment and foreign key without caring about the catalog's id type.
    pub external_id: String,
    pub title: String,
    pub description: Option<String>,
    pub release_date: Option<DateTime<Utc>>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    pub cover_url: Option<String>,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    /// Aggregated rating rounded to an integer (0-100 on IGDB).
    pub rating: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
