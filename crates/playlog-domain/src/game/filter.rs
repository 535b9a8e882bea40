//! Criteria for browsing the catalog.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use playlog_core::AppError;

/// Criteria accepted by `GameCatalog::get_games_by_filter`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameFilter {
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
    /// Minimum catalog rating (0-100).
    pub min_rating: Option<f64>,
    /// Earliest release date, inclusive.
    pub from_date: Option<DateTime<Utc>>,
    /// Latest release date, inclusive.
    pub to_date: Option<DateTime<Utc>>,
    pub sort_by: Option<GameSortField>,
    pub sort_order: Option<SortOrder>,
    pub limit: Option<u32>,
}

/// Sortable game attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameSortField {
    Title,
    Rating,
    ReleaseDate,
}

impl GameSortField {
    /// Return the field as it appears in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Rating => "rating",
            Self::ReleaseDate => "release_date",
        }
    }
}

impl fmt::Display for GameSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GameSortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "rating" => Ok(Self::Rating),
            "release_date" | "releaseDate" => Ok(Self::ReleaseDate),
            _ => Err(AppError::validation(format!(
                "Invalid sort field: '{s}'. Expected one of: title, rating, release_date"
            ))),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(AppError::validation(format!(
                "Invalid sort order: '{s}'. Expected one of: asc, desc"
            ))),
        }
    }
}
