//! IGDB response shapes and their mapping to [`Game`].

use chrono::{DateTime, Utc};
use serde::Deserialize;

use playlog_domain::Game;

/// A row from the IGDB `games` endpoint, limited to the fields we request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IgdbGame {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub summary: Option<String>,
    /// Unix seconds.
    pub first_release_date: Option<i64>,
    #[serde(default)]
    pub involved_companies: Vec<IgdbInvolvedCompany>,
    pub cover: Option<IgdbImage>,
    #[serde(default)]
    pub genres: Vec<IgdbNamed>,
    #[serde(default)]
    pub platforms: Vec<IgdbNamed>,
    pub rating: Option<f64>,
    pub rating_count: Option<u32>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IgdbInvolvedCompany {
    #[serde(default)]
    pub developer: bool,
    #[serde(default)]
    pub publisher: bool,
    pub company: Option<IgdbNamed>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IgdbNamed {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IgdbImage {
    pub url: Option<String>,
}

fn from_epoch(seconds: Option<i64>) -> Option<DateTime<Utc>> {
    seconds.and_then(|s| DateTime::from_timestamp(s, 0))
}

/// IGDB serves protocol-relative thumbnail URLs; upgrade them to a full
/// https URL at cover size. Absolute URLs are left alone.
pub fn normalize_cover_url(url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https:{url}").replacen("t_thumb", "t_cover_big", 1)
    }
}

impl IgdbGame {
    fn company_where(&self, pick: impl Fn(&IgdbInvolvedCompany) -> bool) -> Option<String> {
        self.involved_companies
            .iter()
            .find(|c| pick(c))
            .and_then(|c| c.company.as_ref())
            .and_then(|c| c.name.clone())
    }
}

fn names(items: Vec<IgdbNamed>) -> Vec<String> {
    items.into_iter().filter_map(|n| n.name).collect()
}

impl From<IgdbGame> for Game {
    fn from(igdb: IgdbGame) -> Self {
        let developer = igdb.company_where(|c| c.developer);
        let publisher = igdb.company_where(|c| c.publisher);
        let cover_url = igdb
            .cover
            .as_ref()
            .and_then(|c| c.url.as_deref())
            .map(normalize_cover_url);

        Game {
            external_id: igdb.id.to_string(),
            title: igdb.name,
            description: igdb.summary,
            release_date: from_epoch(igdb.first_release_date),
            developer,
            publisher,
            cover_url,
            genres: names(igdb.genres),
            platforms: names(igdb.platforms),
            rating: igdb.rating.unwrap_or(0.0).round() as i32,
            created_at: from_epoch(igdb.created_at),
            updated_at: from_epoch(igdb.updated_at),
        }
    }
}
