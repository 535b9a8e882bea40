use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use tracing::debug;

use playlog_core::result::AppResult;
use playlog_core::traits::Clock;
use playlog_domain::game::{Game, GameFilter, GameSortField};
use playlog_domain::ports::GameCatalog;

use super::model::IgdbGame;
use crate::client::CatalogClient;
use crate::query::{CatalogQuery, quote};

/// Fields requested for every game.
pub const DEFAULT_FIELDS: [&str; 14] = [
    "id",
    "name",
    "summary",
    "first_release_date",
    "involved_companies.developer",
    "involved_companies.publisher",
    "involved_companies.company.name",
    "cover.url",
    "genres.name",
    "platforms.name",
    "rating",
    "rating_count",
    "created_at",
    "updated_at",
];

const GAMES_ENDPOINT: &str = "games";
const FILTER_DEFAULT_LIMIT: u32 = 50;
const RECENT_WINDOW_DAYS: i64 = 90;
const TOP_RATED_MIN_COUNT: u32 = 20;

/// [`GameCatalog`] backed by the IGDB v4 API.
#[derive(Debug, Clone)]
pub struct IgdbCatalog {
    client: CatalogClient,
    clock: Arc<dyn Clock>,
}

impl IgdbCatalog {
    pub fn new(client: CatalogClient, clock: Arc<dyn Clock>) -> Self {
        Self { client, clock }
    }

    fn base_query() -> CatalogQuery {
        CatalogQuery::new().fields(DEFAULT_FIELDS)
    }

    async fn fetch(&self, query: CatalogQuery) -> AppResult<Vec<Game>> {
        let rows: Vec<IgdbGame> = self.client.post(GAMES_ENDPOINT, &query).await?;
        debug!(count = rows.len(), "Fetched games from IGDB");
        Ok(rows.into_iter().map(Game::from).collect())
    }
}

fn sort_column(field: GameSortField) -> &'static str {
    match field {
        GameSortField::Title => "name",
        GameSortField::Rating => "rating",
        GameSortField::ReleaseDate => "first_release_date",
    }
}

/// Translate a filter into an IGDB query.
pub(crate) fn filter_query(filter: &GameFilter) -> CatalogQuery {
    let mut query = IgdbCatalog::base_query().limit(filter.limit.unwrap_or(FILTER_DEFAULT_LIMIT));

    if let Some(title) = filter.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        query = query.condition(format!("name ~ *{}*", quote(title)));
    }
    if let Some(min_rating) = filter.min_rating {
        query = query.condition(format!("rating >= {min_rating}"));
    }
    if let Some(from) = filter.from_date {
        query = query.condition(format!("first_release_date >= {}", from.timestamp()));
    }
    if let Some(to) = filter.to_date {
        query = query.condition(format!("first_release_date <= {}", to.timestamp()));
    }
    if let Some(field) = filter.sort_by {
        let order = filter.sort_order.unwrap_or_default();
        query = query.sort(format!("{} {}", sort_column(field), order.as_str()));
    }
    query
}

#[async_trait]
impl GameCatalog for IgdbCatalog {
    async fn search_games(&self, query: &str, limit: u32) -> AppResult<Vec<Game>> {
        let q = Self::base_query()
            .condition(format!("name ~ *{}*", quote(query.trim())))
            .limit(limit);
        self.fetch(q).await
    }

    async fn get_game_by_id(&self, id: &str) -> AppResult<Option<Game>> {
        let Ok(numeric) = id.trim().parse::<u64>() else {
            return Ok(None);
        };
        let q = Self::base_query()
            .condition(format!("id = {numeric}"))
            .limit(1);
        Ok(self.fetch(q).await?.into_iter().next())
    }

    async fn get_games_by_filter(&self, filter: &GameFilter) -> AppResult<Vec<Game>> {
        self.fetch(filter_query(filter)).await
    }

    async fn get_most_popular_games(&self, limit: u32) -> AppResult<Vec<Game>> {
        let q = Self::base_query()
            .condition("rating_count != null")
            .sort("rating_count desc")
            .limit(limit);
        self.fetch(q).await
    }

    async fn get_top_rated_games(&self, limit: u32) -> AppResult<Vec<Game>> {
        let q = Self::base_query()
            .condition("rating != null")
            .condition(format!("rating_count > {TOP_RATED_MIN_COUNT}"))
            .sort("rating desc")
            .limit(limit);
        self.fetch(q).await
    }

    async fn get_upcoming_games(&self, limit: u32) -> AppResult<Vec<Game>> {
        let now = self.clock.now_epoch_seconds();
        let q = Self::base_query()
            .condition(format!("first_release_date > {now}"))
            .sort("first_release_date asc")
            .limit(limit);
        self.fetch(q).await
    }

    async fn get_recent_release_games(&self, limit: u32) -> AppResult<Vec<Game>> {
        let now = self.clock.now();
        let since = (now - Duration::days(RECENT_WINDOW_DAYS)).timestamp();
        let q = Self::base_query()
            .condition(format!("first_release_date >= {since}"))
            .condition(format!("first_release_date <= {}", now.timestamp()))
            .sort("first_release_date desc")
            .limit(limit);
        self.fetch(q).await
    }
}
