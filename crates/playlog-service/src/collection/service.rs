//! Personal collections: which games a user owns and how far along they are.

use std::sync::Arc;

use futures::future::try_join_all;
use tracing::info;
use uuid::Uuid;

use playlog_core::error::AppError;
use playlog_domain::ports::{CollectionStore, GameCatalog};
use playlog_domain::{CollectionItem, GameEntry, GameStatus, GameSummary, NewGameEntry};

use crate::context::RequestContext;

/// Manages collection entries for the calling user.
#[derive(Clone)]
pub struct CollectionService {
    collection: Arc<dyn CollectionStore>,
    catalog: Arc<dyn GameCatalog>,
}

fn require_game_id(game_id: &str) -> Result<&str, AppError> {
    let game_id = game_id.trim();
    if game_id.is_empty() {
        return Err(AppError::validation("Game id is required"));
    }
    Ok(game_id)
}

impl CollectionService {
    pub fn new(collection: Arc<dyn CollectionStore>, catalog: Arc<dyn GameCatalog>) -> Self {
        Self {
            collection,
            catalog,
        }
    }

    /// Adds a catalog game to the caller's collection. Status defaults to
    /// [`GameStatus::Backlog`].
    pub async fn add_to_collection(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        game_id: &str,
        status: Option<GameStatus>,
    ) -> Result<GameEntry, AppError> {
        let game_id = require_game_id(game_id)?;
        ctx.ensure_self(user_id)?;

        if self.catalog.get_game_by_id(game_id).await?.is_none() {
            return Err(AppError::not_found("Game not found"));
        }
        if self.collection.find_entry(user_id, game_id).await?.is_some() {
            return Err(AppError::conflict("Game already has been added to this user"));
        }

        let entry = self
            .collection
            .add_entry(NewGameEntry {
                user_id,
                game_external_id: game_id.to_string(),
                status: status.unwrap_or_default(),
            })
            .await?;

        info!(user_id = %user_id, game_id, status = %entry.status, "Game added to collection");

        Ok(entry)
    }

    pub async fn remove_from_collection(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        game_id: &str,
    ) -> Result<(), AppError> {
        let game_id = require_game_id(game_id)?;
        ctx.ensure_self(user_id)?;

        if !self.collection.remove_entry(user_id, game_id).await? {
            return Err(AppError::not_found("Game not found in collection"));
        }

        info!(user_id = %user_id, game_id, "Game removed from collection");

        Ok(())
    }

    pub async fn update_game_status(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        game_id: &str,
        status: GameStatus,
    ) -> Result<GameEntry, AppError> {
        let game_id = require_game_id(game_id)?;
        ctx.ensure_self(user_id)?;

        if self.collection.find_entry(user_id, game_id).await?.is_none() {
            return Err(AppError::not_found("Game not found in collection"));
        }

        let entry = self
            .collection
            .update_status(user_id, game_id, status)
            .await?;

        info!(user_id = %user_id, game_id, status = %status, "Collection status updated");

        Ok(entry)
    }

    /// Lists the caller's collection, optionally filtered by status.
    ///
    /// With `enrich`, catalog details are fetched for every entry
    /// concurrently. Any failed lookup fails the whole listing.
    pub async fn get_collection(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        status: Option<GameStatus>,
        enrich: bool,
    ) -> Result<Vec<CollectionItem>, AppError> {
        ctx.ensure_self(user_id)?;

        let entries = self.collection.list_entries(user_id, status).await?;

        if !enrich {
            return Ok(entries
                .into_iter()
                .map(|entry| CollectionItem { entry, game: None })
                .collect());
        }

        let lookups = entries.into_iter().map(|entry| async move {
            let game = self.catalog.get_game_by_id(&entry.game_external_id).await?;
            Ok::<_, AppError>(CollectionItem {
                game: game.as_ref().map(GameSummary::from),
                entry,
            })
        });

        try_join_all(lookups).await
    }
}
