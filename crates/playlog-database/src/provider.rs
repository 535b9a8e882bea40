//! Store selection from configuration.

use std::sync::Arc;

use tracing::info;

use playlog_core::config::database::{DatabaseConfig, DatabaseProvider};
use playlog_core::result::AppResult;
use playlog_domain::ports::{CollectionStore, ReviewStore, UserStore};

use crate::connection::DatabasePool;
use crate::memory::{MemoryCollectionStore, MemoryReviewStore, MemoryUserStore};
use crate::migration::run_migrations;
use crate::repositories::{CollectionRepository, ReviewRepository, UserRepository};

/// The three storage ports, backed by one provider.
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub collection: Arc<dyn CollectionStore>,
    pub reviews: Arc<dyn ReviewStore>,
    /// Present only for the Postgres provider.
    pub pool: Option<DatabasePool>,
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores")
            .field("pool", &self.pool)
            .finish_non_exhaustive()
    }
}

impl Stores {
    /// Connect to the configured provider, running migrations when asked.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            DatabaseProvider::Memory => {
                info!("Using in-memory stores; data will not survive a restart");
                Ok(Self::in_memory())
            }
            DatabaseProvider::Postgres => {
                let db = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(&db).await?;
                }
                Ok(Self::postgres(db))
            }
        }
    }

    /// Fresh, empty in-memory stores. Deleting a user removes their
    /// collection and reviews, as the Postgres foreign keys do.
    pub fn in_memory() -> Self {
        let collection = Arc::new(MemoryCollectionStore::new());
        let reviews = Arc::new(MemoryReviewStore::new());
        Self {
            users: Arc::new(MemoryUserStore::with_dependents(
                collection.clone(),
                reviews.clone(),
            )),
            collection,
            reviews,
            pool: None,
        }
    }

    /// Repositories sharing one Postgres pool.
    pub fn postgres(db: DatabasePool) -> Self {
        let pool = db.pool().clone();
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            collection: Arc::new(CollectionRepository::new(pool.clone())),
            reviews: Arc::new(ReviewRepository::new(pool)),
            pool: Some(db),
        }
    }

    /// `true` when the backing store answers. Always `true` in memory.
    pub async fn is_healthy(&self) -> bool {
        match &self.pool {
            Some(db) => db.health_check().await.unwrap_or(false),
            None => true,
        }
    }

    /// Release pooled connections.
    pub async fn close(&self) {
        if let Some(db) = &self.pool {
            db.close().await;
        }
    }
}
