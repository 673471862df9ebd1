//! Application state - shared across all handlers.

use std::sync::Arc;

use board_core::PostService;
use board_core::ports::{PasswordService, PostRepository};
use board_infra::{Argon2PasswordService, InMemoryPostRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
    /// Name of the storage backend in use, reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let passwords: Arc<dyn PasswordService> =
            Arc::new(Argon2PasswordService::with_config(&config.password)?);

        let (repo, storage) = post_repository(config).await;

        tracing::info!(storage, page_size = config.page_size, "Application state initialized");

        Ok(Self::from_parts(repo, passwords, config.page_size, storage))
    }

    pub fn from_parts(
        repo: Arc<dyn PostRepository>,
        passwords: Arc<dyn PasswordService>,
        page_size: u64,
        storage: &'static str,
    ) -> Self {
        Self {
            posts: Arc::new(PostService::new(repo, passwords, page_size)),
            storage,
        }
    }
}

fn in_memory() -> (Arc<dyn PostRepository>, &'static str) {
    (Arc::new(InMemoryPostRepository::new()), "memory")
}

#[cfg(feature = "postgres")]
async fn post_repository(config: &AppConfig) -> (Arc<dyn PostRepository>, &'static str) {
    use migration::{Migrator, MigratorTrait};

    let Some(db_config) = &config.database else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return in_memory();
    };

    let conn = match board_infra::database::connect(db_config).await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!(
                "Failed to connect to database: {}. Using in-memory fallback.",
                e
            );
            return in_memory();
        }
    };

    if config.auto_migrate {
        if let Err(e) = Migrator::up(&conn, None).await {
            tracing::error!(error = %e, "Migration failed; continuing with existing schema");
        } else {
            tracing::info!("Migrations applied");
        }
    }

    (
        Arc::new(board_infra::PostgresPostRepository::new(conn)),
        "postgres",
    )
}

#[cfg(not(feature = "postgres"))]
async fn post_repository(_config: &AppConfig) -> (Arc<dyn PostRepository>, &'static str) {
    tracing::info!("Running without postgres feature - using in-memory repository");
    in_memory()
}
