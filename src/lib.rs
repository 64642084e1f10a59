//! Calculator API: evaluates arithmetic operations over HTTP and keeps a
//! history of every successful calculation.

pub mod api;
pub mod calc;
pub mod config;
pub mod db;
pub mod error;
pub mod history;
pub mod logging;
pub mod server;

use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::db::Database;
use crate::error::DatabaseError;
use crate::history::{MemoryStore, Store};

/// Open the configured store: PostgreSQL with migrations applied, or the
/// in-memory store when no database is configured.
pub async fn open_store(
    database: Option<&DatabaseConfig>,
) -> Result<Arc<dyn Database>, DatabaseError> {
    match database {
        Some(config) => {
            let store = Store::new(config).await?;
            store.run_migrations().await?;
            tracing::info!(pool_size = config.pool_size, "Connected to PostgreSQL");
            let store: Arc<dyn Database> = Arc::new(store);
            Ok(store)
        }
        None => {
            tracing::warn!("Using in-memory store; calculations are lost on exit");
            let store: Arc<dyn Database> = Arc::new(MemoryStore::new());
            Ok(store)
        }
    }
}
