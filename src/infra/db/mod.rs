//! Database connection and initialization.

use std::sync::Arc;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement,
};
use tokio::sync::OnceCell;

use super::session::SessionFactory;
use crate::config::Config;

/// Database wrapper for connection management.
///
/// The pool is built on first use, so a malformed URL, an unreachable store
/// or bad credentials all surface from the first query, never at startup.
#[derive(Clone)]
pub struct Database {
    options: ConnectOptions,
    connection: Arc<OnceCell<DatabaseConnection>>,
}

impl Database {
    /// Describe the pool for `config` without touching the store.
    pub fn new(config: &Config) -> Self {
        let mut options = ConnectOptions::new(config.database_url());
        options
            .max_connections(config.database_max_connections)
            .sqlx_logging(config.database_echo)
            .connect_lazy(true);
        if let Some(timeout) = config.database_acquire_timeout {
            options.acquire_timeout(timeout);
        }

        Self {
            options,
            connection: Arc::new(OnceCell::new()),
        }
    }

    /// Shared connection pool, created on the first call.
    ///
    /// A failed attempt leaves the cell empty; the next call tries again.
    pub async fn connection(&self) -> Result<&DatabaseConnection, DbErr> {
        self.connection
            .get_or_try_init(|| SeaDatabase::connect(self.options.clone()))
            .await
    }

    /// Session factory sharing this pool.
    pub fn sessions(&self) -> SessionFactory {
        SessionFactory::new(self.clone())
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        let connection = self.connection().await?;
        connection
            .execute(Statement::from_string(
                connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
