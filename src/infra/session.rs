//! Scoped sessions.
//!
//! Every data-access call runs as one unit of work: a pooled connection is
//! checked out, a transaction is opened, the work runs, and the transaction
//! is committed on success or rolled back on error. The connection returns to
//! the pool on every exit path, including a dropped future, since SeaORM
//! rolls back an uncommitted `DatabaseTransaction` when it is dropped.

use futures::future::BoxFuture;
use sea_orm::{DatabaseTransaction, DbErr, TransactionTrait};

use super::db::Database;
use crate::errors::{AppError, AppResult};

/// Hands out scoped sessions over a shared connection pool.
#[derive(Clone)]
pub struct SessionFactory {
    database: Database,
}

impl SessionFactory {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Run `work` inside a fresh transaction.
    pub async fn scoped<F, T>(&self, work: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(&'a DatabaseTransaction) -> BoxFuture<'a, Result<T, DbErr>> + Send,
        T: Send,
    {
        let db = self.database.connection().await.map_err(AppError::from)?;
        let txn = db.begin().await.map_err(AppError::from)?;

        match work(&txn).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(AppError::from(e))
            }
        }
    }
}
