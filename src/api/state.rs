//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{Database, UserCredentialsStore};
use crate::services::{UserCredentialsManager, UserCredentialsService};

/// Shared, explicitly constructed handles passed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// User credentials service
    pub users: Arc<dyn UserCredentialsService>,
    /// Database connection pool
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the SeaORM-backed store and service over `database`.
    pub fn from_database(database: Arc<Database>) -> Self {
        let store = Arc::new(UserCredentialsStore::new(database.sessions()));
        let users = Arc::new(UserCredentialsManager::new(store));

        Self { users, database }
    }
}
