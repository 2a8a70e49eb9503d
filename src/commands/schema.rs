//! Schema command - Creates the user_credentials table.

use std::sync::Arc;

use crate::api::AppState;
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the schema command
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Arc::new(Database::new(&config));
    let state = AppState::from_database(db);

    state.users.create_schema().await?;
    tracing::info!("Table created.");

    Ok(())
}
