//! Lookup command - Reads one user and prints it.

use std::sync::Arc;

use crate::api::AppState;
use crate::cli::args::LookupArgs;
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the lookup command
pub async fn execute(args: LookupArgs, config: Config) -> AppResult<()> {
    let db = Arc::new(Database::new(&config));
    let state = AppState::from_database(db);

    match state.users.find_user(&args.email).await? {
        Some(user) => println!("User found: {}", user),
        None => println!("No user found with that email"),
    }

    Ok(())
}
