//! User credentials service
//!
//! Looks up user records by email in a single PostgreSQL table through
//! SeaORM, and exposes the lookup over HTTP with Axum.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Environment configuration and constants
//! - **domain**: User record types
//! - **services**: Use cases over the repository
//! - **infra**: Database pool, scoped sessions, repository
//! - **api**: HTTP handlers and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Create the table
//! cargo run -- schema
//!
//! # Start the server
//! cargo run -- serve
//!
//! # Read one user
//! cargo run -- lookup varun@gmail.com
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{NewUserCredentials, UserCredentials, UserCredentialsUpdate, UserSummary};
pub use errors::{AppError, AppResult};
