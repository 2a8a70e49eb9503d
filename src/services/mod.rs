//! Application services layer - Use cases and business logic.
//!
//! Services depend on repository traits, not on SeaORM directly.

mod user_credentials_service;

pub use user_credentials_service::{UserCredentialsManager, UserCredentialsService};
