//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod user_credentials;

pub use user_credentials::Entity as UserCredentialsEntity;
