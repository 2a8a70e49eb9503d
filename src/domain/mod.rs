//! Domain layer - Core business entities
//!
//! Plain data types describing a user record, independent of the
//! persistence layer.

pub mod user_credentials;

pub use user_credentials::{NewUserCredentials, UserCredentials, UserCredentialsUpdate, UserSummary};
