//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod user_credentials_repository;

pub use user_credentials_repository::{UserCredentialsRepository, UserCredentialsStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_credentials_repository::MockUserCredentialsRepository;
