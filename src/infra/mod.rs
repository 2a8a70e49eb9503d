//! Infrastructure layer - External systems integration
//!
//! - Database connection handling
//! - Scoped sessions (one transaction per data-access call)
//! - Repositories

pub mod db;
pub mod repositories;
pub mod session;

pub use db::Database;
pub use repositories::{UserCredentialsRepository, UserCredentialsStore};
pub use session::SessionFactory;

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserCredentialsRepository;
