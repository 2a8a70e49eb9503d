//! User credentials service - use cases over the repository.
//!
//! Enforces column widths before writes and turns a missing record into
//! `AppError::NotFound` for callers that require one.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{NewUserCredentials, UserCredentials, UserCredentialsUpdate};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UserCredentialsRepository;

/// User credentials service trait for dependency injection.
#[async_trait]
pub trait UserCredentialsService: Send + Sync {
    /// Ensure the backing table exists
    async fn create_schema(&self) -> AppResult<()>;

    /// Store a new user
    async fn register(&self, user: NewUserCredentials) -> AppResult<()>;

    /// Look up a user, `None` when absent
    async fn find_user(&self, email: &str) -> AppResult<Option<UserCredentials>>;

    /// Look up a user, `NotFound` when absent
    async fn get_user(&self, email: &str) -> AppResult<UserCredentials>;

    /// Overwrite a user's mutable fields, returns rows affected
    async fn update_user(&self, email: &str, changes: UserCredentialsUpdate) -> AppResult<u64>;

    /// Remove a user, returns rows affected
    async fn delete_user(&self, email: &str) -> AppResult<u64>;
}

/// Concrete implementation of UserCredentialsService.
pub struct UserCredentialsManager<R: UserCredentialsRepository> {
    repo: Arc<R>,
}

impl<R: UserCredentialsRepository> UserCredentialsManager<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: UserCredentialsRepository + 'static> UserCredentialsService for UserCredentialsManager<R> {
    async fn create_schema(&self) -> AppResult<()> {
        self.repo.create_schema().await
    }

    async fn register(&self, user: NewUserCredentials) -> AppResult<()> {
        user.validate()?;
        self.repo.insert(user).await
    }

    async fn find_user(&self, email: &str) -> AppResult<Option<UserCredentials>> {
        self.repo.get(email).await
    }

    async fn get_user(&self, email: &str) -> AppResult<UserCredentials> {
        self.repo.get(email).await?.ok_or_not_found("User")
    }

    async fn update_user(&self, email: &str, changes: UserCredentialsUpdate) -> AppResult<u64> {
        changes.validate()?;
        self.repo.update(email, changes).await
    }

    async fn delete_user(&self, email: &str) -> AppResult<u64> {
        self.repo.delete(email).await
    }
}
