//! User credentials repository.

use async_trait::async_trait;
use futures::FutureExt;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Schema, Set};

use super::entities::user_credentials::{self, ActiveModel};
use super::entities::UserCredentialsEntity;
use crate::domain::{NewUserCredentials, UserCredentials, UserCredentialsUpdate};
use crate::errors::AppResult;
use crate::infra::session::SessionFactory;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Data access contract for the `user_credentials` table.
///
/// Mutations report rows affected instead of guessing what zero means.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserCredentialsRepository: Send + Sync {
    /// Create the table if it does not exist yet
    async fn create_schema(&self) -> AppResult<()>;

    /// Insert a new record; duplicate email or phone number is a conflict
    async fn insert(&self, user: NewUserCredentials) -> AppResult<()>;

    /// Find a record by email
    async fn get(&self, email: &str) -> AppResult<Option<UserCredentials>>;

    /// Overwrite every mutable column of the matching record
    async fn update(&self, email: &str, changes: UserCredentialsUpdate) -> AppResult<u64>;

    /// Remove the matching record
    async fn delete(&self, email: &str) -> AppResult<u64>;
}

/// SeaORM-backed implementation of [`UserCredentialsRepository`].
pub struct UserCredentialsStore {
    sessions: SessionFactory,
}

impl UserCredentialsStore {
    pub fn new(sessions: SessionFactory) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl UserCredentialsRepository for UserCredentialsStore {
    async fn create_schema(&self) -> AppResult<()> {
        self.sessions
            .scoped(|txn| {
                async move {
                    let backend = txn.get_database_backend();
                    let mut stmt =
                        Schema::new(backend).create_table_from_entity(UserCredentialsEntity);
                    stmt.if_not_exists();
                    txn.execute(backend.build(&stmt)).await?;
                    Ok(())
                }
                .boxed()
            })
            .await?;

        tracing::info!("Table user_credentials ready");
        Ok(())
    }

    async fn insert(&self, user: NewUserCredentials) -> AppResult<()> {
        tracing::debug!("Inserting user credentials for {}", user.email);

        let active_model = ActiveModel {
            firstname: Set(user.firstname),
            lastname: Set(user.lastname),
            dob: Set(user.dob),
            email: Set(user.email),
            phone_number: Set(user.phone_number),
        };

        self.sessions
            .scoped(move |txn| {
                async move {
                    UserCredentialsEntity::insert(active_model)
                        .exec_without_returning(txn)
                        .await
                }
                .boxed()
            })
            .await?;

        Ok(())
    }

    async fn get(&self, email: &str) -> AppResult<Option<UserCredentials>> {
        tracing::debug!("Looking up user credentials for {}", email);

        let email = email.to_owned();
        let model = self
            .sessions
            .scoped(move |txn| {
                async move { UserCredentialsEntity::find_by_id(email).one(txn).await }.boxed()
            })
            .await?;

        Ok(model.map(UserCredentials::from))
    }

    async fn update(&self, email: &str, changes: UserCredentialsUpdate) -> AppResult<u64> {
        let email = email.to_owned();
        let rows_affected = self
            .sessions
            .scoped(move |txn| {
                async move {
                    let result = UserCredentialsEntity::update_many()
                        .col_expr(
                            user_credentials::Column::Firstname,
                            Expr::value(changes.firstname),
                        )
                        .col_expr(
                            user_credentials::Column::Lastname,
                            Expr::value(changes.lastname),
                        )
                        .col_expr(user_credentials::Column::Dob, Expr::value(changes.dob))
                        .col_expr(
                            user_credentials::Column::PhoneNumber,
                            Expr::value(changes.phone_number),
                        )
                        .filter(user_credentials::Column::Email.eq(email))
                        .exec(txn)
                        .await?;
                    Ok(result.rows_affected)
                }
                .boxed()
            })
            .await?;

        tracing::debug!("Update touched {} row(s)", rows_affected);
        Ok(rows_affected)
    }

    async fn delete(&self, email: &str) -> AppResult<u64> {
        let email = email.to_owned();
        let rows_affected = self
            .sessions
            .scoped(move |txn| {
                async move {
                    let result = UserCredentialsEntity::delete_by_id(email).exec(txn).await?;
                    Ok(result.rows_affected)
                }
                .boxed()
            })
            .await?;

        tracing::debug!("Delete touched {} row(s)", rows_affected);
        Ok(rows_affected)
    }
}
