//! User lookup handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::UserSummary;
use crate::errors::AppResult;

/// Lookup request
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct GetUserRequest {
    /// Email address identifying the user
    #[schema(example = "varun@gmail.com")]
    pub email: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/get-user", post(get_user))
}

/// Look up a user by email
#[utoipa::path(
    post,
    path = "/get-user",
    tag = "Users",
    request_body = GetUserRequest,
    responses(
        (status = 200, description = "User found", body = UserSummary),
        (status = 404, description = "User not found"),
        (status = 422, description = "Malformed request body"),
        (status = 503, description = "Database unavailable")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<GetUserRequest>,
) -> AppResult<Json<UserSummary>> {
    let user = state.users.get_user(&payload.email).await?;

    Ok(Json(UserSummary::from(user)))
}
