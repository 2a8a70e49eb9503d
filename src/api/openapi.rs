//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::UserSummary;

/// OpenAPI documentation for the user credentials service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Credentials",
        version = "0.1.0",
        description = "User record lookup over PostgreSQL",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(user_handler::get_user),
    components(schemas(UserSummary, user_handler::GetUserRequest)),
    tags(
        (name = "Users", description = "User lookup")
    )
)]
pub struct ApiDoc;
