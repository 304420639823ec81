//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects the handler annotations and DTO schemas into one
//! OpenAPI 3 document. It is served at `/openapi.json`, rendered by Swagger
//! UI under `/api-docs/`, and printed by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::users::{UserRequest, UserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users CRUD API",
        version = "1.0.0",
        description = "Create, read, update, and delete users held in memory."
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::home::index,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserRequest, UserResponse, ErrorResponse)),
    tags(
        (name = "users", description = "In-memory user collection"),
        (name = "pages", description = "Human-facing pages"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
