//! Users API handlers.
//!
//! ```text
//! GET    /api/users
//! POST   /api/users        {"name":"A","username":"a","email":"a@x.com"}
//! GET    /api/users/{id}
//! PUT    /api/users/{id}   {"name":"B"}  (an explicit "id" renames)
//! DELETE /api/users/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::{Error, User, UserFields, UserId, UserUpdate};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::state::HttpState;

/// Body of `POST /api/users` and `PUT /api/users/{id}`.
///
/// Every field is optional and no value is validated: whatever JSON the
/// client sends for `name`, `username` or `email` is stored as given, and
/// `null` counts as absent. On create, absent fields stay absent and `id` is
/// ignored; on update, only present fields overwrite and an explicit `id`
/// renames the user. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UserRequest {
    /// Honoured by update only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 5)]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "Ada Lovelace")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "ada")]
    pub username: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "ada@example.com")]
    pub email: Option<Value>,
}

impl From<UserRequest> for UserUpdate {
    fn from(value: UserRequest) -> Self {
        let UserRequest {
            id,
            name,
            username,
            email,
        } = value;
        Self {
            id: id.map(UserId::new),
            fields: UserFields {
                name,
                username,
                email,
            },
        }
    }
}

/// [`UserRequest`] extractor that accepts JSON objects only; positional
/// arrays are rejected.
#[derive(Debug)]
pub struct ObjectBody(UserRequest);

impl ObjectBody {
    fn into_update(self) -> UserUpdate {
        self.0.into()
    }

    fn into_fields(self) -> UserFields {
        self.into_update().fields
    }
}

impl<'de> Deserialize<'de> for ObjectBody {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        serde_json::from_value(Value::Object(object))
            .map(Self)
            .map_err(D::Error::custom)
    }
}

/// A stored user as returned to clients. Absent fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "Fernando Terceros")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "jci_terceros")]
    pub username: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "jciterceros@domain.com")]
    pub email: Option<Value>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().get(),
            name: user.name().cloned(),
            username: user.username().cloned(),
            email: user.email().cloned(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

/// Unparseable identifiers match no user.
fn parse_id(raw: &str) -> Result<UserId, Error> {
    UserId::parse_path(raw).ok_or_else(Error::user_not_found)
}

/// List every user in insertion order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_api::inbound::http::users::list_users;
///
/// let _app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/api/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users.iter().map(UserResponse::from).collect()))
}

/// Create a user; the store assigns its identifier.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Body is not a JSON object, or `id` is not an integer", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/api/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<ObjectBody>,
) -> ApiResult<HttpResponse> {
    let created = state
        .users_command
        .create_user(payload.into_inner().into_fields())
        .await?;
    Ok(HttpResponse::Created().json(UserResponse::from(created)))
}

/// Fetch one user by identifier.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/api/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let id = parse_id(&id)?;
    let user = state.users.find_user(id).await?;
    Ok(web::Json(user.into()))
}

/// Shallow-merge the supplied fields, and any explicit `id`, onto a user.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "The merged user", body = UserResponse),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/api/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    payload: web::Json<ObjectBody>,
) -> ApiResult<web::Json<UserResponse>> {
    let id = parse_id(&id)?;
    let updated = state
        .users_command
        .update_user(id, payload.into_inner().into_update())
        .await?;
    Ok(web::Json(updated.into()))
}

/// Remove a user.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/api/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&id)?;
    state.users_command.delete_user(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
