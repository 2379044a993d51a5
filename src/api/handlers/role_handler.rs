//! Role administration handlers (Admin only).

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, put},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{AdminUser, ValidatedJson};
use crate::api::AppState;
use crate::domain::{UserResponse, UserRole};
use crate::errors::AppResult;

/// Role change request
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateRoleRequest {
    /// One of `Guest`, `User`, `Admin`
    pub role: UserRole,
}

/// Create role routes
pub fn role_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/:user_id", put(update_role))
}

/// List users and their roles
#[utoipa::path(
    get,
    path = "/roles",
    tag = "Roles",
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin role required")
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
pub async fn list_users(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.role_service.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Change a user's role
///
/// Takes effect the next time that user logs in.
#[utoipa::path(
    put,
    path = "/roles/{user_id}",
    tag = "Roles",
    params(("user_id" = i32, Path, description = "User ID")),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "Role updated", body = UserResponse),
        (status = 400, description = "Unknown role"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "User not found")
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
pub async fn update_role(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(user_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateRoleRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .role_service
        .update_role(user_id, payload.role)
        .await?;
    Ok(Json(UserResponse::from(user)))
}
