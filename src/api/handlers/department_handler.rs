//! Department handlers.
//!
//! Any signed-in user may browse departments; changing them is
//! reserved for administrators.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{AdminUser, ValidatedJson};
use crate::api::AppState;
use crate::domain::{Department, DepartmentDetails, DepartmentUpdate, ListQuery, NewDepartment};
use crate::errors::AppResult;
use crate::types::{Created, DepartmentPage, NoContent, Paginated};

/// Create department routes
pub fn department_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_departments).post(create_department))
        .route(
            "/:id",
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
}

/// List departments
///
/// Searches name and location; `sortOrder` accepts `name` or `location`.
#[utoipa::path(
    get,
    path = "/departments",
    tag = "Departments",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of departments", body = DepartmentPage),
        (status = 401, description = "Not authenticated")
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
pub async fn list_departments(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Paginated<Department>>> {
    let page = state.department_service.list_departments(&query).await?;
    Ok(Json(page))
}

/// Get a department with its employees
#[utoipa::path(
    get,
    path = "/departments/{id}",
    tag = "Departments",
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 200, description = "Department found", body = DepartmentDetails),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Department not found")
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<DepartmentDetails>> {
    let details = state.department_service.get_department(id).await?;
    Ok(Json(details))
}

/// Create a department (Admin)
#[utoipa::path(
    post,
    path = "/departments",
    tag = "Departments",
    request_body = NewDepartment,
    responses(
        (status = 201, description = "Department created", body = Department),
        (status = 400, description = "Validation error, submitted values echoed back"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin role required")
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
pub async fn create_department(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    ValidatedJson(payload): ValidatedJson<NewDepartment>,
) -> AppResult<Created<Department>> {
    let department = state.department_service.create_department(payload).await?;
    Ok(Created(department))
}

/// Update a department (Admin)
///
/// `version` must be the value read before editing.
#[utoipa::path(
    put,
    path = "/departments/{id}",
    tag = "Departments",
    params(("id" = i32, Path, description = "Department ID")),
    request_body = DepartmentUpdate,
    responses(
        (status = 200, description = "Department updated", body = Department),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Department not found"),
        (status = 409, description = "Department was changed by someone else")
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
pub async fn update_department(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<DepartmentUpdate>,
) -> AppResult<Json<Department>> {
    let department = state
        .department_service
        .update_department(id, payload)
        .await?;
    Ok(Json(department))
}

/// Delete a department (Admin)
///
/// Refused while any employee still belongs to the department.
#[utoipa::path(
    delete,
    path = "/departments/{id}",
    tag = "Departments",
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 204, description = "Department deleted or already absent"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin role required"),
        (status = 409, description = "Department still has employees")
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
pub async fn delete_department(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.department_service.delete_department(id).await?;
    Ok(NoContent)
}
