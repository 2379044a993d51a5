//! Employee handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Employee, EmployeeDraft, EmployeeResponse, ListQuery};
use crate::errors::AppResult;
use crate::types::{Created, EmployeePage, NoContent, Paginated};

/// Create employee routes
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/:id",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
}

/// List employees
///
/// Searches first and last name; `sortOrder` accepts `name` or `hireDate`
/// (most recent first).
#[utoipa::path(
    get,
    path = "/employees",
    tag = "Employees",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of employees", body = EmployeePage),
        (status = 401, description = "Not authenticated")
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
pub async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Paginated<EmployeeResponse>>> {
    let page = state.employee_service.list_employees(&query).await?;
    Ok(Json(page))
}

/// Get an employee
#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "Employees",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Employee not found")
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.employee_service.get_employee(id).await?;
    Ok(Json(employee))
}

/// Create an employee
#[utoipa::path(
    post,
    path = "/employees",
    tag = "Employees",
    request_body = EmployeeDraft,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Validation error, submitted values echoed back"),
        (status = 401, description = "Not authenticated")
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
pub async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<EmployeeDraft>,
) -> AppResult<Created<Employee>> {
    let employee = state.employee_service.create_employee(payload).await?;
    Ok(Created(employee))
}

/// Update an employee
#[utoipa::path(
    put,
    path = "/employees/{id}",
    tag = "Employees",
    params(("id" = i32, Path, description = "Employee ID")),
    request_body = EmployeeDraft,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Employee not found")
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<EmployeeDraft>,
) -> AppResult<Json<Employee>> {
    let employee = state.employee_service.update_employee(id, payload).await?;
    Ok(Json(employee))
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "Employees",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 204, description = "Employee deleted or already absent"),
        (status = 401, description = "Not authenticated")
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.employee_service.delete_employee(id).await?;
    Ok(NoContent)
}
