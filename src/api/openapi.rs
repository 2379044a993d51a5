//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{account_handler, department_handler, employee_handler, role_handler};
use crate::config::SESSION_COOKIE_NAME;
use crate::domain::{
    Department, DepartmentDetails, DepartmentSummary, DepartmentUpdate, Employee, EmployeeDraft,
    EmployeeResponse, NewDepartment, UserResponse, UserRole,
};
use crate::services::TokenResponse;
use crate::types::{DepartmentPage, EmployeePage, MessageResponse, PaginationMeta};

/// OpenAPI documentation for the Employees Management API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employees Management",
        version = "0.1.0",
        description = "Departments, employees and user roles with session-based sign in",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        account_handler::login_form,
        account_handler::login,
        account_handler::logout,
        department_handler::list_departments,
        department_handler::get_department,
        department_handler::create_department,
        department_handler::update_department,
        department_handler::delete_department,
        employee_handler::list_employees,
        employee_handler::get_employee,
        employee_handler::create_employee,
        employee_handler::update_employee,
        employee_handler::delete_employee,
        role_handler::list_users,
        role_handler::update_role,
    ),
    components(
        schemas(
            UserRole,
            UserResponse,
            Department,
            DepartmentDetails,
            NewDepartment,
            DepartmentUpdate,
            Employee,
            EmployeeDraft,
            EmployeeResponse,
            DepartmentSummary,
            DepartmentPage,
            EmployeePage,
            PaginationMeta,
            MessageResponse,
            TokenResponse,
            account_handler::LoginRequest,
            role_handler::UpdateRoleRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Account", description = "Login and logout"),
        (name = "Departments", description = "Departments; changes require the Admin role"),
        (name = "Employees", description = "Employee records"),
        (name = "Roles", description = "User role administration (Admin only)")
    )
)]
pub struct ApiDoc;

/// Security schemes: the session cookie set by login, or the same token as a Bearer header
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE_NAME))),
            );
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token obtained from /account/login"))
                        .build(),
                ),
            );
        }
    }
}
