//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion and reach repositories through the Unit of Work.

mod auth_service;
pub mod container;
mod department_service;
mod employee_service;
mod role_service;

#[cfg(test)]
mod testing;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use department_service::{DepartmentManager, DepartmentService};
pub use employee_service::{EmployeeManager, EmployeeService};
pub use role_service::{RoleManager, RoleService};

pub use container::parallel;
