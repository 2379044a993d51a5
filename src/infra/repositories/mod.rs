//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod department_repository;
mod employee_repository;
pub(crate) mod entities;
pub mod listing;
mod user_repository;

pub use department_repository::{DepartmentRepository, DepartmentStore};
pub use employee_repository::{EmployeeRepository, EmployeeStore};
pub use listing::Listing;
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use department_repository::MockDepartmentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use employee_repository::MockEmployeeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
