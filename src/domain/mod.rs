//! Domain layer - records, value objects and the rules that apply to them.
//!
//! Nothing here talks to the database or HTTP; `access` and `query` hold
//! the role gate and the list parameters every resource shares.

pub mod access;
pub mod department;
pub mod employee;
pub mod password;
pub mod query;
pub mod user;

pub use access::{authorize, Access, Denial};
pub use department::{Department, DepartmentDetails, DepartmentUpdate, NewDepartment};
pub use employee::{
    unknown_department, DepartmentSummary, Employee, EmployeeDraft, EmployeeResponse,
};
pub use password::Password;
pub use query::{DepartmentSort, EmployeeSort, ListQuery, SortDirection, SortKey};
pub use user::{User, UserResponse, UserRole};
