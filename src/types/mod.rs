//! Shared request/response types.

mod pagination;
mod response;

pub use pagination::{DepartmentPage, EmployeePage, PageRequest, Paginated, PaginationMeta};
pub use response::{Created, MessageResponse, NoContent};
