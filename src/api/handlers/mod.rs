//! HTTP request handlers.

pub mod account_handler;
pub mod department_handler;
pub mod employee_handler;
pub mod role_handler;

pub use account_handler::account_routes;
pub use department_handler::department_routes;
pub use employee_handler::employee_routes;
pub use role_handler::role_routes;
