//! Employees Management - departments, employees and user roles over HTTP
//!
//! Signed-in users browse and search departments and maintain employee
//! records; administrators additionally manage departments and assign
//! user roles.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities, list queries and the role gate
//! - **services**: Application use cases and business logic
//! - **infra**: Database, migrations, repositories and Unit of Work
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Create the first administrator
//! cargo run -- users create --username admin --password 'change-me-now' --role Admin
//!
//! # Start the server
//! cargo run -- serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, User, UserRole};
pub use errors::{AppError, AppResult};
