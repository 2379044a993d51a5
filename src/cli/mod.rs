//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations
//! - `users` - Account creation and listing

pub mod args;

pub use args::{Cli, Commands};
