//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

use crate::domain::UserRole;

/// Employees Management - departments, employees and user roles
#[derive(Parser, Debug)]
#[command(name = "employees-management")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Manage user accounts
    Users(UsersArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, env = "SERVER_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "SERVER_PORT")]
    pub port: Option<u16>,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the users command
#[derive(Parser, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub action: UsersAction,
}

/// User account actions
#[derive(Subcommand, Debug)]
pub enum UsersAction {
    /// Create an account
    Create {
        /// Login name
        #[arg(short, long)]
        username: String,

        /// Password (at least 8 characters)
        #[arg(short, long, env = "NEW_USER_PASSWORD", hide_env_values = true)]
        password: String,

        /// Role: Guest, User or Admin
        #[arg(short, long, default_value = "User")]
        role: UserRole,
    },
    /// List accounts and their roles
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_create() {
        let cli = Cli::try_parse_from([
            "employees-management",
            "users",
            "create",
            "--username",
            "admin",
            "--password",
            "Sup3rSecret",
            "--role",
            "Admin",
        ])
        .unwrap();

        match cli.command {
            Commands::Users(UsersArgs {
                action: UsersAction::Create { username, role, .. },
            }) => {
                assert_eq!(username, "admin");
                assert_eq!(role, UserRole::Admin);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result = Cli::try_parse_from([
            "employees-management",
            "users",
            "create",
            "--username",
            "x",
            "--password",
            "Sup3rSecret",
            "--role",
            "admin",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_serve_flags_are_optional() {
        let cli = Cli::try_parse_from(["employees-management", "serve", "--port", "8080"]).unwrap();
        match cli.command {
            Commands::Serve(args) => assert_eq!(args.port, Some(8080)),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
