//! Users command - Account management from the terminal.
//!
//! There is no self-registration; the first Admin is created here.

use std::sync::Arc;

use crate::api::AppState;
use crate::cli::args::{UsersAction, UsersArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the users command
pub async fn execute(args: UsersArgs, config: Config) -> AppResult<()> {
    let db = Arc::new(Database::connect(&config).await?);
    let state = AppState::from_config(db, config);

    match args.action {
        UsersAction::Create {
            username,
            password,
            role,
        } => {
            let user = state
                .auth_service
                .create_user(&username, &password, role)
                .await?;
            tracing::info!(user_id = user.id, role = %user.role, "User created");
            println!("Created user {} ({}) with id {}", user.username, user.role, user.id);
        }
        UsersAction::List => {
            for user in state.role_service.list_users().await? {
                println!("{:>5}  {:<20}  {}", user.id, user.username, user.role);
            }
        }
    }

    Ok(())
}
