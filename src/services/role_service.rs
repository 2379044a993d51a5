//! Role service - Admin view of accounts and their roles.
//!
//! A changed role is carried by the next session token the user obtains;
//! sessions already issued keep the role they were signed with.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{User, UserRole};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

/// Role service trait for dependency injection.
#[async_trait]
pub trait RoleService: Send + Sync {
    /// All accounts ordered by id
    async fn list_users(&self) -> AppResult<Vec<User>>;

    async fn update_role(&self, user_id: i32, role: UserRole) -> AppResult<User>;
}

/// Concrete implementation of RoleService using Unit of Work.
pub struct RoleManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> RoleManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> RoleService for RoleManager<U> {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.uow.users().list().await
    }

    async fn update_role(&self, user_id: i32, role: UserRole) -> AppResult<User> {
        let user = self.uow.users().update_role(user_id, role).await?;
        tracing::info!(user_id, role = %role, "User role changed");
        Ok(user)
    }
}
