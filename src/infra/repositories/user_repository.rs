//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{User, UserRole};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Exact, case-sensitive username lookup
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    async fn create(&self, username: String, password_hash: String, role: UserRole)
        -> AppResult<User>;

    /// Change a user's role; `NotFound` if the user does not exist
    async fn update_role(&self, id: i32, role: UserRole) -> AppResult<User>;

    /// All users ordered by id
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// SeaORM-backed [`UserRepository`]
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(User::try_from)
            .transpose()
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?
            .map(User::try_from)
            .transpose()
    }

    async fn create(
        &self,
        username: String,
        password_hash: String,
        role: UserRole,
    ) -> AppResult<User> {
        let active_model = ActiveModel {
            id: NotSet,
            username: Set(username),
            password_hash: Set(password_hash),
            role: Set(role.ordinal()),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::on_unique_violation(e, || AppError::conflict("User")))?;
        User::try_from(model)
    }

    async fn update_role(&self, id: i32, role: UserRole) -> AppResult<User> {
        let user = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = user.into();
        active.role = Set(role.ordinal());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        User::try_from(model)
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(User::try_from)
            .collect()
    }
}
