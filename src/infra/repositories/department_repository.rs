//! Department repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, Set,
};

use super::entities::department::{self, ActiveModel, Entity as DepartmentEntity};
use super::listing;
use crate::domain::{Department, DepartmentUpdate, ListQuery, NewDepartment};
use crate::errors::{AppError, AppResult};
use crate::types::Paginated;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Department repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// One page of departments matching the query
    async fn list(&self, query: &ListQuery) -> AppResult<Paginated<Department>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Department>>;

    async fn exists(&self, id: i32) -> AppResult<bool>;

    /// Insert with version 1
    async fn create(&self, department: NewDepartment) -> AppResult<Department>;

    /// Apply `changes` if the stored version still equals `changes.version`.
    ///
    /// Returns `ConcurrencyConflict` when no row matched id and version,
    /// whether because the version moved on or the row is gone.
    async fn update(&self, id: i32, changes: &DepartmentUpdate) -> AppResult<Department>;
}

/// SeaORM-backed [`DepartmentRepository`]
pub struct DepartmentStore {
    db: DatabaseConnection,
}

impl DepartmentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DepartmentRepository for DepartmentStore {
    async fn list(&self, query: &ListQuery) -> AppResult<Paginated<Department>> {
        let total = listing::filtered::<DepartmentEntity>(query)
            .count(&self.db)
            .await?;
        let models = listing::page_select::<DepartmentEntity>(query)
            .all(&self.db)
            .await?;

        Ok(Paginated::new(
            models.into_iter().map(Department::from).collect(),
            query.page_request(),
            total,
        ))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Department>> {
        let result = DepartmentEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Department::from))
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        let count = DepartmentEntity::find()
            .filter(department::Column::Id.eq(id))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn create(&self, department: NewDepartment) -> AppResult<Department> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(department.name),
            location: Set(department.location),
            version: Set(1),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Department::from(model))
    }

    async fn update(&self, id: i32, changes: &DepartmentUpdate) -> AppResult<Department> {
        let result = DepartmentEntity::update_many()
            .col_expr(department::Column::Name, Expr::value(changes.name.clone()))
            .col_expr(
                department::Column::Location,
                Expr::value(changes.location.clone()),
            )
            .col_expr(
                department::Column::Version,
                Expr::col(department::Column::Version).add(1),
            )
            .filter(department::Column::Id.eq(id))
            .filter(department::Column::Version.eq(changes.version))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::ConcurrencyConflict);
        }

        self.find_by_id(id).await?.ok_or(AppError::NotFound)
    }
}
