//! Department service - Listing, details and admin maintenance.
//!
//! Edits use the department's `version` for optimistic concurrency and
//! deletes are refused while employees still reference the department.

use async_trait::async_trait;
use std::sync::Arc;

use super::container::parallel;
use crate::domain::{Department, DepartmentDetails, DepartmentUpdate, ListQuery, NewDepartment};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::types::Paginated;
use crate::with_transaction;

/// Department service trait for dependency injection.
#[async_trait]
pub trait DepartmentService: Send + Sync {
    /// Search, sort and page departments
    async fn list_departments(&self, query: &ListQuery) -> AppResult<Paginated<Department>>;

    /// Department with its employees
    async fn get_department(&self, id: i32) -> AppResult<DepartmentDetails>;

    async fn create_department(&self, department: NewDepartment) -> AppResult<Department>;

    /// Apply an edit made against `changes.version`.
    ///
    /// Fails with `ConcurrencyConflict` if someone else saved first and
    /// with `NotFound` if the department is gone.
    async fn update_department(&self, id: i32, changes: DepartmentUpdate)
        -> AppResult<Department>;

    /// Delete a department that has no employees. A missing id is a no-op.
    async fn delete_department(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of DepartmentService using Unit of Work.
pub struct DepartmentManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> DepartmentManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> DepartmentService for DepartmentManager<U> {
    async fn list_departments(&self, query: &ListQuery) -> AppResult<Paginated<Department>> {
        self.uow.departments().list(query).await
    }

    async fn get_department(&self, id: i32) -> AppResult<DepartmentDetails> {
        let departments = self.uow.departments();
        let employees = self.uow.employees();

        let (department, employees) = parallel::join2(
            departments.find_by_id(id),
            employees.list_by_department(id),
        )
        .await?;

        let department = department.ok_or(AppError::NotFound)?;
        Ok(DepartmentDetails {
            department,
            employees,
        })
    }

    async fn create_department(&self, department: NewDepartment) -> AppResult<Department> {
        let created = self.uow.departments().create(department).await?;
        tracing::info!(department_id = created.id, "Department created");
        Ok(created)
    }

    async fn update_department(
        &self,
        id: i32,
        changes: DepartmentUpdate,
    ) -> AppResult<Department> {
        if changes.id.is_some_and(|body_id| body_id != id) {
            return Err(AppError::BadRequest(
                "Department id does not match the request path".to_string(),
            ));
        }

        let departments = self.uow.departments();
        match departments.update(id, &changes).await {
            Ok(updated) => {
                tracing::info!(
                    department_id = id,
                    version = updated.version,
                    "Department updated"
                );
                Ok(updated)
            }
            Err(AppError::ConcurrencyConflict) => {
                if departments.exists(id).await? {
                    tracing::warn!(
                        department_id = id,
                        version = changes.version,
                        "Stale department edit rejected"
                    );
                    Err(AppError::ConcurrencyConflict)
                } else {
                    Err(AppError::NotFound)
                }
            }
            Err(e) => Err(e),
        }
    }

    async fn delete_department(&self, id: i32) -> AppResult<()> {
        let deleted = with_transaction!(self.uow, |ctx| {
            let departments = ctx.departments();

            let employees = departments.employee_count(id).await?;
            if employees > 0 {
                return Err(AppError::restricted(format!(
                    "Department has {} employee(s) and cannot be deleted",
                    employees
                )));
            }

            departments.delete(id).await
        })?;

        if deleted {
            tracing::info!(department_id = id, "Department deleted");
        } else {
            tracing::debug!(department_id = id, "Department already absent");
        }
        Ok(())
    }
}
