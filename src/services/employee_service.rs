//! Employee service - CRUD for employee records.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{unknown_department, Employee, EmployeeDraft, EmployeeResponse, ListQuery};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::types::Paginated;

/// Employee service trait for dependency injection.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Search, sort and page employees
    async fn list_employees(&self, query: &ListQuery) -> AppResult<Paginated<EmployeeResponse>>;

    async fn get_employee(&self, id: i32) -> AppResult<EmployeeResponse>;

    async fn create_employee(&self, employee: EmployeeDraft) -> AppResult<Employee>;

    async fn update_employee(&self, id: i32, employee: EmployeeDraft) -> AppResult<Employee>;

    /// A missing id is a no-op.
    async fn delete_employee(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of EmployeeService using Unit of Work.
pub struct EmployeeManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> EmployeeManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn ensure_department(&self, department_id: i32) -> AppResult<()> {
        if self.uow.departments().exists(department_id).await? {
            Ok(())
        } else {
            Err(unknown_department(department_id))
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> EmployeeService for EmployeeManager<U> {
    async fn list_employees(&self, query: &ListQuery) -> AppResult<Paginated<EmployeeResponse>> {
        self.uow.employees().list(query).await
    }

    async fn get_employee(&self, id: i32) -> AppResult<EmployeeResponse> {
        self.uow.employees().find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_employee(&self, employee: EmployeeDraft) -> AppResult<Employee> {
        self.ensure_department(employee.department_id).await?;

        let created = self.uow.employees().create(employee).await?;
        tracing::info!(
            employee_id = created.id,
            department_id = created.department_id,
            "Employee created"
        );
        Ok(created)
    }

    async fn update_employee(&self, id: i32, employee: EmployeeDraft) -> AppResult<Employee> {
        self.ensure_department(employee.department_id).await?;

        let updated = self.uow.employees().update(id, employee).await?;
        tracing::info!(employee_id = id, "Employee updated");
        Ok(updated)
    }

    async fn delete_employee(&self, id: i32) -> AppResult<()> {
        if self.uow.employees().delete(id).await? {
            tracing::info!(employee_id = id, "Employee deleted");
        }
        Ok(())
    }
}
