//! Employee repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::department::{self, Entity as DepartmentEntity};
use super::entities::employee::{self, ActiveModel, Entity as EmployeeEntity};
use super::listing;
use crate::domain::{
    unknown_department, DepartmentSummary, Employee, EmployeeDraft, EmployeeResponse, ListQuery,
};
use crate::errors::{AppError, AppResult};
use crate::types::Paginated;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// One page of employees matching the query, each with its department
    async fn list(&self, query: &ListQuery) -> AppResult<Paginated<EmployeeResponse>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<EmployeeResponse>>;

    /// Employees of one department ordered by id
    async fn list_by_department(&self, department_id: i32) -> AppResult<Vec<Employee>>;

    async fn create(&self, employee: EmployeeDraft) -> AppResult<Employee>;

    /// Overwrite every field; `NotFound` if the employee does not exist
    async fn update(&self, id: i32, employee: EmployeeDraft) -> AppResult<Employee>;

    /// Remove the employee. Returns whether a row was deleted.
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// SeaORM-backed [`EmployeeRepository`]
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn with_department(
    employee: employee::Model,
    department: Option<department::Model>,
) -> EmployeeResponse {
    EmployeeResponse {
        employee: Employee::from(employee),
        department: department.map(|d| DepartmentSummary {
            id: d.id,
            name: d.name,
        }),
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn list(&self, query: &ListQuery) -> AppResult<Paginated<EmployeeResponse>> {
        let total = listing::filtered::<EmployeeEntity>(query)
            .count(&self.db)
            .await?;
        let rows = listing::page_select::<EmployeeEntity>(query)
            .find_also_related(DepartmentEntity)
            .all(&self.db)
            .await?;

        Ok(Paginated::new(
            rows.into_iter()
                .map(|(employee, department)| with_department(employee, department))
                .collect(),
            query.page_request(),
            total,
        ))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<EmployeeResponse>> {
        let row = EmployeeEntity::find_by_id(id)
            .find_also_related(DepartmentEntity)
            .one(&self.db)
            .await?;

        Ok(row.map(|(employee, department)| with_department(employee, department)))
    }

    async fn list_by_department(&self, department_id: i32) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .filter(employee::Column::DepartmentId.eq(department_id))
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Employee::from).collect())
    }

    async fn create(&self, employee: EmployeeDraft) -> AppResult<Employee> {
        let department_id = employee.department_id;
        let active_model = ActiveModel {
            id: NotSet,
            first_name: Set(employee.first_name),
            last_name: Set(employee.last_name),
            address: Set(employee.address),
            phone_number: Set(employee.phone_number),
            position: Set(employee.position),
            hire_date: Set(employee.hire_date),
            department_id: Set(employee.department_id),
        };

        let model = active_model.insert(&self.db).await.map_err(|e| {
            AppError::on_foreign_key_violation(e, || unknown_department(department_id))
        })?;
        Ok(Employee::from(model))
    }

    async fn update(&self, id: i32, employee: EmployeeDraft) -> AppResult<Employee> {
        let existing = EmployeeEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.first_name = Set(employee.first_name);
        active.last_name = Set(employee.last_name);
        active.address = Set(employee.address);
        active.phone_number = Set(employee.phone_number);
        active.position = Set(employee.position);
        active.hire_date = Set(employee.hire_date);
        active.department_id = Set(employee.department_id);

        let department_id = employee.department_id;
        let model = active.update(&self.db).await.map_err(|e| {
            AppError::on_foreign_key_violation(e, || unknown_department(department_id))
        })?;
        Ok(Employee::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = EmployeeEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}
