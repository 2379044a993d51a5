//! Hand-written [`UnitOfWork`] over mocked repositories for service tests.

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::infra::unit_of_work::TxFuture;
use crate::infra::{
    DepartmentRepository, EmployeeRepository, MockDepartmentRepository, MockEmployeeRepository,
    MockUserRepository, TransactionContext, UnitOfWork, UserRepository,
};

pub struct TestUnitOfWork {
    users: Arc<MockUserRepository>,
    departments: Arc<MockDepartmentRepository>,
    employees: Arc<MockEmployeeRepository>,
}

impl TestUnitOfWork {
    pub fn new(
        users: MockUserRepository,
        departments: MockDepartmentRepository,
        employees: MockEmployeeRepository,
    ) -> Self {
        Self {
            users: Arc::new(users),
            departments: Arc::new(departments),
            employees: Arc::new(employees),
        }
    }

    pub fn with_users(users: MockUserRepository) -> Self {
        Self::new(
            users,
            MockDepartmentRepository::new(),
            MockEmployeeRepository::new(),
        )
    }

    pub fn with_departments(
        departments: MockDepartmentRepository,
        employees: MockEmployeeRepository,
    ) -> Self {
        Self::new(MockUserRepository::new(), departments, employees)
    }
}

#[async_trait]
impl UnitOfWork for TestUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn departments(&self) -> Arc<dyn DepartmentRepository> {
        self.departments.clone()
    }

    fn employees(&self) -> Arc<dyn EmployeeRepository> {
        self.employees.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        // Transaction not supported in test mock
        Err(AppError::internal("Transactions not supported in test mock"))
    }
}
