//! Service Container - Centralized service access with parallel execution support.
//!
//! SOLID (SRP): Manages service lifecycle and access.
//! SOLID (DIP): Depends on service traits, not implementations.

use std::future::Future;
use std::sync::Arc;

use super::{AuthService, DepartmentService, EmployeeService, RoleService};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Persistence;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn departments(&self) -> Arc<dyn DepartmentService>;

    fn employees(&self) -> Arc<dyn EmployeeService>;

    fn roles(&self) -> Arc<dyn RoleService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    department_service: Arc<dyn DepartmentService>,
    employee_service: Arc<dyn EmployeeService>,
    role_service: Arc<dyn RoleService>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        use super::{Authenticator, DepartmentManager, EmployeeManager, RoleManager};

        let uow = Arc::new(Persistence::new(db));

        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), config)),
            department_service: Arc::new(DepartmentManager::new(uow.clone())),
            employee_service: Arc::new(EmployeeManager::new(uow.clone())),
            role_service: Arc::new(RoleManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn departments(&self) -> Arc<dyn DepartmentService> {
        self.department_service.clone()
    }

    fn employees(&self) -> Arc<dyn EmployeeService> {
        self.employee_service.clone()
    }

    fn roles(&self) -> Arc<dyn RoleService> {
        self.role_service.clone()
    }
}

/// Parallel execution utilities for running independent operations concurrently.
pub mod parallel {
    use super::*;
    use tokio::try_join;

    /// Execute two independent async operations in parallel.
    ///
    /// If either operation fails, the error is returned immediately.
    pub async fn join2<F1, F2, T1, T2>(f1: F1, f2: F2) -> AppResult<(T1, T2)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
    {
        try_join!(f1, f2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[tokio::test]
    async fn test_parallel_join2() {
        async fn op1() -> AppResult<i32> {
            Ok(1)
        }
        async fn op2() -> AppResult<&'static str> {
            Ok("two")
        }

        let (a, b) = parallel::join2(op1(), op2()).await.unwrap();
        assert_eq!(a, 1);
        assert_eq!(b, "two");
    }

    #[tokio::test]
    async fn test_parallel_join2_fails_fast() {
        let result = parallel::join2(
            async { Ok::<_, AppError>(1) },
            async { Err::<i32, _>(AppError::NotFound) },
        )
        .await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
