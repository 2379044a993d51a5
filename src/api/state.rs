//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    AuthService, DepartmentService, EmployeeService, RoleService, ServiceContainer, Services,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub department_service: Arc<dyn DepartmentService>,
    pub employee_service: Arc<dyn EmployeeService>,
    pub role_service: Arc<dyn RoleService>,
    /// Database connection
    pub database: Arc<Database>,
    /// Settings the handlers need at request time (cookie flags, session lifetime)
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config.clone());

        Self {
            auth_service: container.auth(),
            department_service: container.departments(),
            employee_service: container.employees(),
            role_service: container.roles(),
            database,
            config: Arc::new(config),
        }
    }
}
