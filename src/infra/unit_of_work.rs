//! Unit of Work pattern implementation.
//!
//! Gives services one handle for every repository plus a way to run
//! several statements in a single database transaction.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, PaginatorTrait,
    QueryFilter, TransactionTrait,
};
use std::sync::Arc;

use super::repositories::entities::{department, employee};
use super::repositories::{
    DepartmentRepository, DepartmentStore, EmployeeRepository, EmployeeStore, UserRepository,
    UserStore,
};
use crate::errors::{AppError, AppResult};

/// Boxed future returned by a transaction body
pub type TxFuture<'a, T> =
    std::pin::Pin<Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>>;

/// Unit of Work trait for dependency injection.
///
/// Not mockable directly because of the generic `transaction` method;
/// tests implement it by hand around mocked repositories.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn users(&self) -> Arc<dyn UserRepository>;

    fn departments(&self) -> Arc<dyn DepartmentRepository>;

    fn employees(&self) -> Arc<dyn EmployeeRepository>;

    /// Execute a closure within a transaction.
    ///
    /// Committed when the closure returns `Ok`, rolled back otherwise.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;
}

/// Repository access bound to an open transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    pub fn departments(&self) -> TxDepartmentRepository<'_> {
        TxDepartmentRepository { txn: self.txn }
    }
}

/// SeaORM-backed [`UnitOfWork`]
pub struct Persistence {
    db: DatabaseConnection,
    user_repo: Arc<UserStore>,
    department_repo: Arc<DepartmentStore>,
    employee_repo: Arc<EmployeeStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            department_repo: Arc::new(DepartmentStore::new(db.clone())),
            employee_repo: Arc::new(EmployeeStore::new(db.clone())),
            db,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn departments(&self) -> Arc<dyn DepartmentRepository> {
        self.department_repo.clone()
    }

    fn employees(&self) -> Arc<dyn EmployeeRepository> {
        self.employee_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Department operations that must run inside a transaction.
pub struct TxDepartmentRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxDepartmentRepository<'_> {
    /// Number of employees assigned to the department
    pub async fn employee_count(&self, id: i32) -> AppResult<u64> {
        employee::Entity::find()
            .filter(employee::Column::DepartmentId.eq(id))
            .count(self.txn)
            .await
            .map_err(AppError::from)
    }

    /// Delete by id. Returns whether a row was removed.
    ///
    /// An employee added after [`Self::employee_count`] still blocks the
    /// delete through the foreign key, reported as `Restricted`.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = department::Entity::delete_by_id(id)
            .exec(self.txn)
            .await
            .map_err(|e| {
                AppError::on_foreign_key_violation(e, || {
                    AppError::restricted("Department has employees and cannot be deleted")
                })
            })?;

        Ok(result.rows_affected > 0)
    }
}

/// Run a block inside [`UnitOfWork::transaction`].
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
