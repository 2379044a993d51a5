//! Constraint violations from the database surface as domain errors, for
//! writes whose up-front checks were skipped or raced.

mod common;

use employees_management::domain::UserRole;
use employees_management::errors::AppError;
use employees_management::infra::{
    EmployeeRepository, EmployeeStore, Persistence, UnitOfWork, UserRepository, UserStore,
};

use common::{draft, TestApp};

#[tokio::test]
async fn test_employee_in_missing_department_is_invalid() {
    let app = TestApp::new().await;
    let store = EmployeeStore::new(app.state.database.get_connection());

    let result = store.create(draft("Ana", "Todorova", (2024, 1, 8), 999)).await;

    match result {
        Err(AppError::Validation(message)) => {
            assert_eq!(message, "Department 999 does not exist")
        }
        other => panic!("expected a validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_moving_employee_to_missing_department_is_invalid() {
    let app = TestApp::new().await;
    let sales = app.add_department("Sales", "Sofia").await;
    let ana = app.add_employee("Ana", "Todorova", (2024, 1, 8), sales.id).await;
    let store = EmployeeStore::new(app.state.database.get_connection());

    let result = store
        .update(ana.id, draft("Ana", "Todorova", (2024, 1, 8), 999))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_delete_blocked_by_foreign_key_is_restricted() {
    let app = TestApp::new().await;
    let sales = app.add_department("Sales", "Sofia").await;
    app.add_employee("Ana", "Todorova", (2024, 1, 8), sales.id).await;
    let persistence = Persistence::new(app.state.database.get_connection());
    let id = sales.id;

    // Skip the employee count so only the foreign key can refuse the delete
    let result = persistence
        .transaction(move |ctx| Box::pin(async move { ctx.departments().delete(id).await }))
        .await;

    assert!(matches!(result, Err(AppError::Restricted(_))));
    assert!(app
        .state
        .department_service
        .get_department(sales.id)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_duplicate_username_is_a_conflict() {
    let app = TestApp::new().await;
    let store = UserStore::new(app.state.database.get_connection());

    store
        .create("maria".to_string(), "hash".to_string(), UserRole::User)
        .await
        .unwrap();
    let result = store
        .create("maria".to_string(), "hash".to_string(), UserRole::Admin)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}
