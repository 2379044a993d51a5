//! Search, sort and paging through the list endpoints.

mod common;

use axum::http::StatusCode;
use employees_management::domain::UserRole;

use common::{column, get, TestApp};

async fn seed_departments(app: &TestApp) {
    for (name, location) in [
        ("Finance", "Varna"),
        ("Accounting", "Sofia"),
        ("Growth", "Burgas"),
        ("Design", "Plovdiv"),
        ("Boards", "Sofia"),
        ("Engineering", "Ruse"),
        ("Customer Care", "Pleven"),
    ] {
        app.add_department(name, location).await;
    }
}

#[tokio::test]
async fn test_employees_by_hire_date_most_recent_first() {
    let app = TestApp::new().await;
    let cookie = app.session("viewer", UserRole::Guest).await;
    let sales = app.add_department("Sales", "Sofia").await;

    app.add_employee("Alice", "Adams", (2020, 1, 1), sales.id).await;
    app.add_employee("Bob", "Brown", (2022, 6, 1), sales.id).await;
    app.add_employee("Carol", "Clark", (2021, 3, 1), sales.id).await;

    let response = app
        .send(get("/employees?sortOrder=hireDate&page=1", Some(&cookie)))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(column(&response.body, "first_name"), ["Bob", "Carol", "Alice"]);
    assert_eq!(response.body["data"][0]["department"]["name"], "Sales");
    assert_eq!(response.body["meta"]["total"], 3);
}

#[tokio::test]
async fn test_second_page_of_departments_by_name() {
    let app = TestApp::new().await;
    let cookie = app.session("viewer", UserRole::User).await;
    seed_departments(&app).await;

    let response = app
        .send(get("/departments?sortOrder=name&page=2", Some(&cookie)))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(column(&response.body, "name"), ["Finance", "Growth"]);
    assert_eq!(response.body["meta"]["page"], 2);
    assert_eq!(response.body["meta"]["per_page"], 5);
    assert_eq!(response.body["meta"]["total"], 7);
    assert_eq!(response.body["meta"]["total_pages"], 2);
}

#[tokio::test]
async fn test_first_page_sorted_by_location() {
    let app = TestApp::new().await;
    let cookie = app.session("viewer", UserRole::User).await;
    seed_departments(&app).await;

    let response = app
        .send(get("/departments?sortOrder=location", Some(&cookie)))
        .await;

    assert_eq!(
        column(&response.body, "location"),
        ["Burgas", "Pleven", "Plovdiv", "Ruse", "Sofia"]
    );
    // Ties on location fall back to insertion order
    assert_eq!(column(&response.body, "name")[4], "Accounting");
}

#[tokio::test]
async fn test_search_matches_name_or_location() {
    let app = TestApp::new().await;
    let cookie = app.session("viewer", UserRole::User).await;
    seed_departments(&app).await;

    let by_location = app
        .send(get("/departments?search=Sofia&sortOrder=name", Some(&cookie)))
        .await;
    assert_eq!(column(&by_location.body, "name"), ["Accounting", "Boards"]);
    assert_eq!(by_location.body["meta"]["total"], 2);

    let by_name = app
        .send(get("/departments?search=Care", Some(&cookie)))
        .await;
    assert_eq!(column(&by_name.body, "name"), ["Customer Care"]);
}

#[tokio::test]
async fn test_search_wildcards_match_literally() {
    let app = TestApp::new().await;
    let cookie = app.session("viewer", UserRole::User).await;
    for (name, location) in [
        ("R_D", "Sofia"),
        ("RnD", "Varna"),
        ("Growth 100%", "Ruse"),
        ("Growth 1000", "Ruse"),
    ] {
        app.add_department(name, location).await;
    }

    let underscore = app
        .send(get("/departments?search=_", Some(&cookie)))
        .await;
    assert_eq!(column(&underscore.body, "name"), ["R_D"]);

    let percent = app
        .send(get("/departments?search=%25", Some(&cookie)))
        .await;
    assert_eq!(column(&percent.body, "name"), ["Growth 100%"]);

    let suffix = app
        .send(get("/departments?search=100%25", Some(&cookie)))
        .await;
    assert_eq!(column(&suffix.body, "name"), ["Growth 100%"]);
    assert_eq!(suffix.body["meta"]["total"], 1);
}

#[tokio::test]
async fn test_employee_search_ignores_other_fields() {
    let app = TestApp::new().await;
    let cookie = app.session("viewer", UserRole::User).await;
    let it = app.add_department("IT", "Sofia").await;

    app.add_employee("Ivan", "Petrov", (2019, 2, 1), it.id).await;
    app.add_employee("Petar", "Ivanov", (2018, 7, 15), it.id).await;
    app.add_employee("Maria", "Georgieva", (2021, 1, 10), it.id).await;

    let response = app
        .send(get("/employees?search=Iva&sortOrder=name", Some(&cookie)))
        .await;
    assert_eq!(column(&response.body, "first_name"), ["Ivan", "Petar"]);

    // Address and position are not searched
    let none = app
        .send(get("/employees?search=Main", Some(&cookie)))
        .await;
    assert_eq!(none.body["meta"]["total"], 0);
    assert!(none.body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let app = TestApp::new().await;
    let cookie = app.session("viewer", UserRole::User).await;
    seed_departments(&app).await;

    let response = app
        .send(get("/departments?sortOrder=name&page=9", Some(&cookie)))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"].as_array().unwrap().is_empty());
    assert_eq!(response.body["meta"]["total"], 7);
}

#[tokio::test]
async fn test_non_positive_page_means_first_page() {
    let app = TestApp::new().await;
    let cookie = app.session("viewer", UserRole::User).await;
    seed_departments(&app).await;

    for page in ["0", "-4"] {
        let response = app
            .send(get(
                &format!("/departments?sortOrder=name&page={}", page),
                Some(&cookie),
            ))
            .await;
        assert_eq!(response.body["meta"]["page"], 1);
        assert_eq!(column(&response.body, "name")[0], "Accounting");
    }
}

#[tokio::test]
async fn test_unknown_sort_key_still_pages() {
    let app = TestApp::new().await;
    let cookie = app.session("viewer", UserRole::User).await;
    seed_departments(&app).await;

    let response = app
        .send(get("/departments?sortOrder=hireDate", Some(&cookie)))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 5);
    assert_eq!(response.body["meta"]["total"], 7);
}
