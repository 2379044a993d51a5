//! Shared harness: an in-memory SQLite database behind the real router.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::Value;
use tower::ServiceExt;

use employees_management::api::create_router;
use employees_management::domain::{Department, Employee, EmployeeDraft, NewDepartment, UserRole};
use employees_management::infra::Database;
use employees_management::{AppState, Config};

pub const PASSWORD: &str = "Correct-Horse-9";

const SECRET: &str = "integration-test-secret-at-least-32-chars";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn error_code(&self) -> &str {
        self.body["error"]["code"].as_str().unwrap_or_default()
    }

    pub fn set_cookie(&self) -> Option<&str> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
    }
}

impl TestApp {
    pub async fn new() -> Self {
        let config = Config::new("sqlite::memory:", SECRET).unwrap();
        let database = Database::connect(&config).await.unwrap();
        let state = AppState::from_config(Arc::new(database), config);

        Self {
            router: create_router(state.clone()),
            state,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn create_user(&self, username: &str, role: UserRole) {
        self.state
            .auth_service
            .create_user(username, PASSWORD, role)
            .await
            .unwrap();
    }

    /// Log in and return the `name=value` pair to send back as a Cookie header.
    pub async fn login(&self, username: &str) -> String {
        let response = self
            .send(json_request(
                "POST",
                "/account/login",
                None,
                serde_json::json!({ "username": username, "password": PASSWORD }),
            ))
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {}", response.body);

        let set_cookie = response.set_cookie().unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    /// Create a user with `role` and return its session cookie.
    pub async fn session(&self, username: &str, role: UserRole) -> String {
        self.create_user(username, role).await;
        self.login(username).await
    }

    pub async fn add_department(&self, name: &str, location: &str) -> Department {
        self.state
            .department_service
            .create_department(NewDepartment {
                name: name.to_string(),
                location: location.to_string(),
            })
            .await
            .unwrap()
    }

    pub async fn add_employee(
        &self,
        first_name: &str,
        last_name: &str,
        hire_date: (i32, u32, u32),
        department_id: i32,
    ) -> Employee {
        self.state
            .employee_service
            .create_employee(draft(first_name, last_name, hire_date, department_id))
            .await
            .unwrap()
    }
}

pub fn draft(
    first_name: &str,
    last_name: &str,
    (year, month, day): (i32, u32, u32),
    department_id: i32,
) -> EmployeeDraft {
    EmployeeDraft {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        address: "1 Main St".to_string(),
        phone_number: "+359 2 123 456".to_string(),
        position: "Specialist".to_string(),
        hire_date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        department_id,
    }
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn delete(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("DELETE").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, cookie: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Values of `field` across the `data` array of a list response
pub fn column<'a>(body: &'a Value, field: &str) -> Vec<&'a str> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row[field].as_str().unwrap())
        .collect()
}
