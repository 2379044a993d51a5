//! Employee domain entity and request payload.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::errors::AppError;

/// Digits with an optional leading `+`, spaces, dashes and parentheses
static PHONE_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9][0-9 ()\-]*$").expect("Failed to compile phone number regex")
});

/// Employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Maria")]
    pub first_name: String,
    #[schema(example = "Ivanova")]
    pub last_name: String,
    pub address: String,
    #[schema(example = "+359 88 123 4567")]
    pub phone_number: String,
    #[schema(example = "Accountant")]
    pub position: String,
    pub hire_date: NaiveDate,
    pub department_id: i32,
}

/// Department reference embedded in employee listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DepartmentSummary {
    pub id: i32,
    pub name: String,
}

/// Employee as returned by the API, with its department's name
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EmployeeResponse {
    #[serde(flatten)]
    pub employee: Employee,
    pub department: Option<DepartmentSummary>,
}

/// Fields submitted when creating or editing an employee
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct EmployeeDraft {
    #[validate(length(min = 1, max = 50, message = "First name is required (at most 50 characters)"))]
    #[schema(example = "Maria")]
    pub first_name: String,
    #[validate(length(min = 1, max = 50, message = "Last name is required (at most 50 characters)"))]
    #[schema(example = "Ivanova")]
    pub last_name: String,
    #[validate(length(min = 1, max = 200, message = "Address is required (at most 200 characters)"))]
    pub address: String,
    #[validate(
        length(min = 1, max = 20, message = "Phone number is required (at most 20 characters)"),
        regex(path = *PHONE_NUMBER_REGEX, message = "Phone number may contain only digits, spaces, dashes, parentheses and a leading +")
    )]
    #[schema(example = "+359 88 123 4567")]
    pub phone_number: String,
    #[validate(length(min = 1, max = 100, message = "Position is required (at most 100 characters)"))]
    #[schema(example = "Accountant")]
    pub position: String,
    #[schema(example = "2024-03-01")]
    pub hire_date: NaiveDate,
    #[validate(range(min = 1, message = "Department is required"))]
    pub department_id: i32,
}

/// Rejection for a draft whose department does not exist
pub fn unknown_department(department_id: i32) -> AppError {
    AppError::validation(format!("Department {} does not exist", department_id))
}
