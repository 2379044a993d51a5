//! Department domain entity and request payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::Employee;

/// Department record.
///
/// `version` increases by one on every successful update and must be sent
/// back unchanged when editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Department {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Engineering")]
    pub name: String,
    #[schema(example = "Sofia")]
    pub location: String,
    #[schema(example = 1)]
    pub version: i32,
}

/// Department with the employees assigned to it
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DepartmentDetails {
    #[serde(flatten)]
    pub department: Department,
    pub employees: Vec<Employee>,
}

/// Fields submitted when creating a department
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewDepartment {
    #[validate(length(min = 1, max = 100, message = "Name is required (at most 100 characters)"))]
    #[schema(example = "Engineering")]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "Location is required (at most 100 characters)"))]
    #[schema(example = "Sofia")]
    pub location: String,
}

/// Fields submitted when editing a department
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct DepartmentUpdate {
    /// Must match the id in the path when present
    pub id: Option<i32>,
    #[validate(length(min = 1, max = 100, message = "Name is required (at most 100 characters)"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "Location is required (at most 100 characters)"))]
    pub location: String,
    /// Version read before editing
    #[schema(example = 1)]
    pub version: i32,
}
