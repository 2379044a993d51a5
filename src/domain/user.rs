//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{ROLE_ADMIN, ROLE_GUEST, ROLE_USER};
use crate::errors::AppError;

/// User roles, ordered by increasing privilege.
///
/// The ordinal is what gets persisted. Access checks never compare
/// ordinals; see [`crate::domain::access::authorize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum UserRole {
    Guest,
    User,
    Admin,
}

impl UserRole {
    /// Stored representation
    pub fn ordinal(self) -> i32 {
        match self {
            UserRole::Guest => 0,
            UserRole::User => 1,
            UserRole::Admin => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Guest => ROLE_GUEST,
            UserRole::User => ROLE_USER,
            UserRole::Admin => ROLE_ADMIN,
        }
    }
}

impl TryFrom<i32> for UserRole {
    type Error = AppError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(UserRole::Guest),
            1 => Ok(UserRole::User),
            2 => Ok(UserRole::Admin),
            other => Err(AppError::internal(format!("Unknown role ordinal {}", other))),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_GUEST => Ok(UserRole::Guest),
            ROLE_USER => Ok(UserRole::User),
            ROLE_ADMIN => Ok(UserRole::Admin),
            other => Err(AppError::validation(format!(
                "Invalid role '{}'. Must be one of Guest, User, Admin",
                other
            ))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Login name
    #[schema(example = "jdoe")]
    pub username: String,
    /// User role
    pub role: UserRole,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
        }
    }
}
