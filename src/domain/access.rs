//! Role gate for protected actions.
//!
//! An action either requires nothing beyond a valid session, or names one
//! role that the caller must hold exactly. Roles are not hierarchical
//! here: an `Admin`-only action rejects a `User`, and a `User`-only action
//! rejects an `Admin`.

use crate::errors::{AppError, AppResult};

use super::UserRole;

/// Outcome of an access check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny(Denial),
}

/// Why a caller was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    /// No valid session
    Unauthenticated,
    /// Authenticated, but not with the required role
    RoleMismatch,
}

impl Access {
    pub fn is_allowed(self) -> bool {
        matches!(self, Access::Allow)
    }

    /// Map a denial onto the HTTP-facing error.
    pub fn into_result(self) -> AppResult<()> {
        match self {
            Access::Allow => Ok(()),
            Access::Deny(Denial::Unauthenticated) => Err(AppError::Unauthorized),
            Access::Deny(Denial::RoleMismatch) => Err(AppError::Forbidden),
        }
    }
}

/// Decide whether `caller` may perform an action requiring `required`.
///
/// `required = None` means any authenticated caller.
pub fn authorize(required: Option<UserRole>, caller: Option<UserRole>) -> Access {
    match (required, caller) {
        (_, None) => Access::Deny(Denial::Unauthenticated),
        (None, Some(_)) => Access::Allow,
        (Some(required), Some(caller)) if required == caller => Access::Allow,
        (Some(_), Some(_)) => Access::Deny(Denial::RoleMismatch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROLES: [UserRole; 3] = [UserRole::Guest, UserRole::User, UserRole::Admin];

    #[test]
    fn test_anonymous_always_denied() {
        assert_eq!(
            authorize(None, None),
            Access::Deny(Denial::Unauthenticated)
        );
        for role in ALL_ROLES {
            assert_eq!(
                authorize(Some(role), None),
                Access::Deny(Denial::Unauthenticated)
            );
        }
    }

    #[test]
    fn test_no_requirement_admits_every_role() {
        for role in ALL_ROLES {
            assert!(authorize(None, Some(role)).is_allowed());
        }
    }

    #[test]
    fn test_required_role_is_exact_match() {
        for required in ALL_ROLES {
            for caller in ALL_ROLES {
                let access = authorize(Some(required), Some(caller));
                if required == caller {
                    assert_eq!(access, Access::Allow);
                } else {
                    assert_eq!(access, Access::Deny(Denial::RoleMismatch));
                }
            }
        }
    }

    #[test]
    fn test_admin_does_not_inherit_user_actions() {
        assert_eq!(
            authorize(Some(UserRole::User), Some(UserRole::Admin)),
            Access::Deny(Denial::RoleMismatch)
        );
    }

    #[test]
    fn test_denials_map_to_http_errors() {
        assert!(matches!(
            authorize(Some(UserRole::Admin), None).into_result(),
            Err(AppError::Unauthorized)
        ));
        assert!(matches!(
            authorize(Some(UserRole::Admin), Some(UserRole::User)).into_result(),
            Err(AppError::Forbidden)
        ));
        assert!(authorize(Some(UserRole::Admin), Some(UserRole::Admin))
            .into_result()
            .is_ok());
    }
}
