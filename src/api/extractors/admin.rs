//! Admin-only extractor.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::api::middleware::{require_role, CurrentUser};
use crate::domain::UserRole;
use crate::errors::AppError;

/// Current user, guaranteed to hold the `Admin` role.
///
/// Place it before any body extractor so a non-admin gets 403 without
/// the body being parsed or validated.
pub struct AdminUser(pub CurrentUser);

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        require_role(&user, UserRole::Admin)?;
        Ok(AdminUser(user))
    }
}
