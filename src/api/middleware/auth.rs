//! Session authentication middleware.
//!
//! The session token is read from an `Authorization: Bearer` header for
//! API clients, or from the session cookie set at login.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::api::AppState;
use crate::config::{BEARER_TOKEN_PREFIX, SESSION_COOKIE_NAME};
use crate::domain::{authorize, UserRole};
use crate::errors::{AppError, AppResult};

/// Authenticated user extracted from the session token
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: i32,
    pub username: String,
    pub role: UserRole,
}

/// Session tokens carried by the request, Bearer header first.
fn session_tokens(headers: &HeaderMap) -> Vec<String> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX))
        .map(str::to_string);
    let cookie = CookieJar::from_headers(headers)
        .get(SESSION_COOKIE_NAME)
        .map(|c| c.value().to_string());

    bearer.into_iter().chain(cookie).collect()
}

/// Session authentication middleware.
///
/// Accepts the first token that verifies, so a stale cookie does not
/// shadow a valid Bearer header. Injects the CurrentUser into the request
/// extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let mut rejection = AppError::Unauthorized;
    let mut verified = None;
    for token in session_tokens(request.headers()) {
        match state.auth_service.verify_token(&token) {
            Ok(claims) => {
                verified = Some(claims);
                break;
            }
            Err(e) => rejection = e,
        }
    }
    let claims = verified.ok_or(rejection)?;

    let current_user = CurrentUser {
        id: claims.sub,
        username: claims.username,
        role: claims.role,
    };

    request.extensions_mut().insert(current_user);

    Ok(next.run(request).await)
}

/// Require the caller to hold exactly `required`.
pub fn require_role(user: &CurrentUser, required: UserRole) -> AppResult<()> {
    let access = authorize(Some(required), Some(user.role));
    if !access.is_allowed() {
        tracing::warn!(
            user_id = user.id,
            role = %user.role,
            required = %required,
            "Access denied"
        );
    }
    access.into_result()
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}
