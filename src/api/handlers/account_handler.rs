//! Account handlers: login and logout.

use axum::{
    extract::State,
    response::{Json, Redirect},
    routing::get,
    Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::{LOGIN_PATH, SESSION_COOKIE_NAME};
use crate::errors::AppResult;
use crate::services::TokenResponse;
use crate::types::MessageResponse;

/// User login request
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "admin")]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[serde(skip_serializing)]
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Create account routes
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
}

/// Describe how to log in
#[utoipa::path(
    get,
    path = "/account/login",
    tag = "Account",
    responses(
        (status = 200, description = "Login instructions", body = MessageResponse)
    )
)]
pub async fn login_form() -> Json<MessageResponse> {
    Json(MessageResponse::new(format!(
        "POST a JSON body with username and password to {}",
        LOGIN_PATH
    )))
}

/// Log in and start a session
///
/// The session token is returned in the body and set as an HttpOnly cookie.
#[utoipa::path(
    post,
    path = "/account/login",
    tag = "Account",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<(CookieJar, Json<TokenResponse>)> {
    let token = state
        .auth_service
        .login(&payload.username, &payload.password)
        .await?;

    let cookie = Cookie::build((SESSION_COOKIE_NAME, token.access_token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.session_cookie_secure);

    Ok((jar.add(cookie), Json(token)))
}

/// End the session
///
/// Always clears the session cookie, whether or not one was sent.
#[utoipa::path(
    get,
    path = "/account/logout",
    tag = "Account",
    responses(
        (status = 303, description = "Session cleared, redirect to the login page")
    )
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    let mut cookie = Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .build();
    cookie.make_removal();

    (jar.add(cookie), Redirect::to(LOGIN_PATH))
}
