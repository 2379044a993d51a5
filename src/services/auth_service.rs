//! Authentication service - Handles login and session tokens.
//!
//! A session is a signed JWT carrying the user's id, name and role at the
//! time of login. The API layer stores it in a cookie or accepts it as a
//! Bearer token.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::config::{Config, MAX_USERNAME_LENGTH, TOKEN_TYPE_BEARER};
use crate::domain::{Password, User, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub username: String,
    pub role: UserRole,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token expiration time in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
    #[schema(example = "admin")]
    pub username: String,
    pub role: UserRole,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials and issue a session token.
    ///
    /// Unknown usernames and wrong passwords fail the same way.
    async fn login(&self, username: &str, password: &str) -> AppResult<TokenResponse>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;

    /// Create an account with a freshly hashed password
    async fn create_user(&self, username: &str, password: &str, role: UserRole)
        -> AppResult<User>;
}

fn generate_token(user: &User, config: &Config) -> AppResult<TokenResponse> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours());

    let claims = Claims {
        sub: user.id,
        username: user.username.clone(),
        role: user.role,
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(TokenResponse {
        access_token: token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        expires_in: config.session_ttl_seconds(),
        username: user.username.clone(),
        role: user.role,
    })
}

fn verify_token_internal(token: &str, config: &Config) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn login(&self, username: &str, password: &str) -> AppResult<TokenResponse> {
        let user = self.uow.users().find_by_username(username).await?;

        // Unknown users still pay for one hash verification
        let verified = match &user {
            Some(user) => Password::from_hash(user.password_hash.clone()).verify(password),
            None => Password::verify_decoy(password),
        };

        match user {
            Some(user) if verified => {
                tracing::info!(user_id = user.id, role = %user.role, "User logged in");
                generate_token(&user, &self.config)
            }
            _ => {
                tracing::warn!(username, "Rejected login attempt");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        verify_token_internal(token, &self.config)
    }

    async fn create_user(
        &self,
        username: &str,
        password: &str,
        role: UserRole,
    ) -> AppResult<User> {
        let username = username.trim();
        if username.is_empty() || username.chars().count() as u64 > MAX_USERNAME_LENGTH {
            return Err(AppError::validation(format!(
                "Username is required (at most {} characters)",
                MAX_USERNAME_LENGTH
            )));
        }

        if self.uow.users().find_by_username(username).await?.is_some() {
            return Err(AppError::conflict("User"));
        }

        let password_hash = Password::new(password)?.into_string();
        self.uow
            .users()
            .create(username.to_string(), password_hash, role)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use crate::services::testing::TestUnitOfWork;

    const SECRET: &str = "test-secret-key-with-at-least-32-chars";

    fn config() -> Config {
        Config::new("sqlite::memory:", SECRET).unwrap()
    }

    fn stored_user(password: &str, role: UserRole) -> User {
        User {
            id: 7,
            username: "maria".to_string(),
            password_hash: Password::new(password).unwrap().into_string(),
            role,
        }
    }

    fn service(users: MockUserRepository) -> Authenticator<TestUnitOfWork> {
        Authenticator::new(Arc::new(TestUnitOfWork::with_users(users)), config())
    }

    #[tokio::test]
    async fn test_login_issues_token_with_role() {
        let user = stored_user("Passw0rd!", UserRole::Admin);
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(move |_| Ok(Some(user.clone())));

        let auth = service(users);
        let token = auth.login("maria", "Passw0rd!").await.unwrap();
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.role, UserRole::Admin);

        let claims = auth.verify_token(&token.access_token).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.username, "maria");
        assert_eq!(claims.role, UserRole::Admin);
        assert!(claims.exp > claims.iat);
    }

    #[tokio::test]
    async fn test_wrong_password_is_rejected() {
        let user = stored_user("Passw0rd!", UserRole::User);
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(move |_| Ok(Some(user.clone())));

        let result = service(users).login("maria", "not-the-password").await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_unknown_user_fails_like_wrong_password() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|_| Ok(None));

        let result = service(users).login("nobody", "Passw0rd!").await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret_is_rejected() {
        let user = stored_user("Passw0rd!", UserRole::User);
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(move |_| Ok(Some(user.clone())));
        let token = service(users).login("maria", "Passw0rd!").await.unwrap();

        let other = Authenticator::new(
            Arc::new(TestUnitOfWork::with_users(MockUserRepository::new())),
            Config::new("sqlite::memory:", "another-secret-that-is-32-chars-long").unwrap(),
        );
        assert!(matches!(
            other.verify_token(&token.access_token),
            Err(AppError::Jwt(_))
        ));
        assert!(other.verify_token("garbage").is_err());
    }

    #[tokio::test]
    async fn test_create_user_rejects_duplicate_username() {
        let existing = stored_user("Passw0rd!", UserRole::User);
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(move |_| Ok(Some(existing.clone())));
        users.expect_create().never();

        let result = service(users)
            .create_user("maria", "Another1!", UserRole::User)
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|_| Ok(None));
        users
            .expect_create()
            .withf(|username, hash, role| {
                username == "ivan" && hash.starts_with("$argon2") && *role == UserRole::Guest
            })
            .returning(|username, password_hash, role| {
                Ok(User {
                    id: 1,
                    username,
                    password_hash,
                    role,
                })
            });

        let user = service(users)
            .create_user("  ivan ", "LongEnough1", UserRole::Guest)
            .await
            .unwrap();
        assert_eq!(user.username, "ivan");
        assert!(Password::from_hash(user.password_hash).verify("LongEnough1"));
    }

    #[tokio::test]
    async fn test_create_user_rejects_short_password() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|_| Ok(None));
        users.expect_create().never();

        let result = service(users)
            .create_user("ivan", "short", UserRole::User)
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
