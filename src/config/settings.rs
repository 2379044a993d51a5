//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_JWT_EXPIRATION_HOURS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    MAX_JWT_EXPIRATION_HOURS, MIN_JWT_SECRET_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    jwt_secret: String,
    jwt_expiration_hours: i64,
    pub server_host: String,
    pub server_port: u16,
    /// Mark the session cookie `Secure` (only sent over HTTPS)
    pub session_cookie_secure: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiration_hours", &self.jwt_expiration_hours)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("session_cookie_secure", &self.session_cookie_secure)
            .finish()
    }
}

impl Config {
    /// Build a configuration with defaults for everything but the
    /// database URL and signing secret.
    ///
    /// # Errors
    /// Returns an internal error if the secret is shorter than
    /// `MIN_JWT_SECRET_LENGTH`.
    pub fn new(database_url: impl Into<String>, jwt_secret: impl Into<String>) -> AppResult<Self> {
        let jwt_secret = jwt_secret.into();
        Self::check_secret(&jwt_secret)?;

        Ok(Self {
            database_url: database_url.into(),
            jwt_secret,
            jwt_expiration_hours: DEFAULT_JWT_EXPIRATION_HOURS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            session_cookie_secure: false,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Fails if JWT_SECRET is missing in a release build or is too short,
    /// or if JWT_EXPIRATION_HOURS is not a whole number of hours between 1
    /// and `MAX_JWT_EXPIRATION_HOURS`.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                "dev-secret-key-minimum-32-chars!!".to_string()
            }
            Err(_) => {
                return Err(AppError::internal(
                    "JWT_SECRET environment variable must be set in production",
                ))
            }
        };

        let mut config = Self::new(
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
        )?;

        if let Ok(hours) = env::var("JWT_EXPIRATION_HOURS") {
            let hours = hours.trim().parse().map_err(|_| {
                AppError::internal(format!(
                    "JWT_EXPIRATION_HOURS must be a whole number, got {:?}",
                    hours
                ))
            })?;
            config = config.with_expiration_hours(hours)?;
        }
        config.server_host =
            env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string());
        config.server_port = env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SERVER_PORT);
        config.session_cookie_secure = env::var("SESSION_COOKIE_SECURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        Ok(config)
    }

    /// Replace the session lifetime.
    ///
    /// # Errors
    /// Returns an internal error unless `hours` is between 1 and
    /// `MAX_JWT_EXPIRATION_HOURS`.
    pub fn with_expiration_hours(mut self, hours: i64) -> AppResult<Self> {
        if !(1..=MAX_JWT_EXPIRATION_HOURS).contains(&hours) {
            return Err(AppError::internal(format!(
                "JWT_EXPIRATION_HOURS must be between 1 and {}, got {}",
                MAX_JWT_EXPIRATION_HOURS, hours
            )));
        }
        self.jwt_expiration_hours = hours;
        Ok(self)
    }

    fn check_secret(secret: &str) -> AppResult<()> {
        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::internal(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            )));
        }
        Ok(())
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Session lifetime in hours.
    pub fn jwt_expiration_hours(&self) -> i64 {
        self.jwt_expiration_hours
    }

    /// Session lifetime in seconds.
    pub fn session_ttl_seconds(&self) -> i64 {
        self.jwt_expiration_hours * super::constants::SECONDS_PER_HOUR
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
