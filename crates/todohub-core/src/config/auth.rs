//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Placeholder secret shipped in the defaults.
pub const DEFAULT_TOKEN_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Longest accepted token lifetime: one year.
pub const MAX_TOKEN_TTL_MINUTES: u64 = 60 * 24 * 365;

/// Token signing and transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Server-wide secret key for token signing (HMAC-SHA256).
    #[serde(default = "default_token_secret")]
    pub token_secret: String,
    /// Token lifetime in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
    /// Request header carrying the access token.
    #[serde(default = "default_token_header")]
    pub token_header: String,
}

impl AuthConfig {
    /// Whether the placeholder secret is still configured.
    pub fn uses_default_secret(&self) -> bool {
        self.token_secret == DEFAULT_TOKEN_SECRET
    }

    /// Rejects settings the token service cannot work with.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(1..=MAX_TOKEN_TTL_MINUTES).contains(&self.token_ttl_minutes) {
            return Err(AppError::configuration(format!(
                "auth.token_ttl_minutes must be between 1 and {MAX_TOKEN_TTL_MINUTES}, got {}",
                self.token_ttl_minutes
            )));
        }
        if self.token_secret.is_empty() {
            return Err(AppError::configuration("auth.token_secret must not be empty"));
        }
        if self.token_header.is_empty() {
            return Err(AppError::configuration("auth.token_header must not be empty"));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: default_token_secret(),
            token_ttl_minutes: default_token_ttl(),
            token_header: default_token_header(),
        }
    }
}

fn default_token_secret() -> String {
    DEFAULT_TOKEN_SECRET.to_string()
}

fn default_token_ttl() -> u64 {
    30
}

fn default_token_header() -> String {
    "x-access-token".to_string()
}
