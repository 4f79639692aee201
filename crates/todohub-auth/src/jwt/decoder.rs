//! JWT token validation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use todohub_core::config::AuthConfig;
use todohub_core::error::AppError;

use super::claims::Claims;

/// Message returned for every rejected token, whatever the cause.
pub const INVALID_TOKEN: &str = "Invalid Token!";

/// Validates access tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the injected clock in `decode`.
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.token_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes a token and checks that it is still valid at `now`.
    ///
    /// Malformed, tampered, foreign and expired tokens all produce the same
    /// authentication error. The specific reason is logged at debug level.
    pub fn decode(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AppError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!(reason = ?e.kind(), "Token rejected");
                AppError::authentication(INVALID_TOKEN)
            })?
            .claims;

        if claims.is_expired_at(now) {
            debug!(exp = claims.exp, now = now.timestamp(), "Token rejected: expired");
            return Err(AppError::authentication(INVALID_TOKEN));
        }

        Ok(claims)
    }
}
