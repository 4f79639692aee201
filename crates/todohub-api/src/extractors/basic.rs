//! HTTP Basic credentials for the login route.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use todohub_core::error::AppError;
use todohub_service::account::COULD_NOT_VERIFY;

use crate::error::ApiError;

/// Name and password decoded from an `Authorization: Basic` header.
#[derive(Clone)]
pub struct BasicCredentials {
    /// Login name.
    pub name: String,
    /// Plaintext password.
    pub password: String,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Decodes Basic credentials from request headers.
///
/// Returns `None` if the header is absent, not Basic, not valid base64 or
/// UTF-8, lacks the `:` separator, or carries an empty name or password.
pub fn parse_basic_credentials(headers: &HeaderMap) -> Option<BasicCredentials> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;

    let (scheme, encoded) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = BASE64.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (name, password) = decoded.split_once(':')?;

    if name.is_empty() || password.is_empty() {
        return None;
    }

    Some(BasicCredentials {
        name: name.to_string(),
        password: password.to_string(),
    })
}

impl<S> FromRequestParts<S> for BasicCredentials
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parse_basic_credentials(&parts.headers)
            .ok_or_else(|| AppError::authentication(COULD_NOT_VERIFY).into())
    }
}
