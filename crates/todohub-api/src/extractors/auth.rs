//! `AuthUser` extractor: reads the context the token middleware attached.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use todohub_auth::gate::NO_TOKEN;
use todohub_core::error::AppError;
use todohub_service::context::RequestContext;

use crate::error::ApiError;

/// Extracted authenticated user context available in handlers.
///
/// Only valid on routes behind [`crate::middleware::auth::require_token`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::authentication(NO_TOKEN).into())
    }
}
