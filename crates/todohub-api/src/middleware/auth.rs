//! Token middleware for protected routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use todohub_service::context::RequestContext;

use crate::error::ApiResult;
use crate::state::AppState;

/// Runs the auth gate on the configured token header.
///
/// On success the resolved user is attached as a [`RequestContext`] request
/// extension for the [`crate::extractors::AuthUser`] extractor. On failure the
/// request never reaches the handler.
pub async fn require_token(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let token = request
        .headers()
        .get(state.config.auth.token_header.as_str())
        .and_then(|v| v.to_str().ok());

    let user = state.auth_gate.resolve(token).await?;
    request.extensions_mut().insert(RequestContext::new(user));

    Ok(next.run(request).await)
}
