//! Account handlers: sign-up and login.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::SignUpRequest;
use crate::dto::response::{MessageResponse, TokenResponse};
use crate::error::ApiResult;
use crate::extractors::{BasicCredentials, ValidatedJson};
use crate::state::AppState;

/// POST /api/sign-up
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignUpRequest>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .account_service
        .register(&req.name, &req.password)
        .await?;

    Ok(Json(MessageResponse::new("New user has been created!")))
}

/// GET /api/login
pub async fn login(
    State(state): State<AppState>,
    credentials: BasicCredentials,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    let issued = state
        .account_service
        .login(&credentials.name, &credentials.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            token: issued.token,
        }),
    ))
}
