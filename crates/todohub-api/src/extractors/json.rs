//! JSON body extractor that also runs `validator` rules.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use todohub_core::error::AppError;

use crate::error::ApiError;

/// A JSON body that deserialized and passed validation.
///
/// Both failures are reported as validation errors (400).
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Json::<T>::from_request(req, state).await;
        Ok(Self(validate_body(body)?))
    }
}

/// Turns an extracted JSON body into a validated value.
///
/// Handlers that must run other checks before looking at the body extract
/// `Result<Json<T>, JsonRejection>` and call this afterwards.
pub fn validate_body<T: Validate>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    let Json(value) = body.map_err(|rejection| AppError::validation(rejection.body_text()))?;

    value
        .validate()
        .map_err(|e| AppError::validation(format!("Invalid request: {e}")))?;

    Ok(value)
}
