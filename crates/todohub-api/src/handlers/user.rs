//! Admin user management handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};

use crate::dto::request::UpdateUserRequest;
use crate::dto::response::{MessageResponse, SingleUserResponse, UserListResponse, UserView};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, validate_body};
use crate::state::AppState;

/// GET /api/user
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserListResponse>> {
    let users = state.admin_user_service.list_users(&auth).await?;
    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserView::from).collect(),
    }))
}

/// GET /api/user/{public_id}
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(public_id): Path<String>,
) -> ApiResult<Json<SingleUserResponse>> {
    let user = state.admin_user_service.get_user(&auth, &public_id).await?;
    Ok(Json(SingleUserResponse {
        user: vec![user.into()],
    }))
}

/// PUT /api/user/{public_id}/promote
pub async fn promote_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(public_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .admin_user_service
        .promote_user(&auth, &public_id)
        .await?;
    Ok(Json(MessageResponse::new("User has been promoted to admin!")))
}

/// PUT /api/user/{public_id}/update
///
/// The body is only examined once the caller is known to be an admin and the
/// target exists, so non-admins get the permission message for any body.
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(public_id): Path<String>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    state.admin_user_service.get_user(&auth, &public_id).await?;
    let req = validate_body(body)?;

    state
        .admin_user_service
        .update_user(&auth, &public_id, &req.name, &req.password)
        .await?;
    Ok(Json(MessageResponse::new("User info has been updated!")))
}

/// DELETE /api/user/{public_id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(public_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .admin_user_service
        .delete_user(&auth, &public_id)
        .await?;
    Ok(Json(MessageResponse::new("User has been deleted!")))
}
