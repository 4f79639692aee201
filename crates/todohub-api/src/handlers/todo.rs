//! Todo handlers. Every route here sits behind the token middleware.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::request::CreateTodoRequest;
use crate::dto::response::{MessageResponse, SingleTodoResponse, TodoListResponse, TodoView};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/todo
pub async fn list_todos(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<TodoListResponse>> {
    let todos = state.todo_service.list(&auth).await?;
    Ok(Json(TodoListResponse {
        todos: todos.into_iter().map(TodoView::from).collect(),
    }))
}

/// GET /api/todo/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<SingleTodoResponse>> {
    let todo = state.todo_service.get(&auth, &id).await?;
    Ok(Json(SingleTodoResponse {
        todo: vec![todo.into()],
    }))
}

/// POST /api/todo
pub async fn create_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateTodoRequest>,
) -> ApiResult<Json<MessageResponse>> {
    state.todo_service.create(&auth, &req.item).await?;
    Ok(Json(MessageResponse::new("New todo created!")))
}

/// PUT /api/todo/{id}
pub async fn complete_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.todo_service.complete(&auth, &id).await?;
    Ok(Json(MessageResponse::new(
        "Todo item has been updated as complete!",
    )))
}

/// DELETE /api/todo/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.todo_service.delete(&auth, &id).await?;
    Ok(Json(MessageResponse::new("Todo item deleted!")))
}
