//! Response DTOs.
//!
//! These are the only shapes the API emits. User views never carry the
//! internal id or the password hash.

use serde::{Deserialize, Serialize};

use todohub_core::types::PublicId;
use todohub_entity::todo::Todo;
use todohub_entity::user::User;

/// Plain message body used by mutations and soft errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message body.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Access token for the `x-access-token` header.
    pub token: String,
}

/// Todo projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoView {
    /// Todo id.
    pub id: i64,
    /// Todo text.
    pub item: String,
    /// Completion flag.
    pub complete: bool,
}

impl From<Todo> for TodoView {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            item: todo.item,
            complete: todo.complete,
        }
    }
}

/// `GET /todo` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoListResponse {
    /// The caller's todos, ascending by id.
    pub todos: Vec<TodoView>,
}

/// `GET /todo/{id}` body. The single todo is wrapped in a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleTodoResponse {
    /// One-element list.
    pub todo: Vec<TodoView>,
}

/// User projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserView {
    /// Public id.
    pub public_id: PublicId,
    /// Login name.
    pub name: String,
    /// Admin flag.
    pub admin: bool,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            public_id: user.public_id,
            name: user.name,
            admin: user.admin,
        }
    }
}

/// `GET /user` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    /// All users, in registration order.
    pub users: Vec<UserView>,
}

/// `GET /user/{public_id}` body. The single user is wrapped in a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleUserResponse {
    /// One-element list.
    pub user: Vec<UserView>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` when every dependency answers, otherwise `degraded`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// `connected` or `unavailable`.
    pub database: String,
}
