//! Todo entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single to-do item owned by one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Todo {
    /// Row id, exposed in todo URLs.
    pub id: i64,
    /// Free-text description.
    pub item: String,
    /// Whether the item has been marked complete.
    pub complete: bool,
    /// Internal id of the owning user.
    #[serde(skip_serializing)]
    pub user_id: i64,
}

impl Todo {
    /// Whether the given internal user id owns this todo.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

/// Data required to create a todo.
#[derive(Debug, Clone)]
pub struct NewTodo {
    /// Free-text description.
    pub item: String,
    /// Internal id of the creating user.
    pub user_id: i64,
}
