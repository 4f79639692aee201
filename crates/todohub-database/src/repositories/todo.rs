//! Todo repository implementation.

use sqlx::SqlitePool;

use todohub_core::error::{AppError, ErrorKind};
use todohub_core::result::AppResult;
use todohub_entity::todo::{NewTodo, Todo};

/// Repository for todo items.
#[derive(Debug, Clone)]
pub struct TodoRepository {
    pool: SqlitePool,
}

impl TodoRepository {
    /// Create a new todo repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a todo by id.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Todo>> {
        sqlx::query_as::<_, Todo>("SELECT id, item, complete, user_id FROM todos WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find todo", e))
    }

    /// List the todos owned by a user in creation order.
    pub async fn find_by_owner(&self, user_id: i64) -> AppResult<Vec<Todo>> {
        sqlx::query_as::<_, Todo>(
            "SELECT id, item, complete, user_id FROM todos WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list todos", e))
    }

    /// Insert a new, incomplete todo.
    pub async fn create(&self, data: &NewTodo) -> AppResult<Todo> {
        sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (item, complete, user_id) VALUES (?, 0, ?) \
             RETURNING id, item, complete, user_id",
        )
        .bind(&data.item)
        .bind(data.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create todo", e))
    }

    /// Mark a todo complete. Idempotent; returns `false` if it does not exist.
    pub async fn mark_complete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("UPDATE todos SET complete = 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to complete todo", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a todo. Returns `false` if it does not exist.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete todo", e))?;
        Ok(result.rows_affected() > 0)
    }
}
