//! Todo operations scoped to the owning user.

use std::sync::Arc;

use tracing::info;

use todohub_auth::policy::PolicyEnforcer;
use todohub_core::error::AppError;
use todohub_core::result::AppResult;
use todohub_database::repositories::TodoRepository;
use todohub_entity::todo::{NewTodo, Todo};

use crate::context::RequestContext;

/// Message returned when a todo id does not resolve.
pub const TODO_NOT_FOUND: &str = "Todo does not exist!";

/// Handles todo CRUD for the authenticated caller.
#[derive(Debug, Clone)]
pub struct TodoService {
    /// Todo repository.
    todo_repo: Arc<TodoRepository>,
    /// Permission policy.
    policy: Arc<PolicyEnforcer>,
}

impl TodoService {
    /// Creates a new todo service.
    pub fn new(todo_repo: Arc<TodoRepository>, policy: Arc<PolicyEnforcer>) -> Self {
        Self { todo_repo, policy }
    }

    /// Lists the caller's todos in creation order.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<Todo>> {
        self.todo_repo.find_by_owner(ctx.user_id()).await
    }

    /// Gets one of the caller's todos.
    pub async fn get(&self, ctx: &RequestContext, raw_id: &str) -> AppResult<Todo> {
        self.find_owned(ctx, raw_id).await
    }

    /// Creates a new incomplete todo owned by the caller.
    pub async fn create(&self, ctx: &RequestContext, item: &str) -> AppResult<Todo> {
        if item.is_empty() {
            return Err(AppError::validation("Item is required"));
        }

        let todo = self
            .todo_repo
            .create(&NewTodo {
                item: item.to_string(),
                user_id: ctx.user_id(),
            })
            .await?;

        info!(todo_id = todo.id, owner = %ctx.public_id(), "Todo created");
        Ok(todo)
    }

    /// Marks one of the caller's todos complete.
    pub async fn complete(&self, ctx: &RequestContext, raw_id: &str) -> AppResult<()> {
        let todo = self.find_owned(ctx, raw_id).await?;
        if !self.todo_repo.mark_complete(todo.id).await? {
            return Err(AppError::not_found(TODO_NOT_FOUND));
        }
        info!(todo_id = todo.id, owner = %ctx.public_id(), "Todo completed");
        Ok(())
    }

    /// Deletes one of the caller's todos.
    pub async fn delete(&self, ctx: &RequestContext, raw_id: &str) -> AppResult<()> {
        let todo = self.find_owned(ctx, raw_id).await?;
        if !self.todo_repo.delete(todo.id).await? {
            return Err(AppError::not_found(TODO_NOT_FOUND));
        }
        info!(todo_id = todo.id, owner = %ctx.public_id(), "Todo deleted");
        Ok(())
    }

    /// Resolves a path id to a todo the caller owns.
    ///
    /// Existence is checked before ownership, so another user's todo yields
    /// a permission error while a missing one yields not-found.
    async fn find_owned(&self, ctx: &RequestContext, raw_id: &str) -> AppResult<Todo> {
        let id: i64 = raw_id
            .parse()
            .map_err(|_| AppError::not_found(TODO_NOT_FOUND))?;

        let todo = self
            .todo_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(TODO_NOT_FOUND))?;

        self.policy.require_owner(&ctx.user, &todo)?;
        Ok(todo)
    }
}
