//! Request DTOs with validation.

use serde::Deserialize;
use validator::Validate;

/// Sign-up request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignUpRequest {
    /// Desired login name.
    #[validate(length(min = 1, max = 50, message = "Name must be 1 to 50 characters"))]
    pub name: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create todo request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTodoRequest {
    /// Todo text.
    #[validate(length(min = 1, max = 50, message = "Item must be 1 to 50 characters"))]
    pub item: String,
}

/// Admin credential reset request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// New login name.
    #[validate(length(min = 1, max = 50, message = "Name must be 1 to 50 characters"))]
    pub name: String,
    /// New password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
