//! Permission checks for admin-only and owner-only operations.

use todohub_core::error::AppError;
use todohub_entity::todo::Todo;
use todohub_entity::user::User;

/// Message returned whenever the policy denies an action.
pub const PERMISSION_DENIED: &str = "You don't have permission to perform that function!";

/// Enforces the two access rules of the service.
///
/// Admins manage accounts but have no special access to other users'
/// todos. Todos are visible to and mutable by their owner only.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyEnforcer;

impl PolicyEnforcer {
    /// Creates a new enforcer.
    pub fn new() -> Self {
        Self
    }

    /// Allows the action only if `caller` is an admin.
    pub fn require_admin(&self, caller: &User) -> Result<(), AppError> {
        if caller.is_admin() {
            Ok(())
        } else {
            Err(AppError::authorization(PERMISSION_DENIED))
        }
    }

    /// Allows the action only if `caller` owns `todo`.
    pub fn require_owner(&self, caller: &User, todo: &Todo) -> Result<(), AppError> {
        if todo.is_owned_by(caller.id) {
            Ok(())
        } else {
            Err(AppError::authorization(PERMISSION_DENIED))
        }
    }
}
