//! Request context carrying the authenticated user.

use todohub_core::types::PublicId;
use todohub_entity::user::User;

/// Context for the current authenticated request.
///
/// Built by the auth middleware once the gate has resolved the token, and
/// passed into service methods so that every operation knows who is acting.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The authenticated user, as stored when the request arrived.
    pub user: User,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user: User) -> Self {
        Self { user }
    }

    /// Internal id of the caller.
    pub fn user_id(&self) -> i64 {
        self.user.id
    }

    /// Public id of the caller.
    pub fn public_id(&self) -> PublicId {
        self.user.public_id
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.user.is_admin()
    }
}
