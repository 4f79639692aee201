//! User entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use todohub_core::types::PublicId;

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Internal row id. Never leaves the service.
    #[serde(skip_serializing)]
    pub id: i64,
    /// Opaque identifier used in URLs and tokens.
    pub public_id: PublicId,
    /// Unique login name.
    pub name: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Whether the user may manage other accounts.
    pub admin: bool,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.admin
    }
}

/// Data required to register a new user.
///
/// The admin flag is not part of the payload: the store decides it while
/// inserting the row.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Freshly generated public id.
    pub public_id: PublicId,
    /// Desired login name.
    pub name: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

/// Replacement credentials applied by an admin.
#[derive(Debug, Clone)]
pub struct UpdateUser {
    /// New login name.
    pub name: String,
    /// New pre-hashed password.
    pub password_hash: String,
}
