//! Resolves the token presented on a request to the user it names.

use tracing::debug;

use todohub_core::error::AppError;
use todohub_core::result::AppResult;
use todohub_database::repositories::UserRepository;
use todohub_entity::user::User;

use crate::jwt::{INVALID_TOKEN, TokenService};

/// Message returned when a protected route is called without a token.
pub const NO_TOKEN: &str = "No token found!";

/// Authentication gate in front of every protected operation.
#[derive(Debug, Clone)]
pub struct AuthGate {
    tokens: TokenService,
    users: UserRepository,
}

impl AuthGate {
    /// Creates a gate backed by the given token service and user store.
    pub fn new(tokens: TokenService, users: UserRepository) -> Self {
        Self { tokens, users }
    }

    /// Resolves a raw header value to the current user.
    ///
    /// A missing or empty value is `No token found!`. Any token problem, and a
    /// valid token whose user has since been deleted, is `Invalid Token!`.
    pub async fn resolve(&self, token: Option<&str>) -> AppResult<User> {
        let token = match token.map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => return Err(AppError::authentication(NO_TOKEN)),
        };

        let public_id = self.tokens.verify(token)?;

        match self.users.find_by_public_id(&public_id).await? {
            Some(user) => Ok(user),
            None => {
                debug!(public_id = %public_id, "Token names a user that no longer exists");
                Err(AppError::authentication(INVALID_TOKEN))
            }
        }
    }
}
