//! Self-service account operations: sign-up and login.

use std::sync::Arc;

use tracing::{debug, info};

use todohub_auth::jwt::{IssuedToken, TokenService};
use todohub_auth::password::{DUMMY_HASH, PasswordHasher};
use todohub_core::error::{AppError, ErrorKind};
use todohub_core::result::AppResult;
use todohub_core::types::PublicId;
use todohub_database::repositories::UserRepository;
use todohub_entity::user::{NewUser, User};

/// Message returned for every failed login.
pub const COULD_NOT_VERIFY: &str = "Could not verify!";

/// Handles registration and credential login.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token service.
    tokens: Arc<TokenService>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            tokens,
        }
    }

    /// Registers a new user.
    ///
    /// The first account ever registered is made admin by the store.
    pub async fn register(&self, name: &str, password: &str) -> AppResult<User> {
        if name.is_empty() || password.is_empty() {
            return Err(AppError::validation("Name and password are required"));
        }

        let password_hash = hash_blocking(self.hasher.clone(), password.to_string()).await?;

        let user = self
            .user_repo
            .create(&NewUser {
                public_id: PublicId::new(),
                name: name.to_string(),
                password_hash,
            })
            .await?;

        info!(
            public_id = %user.public_id,
            name = %user.name,
            admin = user.admin,
            "User registered"
        );

        Ok(user)
    }

    /// Exchanges a name and password for an access token.
    ///
    /// Unknown names are verified against [`DUMMY_HASH`] so both failure
    /// paths take the same time and return the same error.
    pub async fn login(&self, name: &str, password: &str) -> AppResult<IssuedToken> {
        let user = self.user_repo.find_by_name(name).await?;

        let stored_hash = user
            .as_ref()
            .map(|u| u.password_hash.clone())
            .unwrap_or_else(|| DUMMY_HASH.to_string());
        let matches =
            verify_blocking(self.hasher.clone(), password.to_string(), stored_hash).await?;

        match user {
            Some(user) if matches => {
                let issued = self.tokens.issue(user.public_id)?;
                info!(public_id = %user.public_id, "User logged in");
                Ok(issued)
            }
            Some(_) => {
                debug!(name = %name, "Login rejected: wrong password");
                Err(AppError::authentication(COULD_NOT_VERIFY))
            }
            None => {
                debug!(name = %name, "Login rejected: unknown user");
                Err(AppError::authentication(COULD_NOT_VERIFY))
            }
        }
    }
}

/// Hashes a password on the blocking pool.
pub(crate) async fn hash_blocking(
    hasher: Arc<PasswordHasher>,
    password: String,
) -> AppResult<String> {
    tokio::task::spawn_blocking(move || hasher.hash_password(&password))
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Password hashing task failed", e))?
}

/// Verifies a password on the blocking pool.
pub(crate) async fn verify_blocking(
    hasher: Arc<PasswordHasher>,
    password: String,
    hash: String,
) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash))
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Internal, "Password verification task failed", e)
        })?
}
