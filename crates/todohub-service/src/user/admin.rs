//! Admin user management: listing, lookup, promotion, credential reset, deletion.

use std::sync::Arc;

use tracing::info;

use todohub_auth::password::PasswordHasher;
use todohub_auth::policy::PolicyEnforcer;
use todohub_core::error::AppError;
use todohub_core::result::AppResult;
use todohub_core::types::PublicId;
use todohub_database::repositories::UserRepository;
use todohub_entity::user::{UpdateUser, User};

use crate::account::hash_blocking;
use crate::context::RequestContext;

/// Message returned when a public id does not resolve.
pub const USER_NOT_FOUND: &str = "User does not exist!";

/// Handles administrative user management operations.
///
/// Every method checks the caller's admin flag before looking anything up.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Permission policy.
    policy: Arc<PolicyEnforcer>,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        policy: Arc<PolicyEnforcer>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            policy,
        }
    }

    /// Lists all users.
    pub async fn list_users(&self, ctx: &RequestContext) -> AppResult<Vec<User>> {
        self.policy.require_admin(&ctx.user)?;
        self.user_repo.find_all().await
    }

    /// Gets a single user by public id.
    pub async fn get_user(&self, ctx: &RequestContext, raw_id: &str) -> AppResult<User> {
        self.policy.require_admin(&ctx.user)?;
        self.find_existing(raw_id).await
    }

    /// Grants admin to a user. Promoting an admin is a no-op success.
    pub async fn promote_user(&self, ctx: &RequestContext, raw_id: &str) -> AppResult<()> {
        self.policy.require_admin(&ctx.user)?;
        let target = self.find_existing(raw_id).await?;

        if !self.user_repo.promote(&target.public_id).await? {
            return Err(AppError::not_found(USER_NOT_FOUND));
        }

        info!(
            admin = %ctx.public_id(),
            target = %target.public_id,
            "User promoted to admin"
        );
        Ok(())
    }

    /// Replaces a user's name and password.
    pub async fn update_user(
        &self,
        ctx: &RequestContext,
        raw_id: &str,
        name: &str,
        password: &str,
    ) -> AppResult<()> {
        self.policy.require_admin(&ctx.user)?;
        let target = self.find_existing(raw_id).await?;

        if name.is_empty() || password.is_empty() {
            return Err(AppError::validation("Name and password are required"));
        }

        let password_hash = hash_blocking(self.hasher.clone(), password.to_string()).await?;
        let changes = UpdateUser {
            name: name.to_string(),
            password_hash,
        };

        if !self.user_repo.update(&target.public_id, &changes).await? {
            return Err(AppError::not_found(USER_NOT_FOUND));
        }

        info!(
            admin = %ctx.public_id(),
            target = %target.public_id,
            "User credentials updated"
        );
        Ok(())
    }

    /// Deletes a user along with their todos.
    pub async fn delete_user(&self, ctx: &RequestContext, raw_id: &str) -> AppResult<()> {
        self.policy.require_admin(&ctx.user)?;
        let target = self.find_existing(raw_id).await?;

        if !self.user_repo.delete(&target.public_id).await? {
            return Err(AppError::not_found(USER_NOT_FOUND));
        }

        info!(
            admin = %ctx.public_id(),
            target = %target.public_id,
            "User deleted"
        );
        Ok(())
    }

    async fn find_existing(&self, raw_id: &str) -> AppResult<User> {
        let public_id: PublicId = raw_id
            .parse()
            .map_err(|_| AppError::not_found(USER_NOT_FOUND))?;

        self.user_repo
            .find_by_public_id(&public_id)
            .await?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))
    }
}
