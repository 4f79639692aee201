//! User repository implementation.

use sqlx::SqlitePool;

use todohub_core::error::{AppError, ErrorKind};
use todohub_core::result::AppResult;
use todohub_core::types::PublicId;
use todohub_entity::user::{NewUser, UpdateUser, User};

const USER_COLUMNS: &str = "id, public_id, name, password_hash, admin";

/// Message for a name that is already registered.
pub const USER_EXISTS: &str = "User already exists!";

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a user by public id.
    pub async fn find_by_public_id(&self, public_id: &PublicId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE public_id = ?"
        ))
        .bind(public_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find user by public id", e)
        })
    }

    /// Find a user by exact login name.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE name = ?"))
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by name", e)
            })
    }

    /// List every user in registration order.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    /// Insert a new user.
    ///
    /// The insert and the first-admin claim run in one transaction. The
    /// `admin_claim` table accepts a single row, so among any number of
    /// concurrent registrations exactly one observes `rows_affected == 1`
    /// and is stored with `admin = 1`.
    pub async fn create(&self, data: &NewUser) -> AppResult<User> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (public_id, name, password_hash, admin) VALUES (?, ?, ?, 0) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(data.public_id)
        .bind(&data.name)
        .bind(&data.password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| write_error(e, "Failed to create user"))?;

        let claimed = sqlx::query(
            "INSERT INTO admin_claim (id, user_id) VALUES (1, ?) ON CONFLICT (id) DO NOTHING",
        )
        .bind(user.id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to claim admin", e))?
        .rows_affected()
            == 1;

        let user = if claimed {
            sqlx::query_as::<_, User>(&format!(
                "UPDATE users SET admin = 1 WHERE id = ? RETURNING {USER_COLUMNS}"
            ))
            .bind(user.id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to grant first admin", e)
            })?
        } else {
            user
        };

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit user creation", e)
        })?;

        Ok(user)
    }

    /// Grant admin to a user. Returns `false` if no such user exists.
    pub async fn promote(&self, public_id: &PublicId) -> AppResult<bool> {
        let result = sqlx::query("UPDATE users SET admin = 1 WHERE public_id = ?")
            .bind(public_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to promote user", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace a user's name and password hash.
    pub async fn update(&self, public_id: &PublicId, data: &UpdateUser) -> AppResult<bool> {
        let result = sqlx::query("UPDATE users SET name = ?, password_hash = ? WHERE public_id = ?")
            .bind(&data.name)
            .bind(&data.password_hash)
            .bind(public_id)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(e, "Failed to update user"))?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a user. Their todos are removed by the foreign key cascade.
    pub async fn delete(&self, public_id: &PublicId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE public_id = ?")
            .bind(public_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;
        Ok(result.rows_affected() > 0)
    }
}

/// Map a write failure, turning a name collision into a conflict.
fn write_error(e: sqlx::Error, context: &'static str) -> AppError {
    let is_conflict = matches!(&e, sqlx::Error::Database(db_err) if db_err.is_unique_violation());
    if is_conflict {
        AppError::conflict(USER_EXISTS)
    } else {
        AppError::with_source(ErrorKind::Database, context, e)
    }
}
