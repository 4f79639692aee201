//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use todohub_auth::clock::Clock;
use todohub_auth::gate::AuthGate;
use todohub_auth::jwt::TokenService;
use todohub_auth::password::PasswordHasher;
use todohub_auth::policy::PolicyEnforcer;
use todohub_core::config::AppConfig;
use todohub_core::result::AppResult;
use todohub_database::DatabasePool;
use todohub_database::repositories::{TodoRepository, UserRepository};
use todohub_service::{AccountService, AdminUserService, TodoService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// SQLite connection pool
    pub db: DatabasePool,

    // ── Auth ─────────────────────────────────────────────────
    /// Resolves request tokens to users
    pub auth_gate: Arc<AuthGate>,

    // ── Services ─────────────────────────────────────────────
    /// Sign-up and login
    pub account_service: Arc<AccountService>,
    /// Todo management
    pub todo_service: Arc<TodoService>,
    /// User administration
    pub admin_user_service: Arc<AdminUserService>,
}

impl AppState {
    /// Wires repositories, auth components and services over a connected pool.
    ///
    /// Fails if the auth settings cannot produce a token service.
    pub fn new(config: AppConfig, db: DatabasePool, clock: Arc<dyn Clock>) -> AppResult<Self> {
        let user_repo = Arc::new(UserRepository::new(db.pool().clone()));
        let todo_repo = Arc::new(TodoRepository::new(db.pool().clone()));

        let password_hasher = Arc::new(PasswordHasher::new());
        let policy = Arc::new(PolicyEnforcer::new());
        let token_service = TokenService::new(&config.auth, clock)?;
        let auth_gate = Arc::new(AuthGate::new(
            token_service.clone(),
            user_repo.as_ref().clone(),
        ));

        let account_service = Arc::new(AccountService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::new(token_service),
        ));
        let todo_service = Arc::new(TodoService::new(todo_repo, Arc::clone(&policy)));
        let admin_user_service = Arc::new(AdminUserService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&policy),
        ));

        Ok(Self {
            config: Arc::new(config),
            db,
            auth_gate,
            account_service,
            todo_service,
            admin_user_service,
        })
    }
}
