//! Service wiring over a private in-memory database.

use std::sync::Arc;

use todohub_auth::clock::ManualClock;
use todohub_auth::jwt::TokenService;
use todohub_auth::password::PasswordHasher;
use todohub_auth::policy::PolicyEnforcer;
use todohub_core::config::{AuthConfig, DatabaseConfig};
use todohub_database::migration::run_migrations;
use todohub_database::repositories::{TodoRepository, UserRepository};
use todohub_database::DatabasePool;

use crate::context::RequestContext;
use crate::{AccountService, AdminUserService, TodoService};

pub(crate) struct TestServices {
    pub accounts: AccountService,
    pub todos: TodoService,
    pub admin: AdminUserService,
    pub tokens: Arc<TokenService>,
    pub users: Arc<UserRepository>,
}

impl TestServices {
    pub async fn new() -> Self {
        let db = DatabasePool::connect(&DatabaseConfig::in_memory())
            .await
            .expect("connect");
        run_migrations(db.pool()).await.expect("migrate");
        let pool = db.pool().clone();

        let users = Arc::new(UserRepository::new(pool.clone()));
        let todo_repo = Arc::new(TodoRepository::new(pool));
        let hasher = Arc::new(PasswordHasher::new());
        let policy = Arc::new(PolicyEnforcer::new());
        let tokens = Arc::new(
            TokenService::new(&AuthConfig::default(), Arc::new(ManualClock::default()))
                .expect("token service"),
        );

        Self {
            accounts: AccountService::new(users.clone(), hasher.clone(), tokens.clone()),
            todos: TodoService::new(todo_repo, policy.clone()),
            admin: AdminUserService::new(users.clone(), hasher, policy),
            tokens,
            users,
        }
    }

    /// Registers a user and returns the context they would act under.
    pub async fn sign_up(&self, name: &str) -> RequestContext {
        let user = self
            .accounts
            .register(name, "password")
            .await
            .expect("register");
        RequestContext::new(user)
    }
}
