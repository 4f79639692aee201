//! Route definitions for the TodoHub HTTP API.
//!
//! All routes are mounted under the configured API prefix (`/api` by
//! default). Todo and user routes are wrapped by the token middleware via
//! `route_layer`, so unmatched paths still fall through to a plain 404.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and the token middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .merge(todo_routes())
        .merge(user_routes())
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_token,
        ));

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(health_routes())
        .merge(protected);

    let prefix = state.config.server.api_prefix.trim_end_matches('/');
    let router = if prefix.is_empty() {
        Router::new().merge(api_routes)
    } else {
        Router::new().nest(prefix, api_routes)
    };

    router.with_state(state)
}

/// Sign-up and login
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/sign-up", post(handlers::auth::sign_up))
        .route("/login", get(handlers::auth::login))
}

/// Todo CRUD for the caller
fn todo_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/todo",
            get(handlers::todo::list_todos).post(handlers::todo::create_todo),
        )
        .route(
            "/todo/{id}",
            get(handlers::todo::get_todo)
                .put(handlers::todo::complete_todo)
                .delete(handlers::todo::delete_todo),
        )
}

/// Admin user management
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(handlers::user::list_users))
        .route(
            "/user/{public_id}",
            get(handlers::user::get_user).delete(handlers::user::delete_user),
        )
        .route(
            "/user/{public_id}/promote",
            put(handlers::user::promote_user),
        )
        .route("/user/{public_id}/update", put(handlers::user::update_user))
}

/// Liveness and database connectivity
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
