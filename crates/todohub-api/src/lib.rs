//! # todohub-api
//!
//! HTTP API layer for TodoHub built on Axum.
//!
//! Provides the REST endpoints, the token middleware that runs the auth gate
//! in front of protected routes, extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
