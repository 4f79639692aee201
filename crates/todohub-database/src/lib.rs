//! # todohub-database
//!
//! SQLite connection management, embedded migrations, and concrete
//! repository implementations for TodoHub entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{TodoRepository, UserRepository};
