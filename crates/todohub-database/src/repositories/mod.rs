//! Repository implementations for all TodoHub entities.

pub mod todo;
pub mod user;

pub use todo::TodoRepository;
pub use user::UserRepository;
