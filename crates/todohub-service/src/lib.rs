//! # todohub-service
//!
//! Business logic service layer for TodoHub. Each service orchestrates
//! repositories, the token service, and the permission policy to implement
//! one group of use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod account;
pub mod context;
pub mod todo;
pub mod user;

pub use account::AccountService;
pub use context::RequestContext;
pub use todo::TodoService;
pub use user::AdminUserService;

#[cfg(test)]
mod test_support;
