//! Todo management for the owning user.

pub mod service;

pub use service::TodoService;
