//! Core type definitions used across the TodoHub workspace.

pub mod id;

pub use id::PublicId;
