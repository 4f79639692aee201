//! # todohub-entity
//!
//! Domain entity models for TodoHub. Every struct in this crate represents
//! a database table row or the payload used to create or update one.
//! Row types additionally derive `sqlx::FromRow`.

pub mod todo;
pub mod user;
