//! Password hashing.

pub mod hasher;

pub use hasher::{DUMMY_HASH, PasswordHasher};
