//! Permission policy for admin-only and owner-only operations.

pub mod enforcer;

pub use enforcer::{PERMISSION_DENIED, PolicyEnforcer};
