//! # todohub-auth
//!
//! Authentication and authorization for TodoHub.
//!
//! ## Modules
//!
//! - `clock`: injectable time source used for token expiry
//! - `jwt`: signed, expiring access tokens bound to a user's public id
//! - `password`: Argon2id password hashing
//! - `gate`: resolves a presented token to a live user
//! - `policy`: admin and ownership checks

pub mod clock;
pub mod gate;
pub mod jwt;
pub mod password;
pub mod policy;

pub use clock::{Clock, ManualClock, SystemClock};
pub use gate::{AuthGate, NO_TOKEN};
pub use jwt::{Claims, INVALID_TOKEN, IssuedToken, JwtDecoder, JwtEncoder, TokenService};
pub use password::PasswordHasher;
pub use policy::{PERMISSION_DENIED, PolicyEnforcer};
