//! JWT token encoding, decoding, and the token service built on them.

pub mod claims;
pub mod decoder;
pub mod encoder;

use std::sync::Arc;

use todohub_core::config::AuthConfig;
use todohub_core::result::AppResult;
use todohub_core::types::PublicId;

use crate::clock::Clock;

pub use claims::Claims;
pub use decoder::{INVALID_TOKEN, JwtDecoder};
pub use encoder::{IssuedToken, JwtEncoder};

/// Issues and verifies access tokens against a shared clock.
#[derive(Clone)]
pub struct TokenService {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("encoder", &self.encoder)
            .field("decoder", &self.decoder)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Builds a token service from configuration and a time source.
    pub fn new(config: &AuthConfig, clock: Arc<dyn Clock>) -> AppResult<Self> {
        Ok(Self {
            encoder: JwtEncoder::new(config)?,
            decoder: JwtDecoder::new(config),
            clock,
        })
    }

    /// Issues a token for `public_id`, valid from now for one TTL.
    pub fn issue(&self, public_id: PublicId) -> AppResult<IssuedToken> {
        self.encoder.encode(public_id, self.clock.now())
    }

    /// Returns the public id a token was issued to, if the token is valid now.
    pub fn verify(&self, token: &str) -> AppResult<PublicId> {
        self.decoder
            .decode(token, self.clock.now())
            .map(|claims| claims.public_id)
    }
}
