//! Session resolution boundary.
//!
//! The RBAC core does not issue tokens; it only turns a presented credential
//! into claims. "No session" is `None` in every case (absent, malformed,
//! expired, bad signature) so callers never branch on error detail.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};

use crate::claims::{SessionClaims, validate_claims};

/// Resolves a bearer credential to session claims.
///
/// Implementations must not fail loudly for the "no session" case; absence
/// and invalidity both map to `None`.
pub trait SessionResolver: Send + Sync {
    fn resolve(&self, token: &str) -> Option<SessionClaims>;
}

/// HS256 JWT resolver.
///
/// Time-window validation happens on our own claim fields after decode, so
/// the library's numeric-`exp` handling is bypassed.
pub struct Hs256SessionResolver {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl Hs256SessionResolver {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }
}

impl SessionResolver for Hs256SessionResolver {
    fn resolve(&self, token: &str) -> Option<SessionClaims> {
        let data = jsonwebtoken::decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "token failed signature/shape validation");
            })
            .ok()?;

        match validate_claims(&data.claims, Utc::now()) {
            Ok(()) => Some(data.claims),
            Err(e) => {
                tracing::debug!(error = %e, "token claims outside validity window");
                None
            }
        }
    }
}
