//! Admin Gate
//!
//! Admin endpoints are gated by a static shared secret carried in the
//! `x-admin-secret` header. Both sides are reduced to SHA-256 digests
//! before the constant-time comparison, so length never leaks.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use std::sync::Arc;

use identity::IdentityError;
use platform::crypto::{constant_time_eq, sha256};

/// Header carrying the admin shared secret
pub const ADMIN_SECRET_HEADER: &str = "x-admin-secret";

/// Server-configured admin secret, stored as its digest
#[derive(Clone)]
pub struct AdminSecret {
    digest: [u8; 32],
}

impl AdminSecret {
    pub fn new(secret: &str) -> Self {
        Self {
            digest: sha256(secret.as_bytes()),
        }
    }

    /// Constant-time check of a presented secret
    pub fn matches(&self, presented: &str) -> bool {
        constant_time_eq(&self.digest, &sha256(presented.as_bytes()))
    }
}

impl std::fmt::Debug for AdminSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AdminSecret").field(&"[digest]").finish()
    }
}

/// Extractor that admits a request only with the correct admin secret
#[derive(Debug, Clone, Copy)]
pub struct AdminGate;

impl<S> FromRequestParts<S> for AdminGate
where
    Arc<AdminSecret>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = IdentityError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let secret = <Arc<AdminSecret> as FromRef<S>>::from_ref(state);

        let presented = parts
            .headers
            .get(ADMIN_SECRET_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(IdentityError::Forbidden)?;

        if !secret.matches(presented) {
            tracing::warn!("Rejected admin request with bad secret");
            return Err(IdentityError::Forbidden);
        }

        Ok(AdminGate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        let secret = AdminSecret::new("s3cret");
        assert!(secret.matches("s3cret"));
        assert!(!secret.matches("s3cret "));
        assert!(!secret.matches(""));
        assert!(!secret.matches("other"));
    }
}
