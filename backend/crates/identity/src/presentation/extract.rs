//! Authentication Extractor
//!
//! Pulls the bearer token out of the Authorization header and verifies
//! it, making the session claims available to any handler that asks.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::session::{SessionClaims, SessionSigner};
use crate::error::IdentityError;

/// The authenticated caller, verified from the Authorization header
#[derive(Debug, Clone)]
pub struct AuthUser(pub SessionClaims);

impl AuthUser {
    /// Enforce that the caller owns the resource it is addressing
    pub fn require_subject(&self, user_id: Uuid) -> Result<(), IdentityError> {
        if self.0.user_id != user_id {
            return Err(IdentityError::Forbidden);
        }
        Ok(())
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    Arc<SessionSigner>: axum::extract::FromRef<S>,
    S: Send + Sync,
{
    type Rejection = IdentityError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let signer = <Arc<SessionSigner> as axum::extract::FromRef<S>>::from_ref(state);

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(IdentityError::TokenMissing)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(IdentityError::TokenMissing)?;

        let claims = signer.verify(token)?;
        Ok(AuthUser(claims))
    }
}
