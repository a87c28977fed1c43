//! Session Tokens
//!
//! Stateless bearer credentials: a base64url JSON claims segment signed
//! with HMAC-SHA256. No server-side session table; expiry and integrity
//! are carried by the token itself.

use std::time::Duration;

use chrono::Utc;
use hmac::{Hmac, Mac};
use platform::crypto::{from_base64url, to_base64url};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use uuid::Uuid;

use crate::application::config::IdentityConfig;
use crate::error::{IdentityError, IdentityResult};

/// Claims embedded in a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the user id
    #[serde(rename = "sub")]
    pub user_id: Uuid,
    /// The phone handle at issue time
    #[serde(rename = "tel")]
    pub phone: String,
    /// Expiry as unix seconds
    pub exp: i64,
}

/// Issues and verifies signed session tokens
pub struct SessionSigner {
    secret: [u8; 32],
    ttl: Duration,
}

impl SessionSigner {
    pub fn new(secret: [u8; 32], ttl: Duration) -> Self {
        Self { secret, ttl }
    }

    pub fn from_config(config: &IdentityConfig) -> Self {
        Self::new(config.token_secret, config.token_ttl)
    }

    /// Issue a token for a user, expiring after the configured TTL
    pub fn issue(&self, user_id: Uuid, phone: &str) -> IdentityResult<String> {
        let exp = Utc::now().timestamp() + self.ttl.as_secs() as i64;
        self.issue_with_expiry(user_id, phone, exp)
    }

    /// Issue a token with an explicit expiry timestamp
    pub(crate) fn issue_with_expiry(
        &self,
        user_id: Uuid,
        phone: &str,
        exp: i64,
    ) -> IdentityResult<String> {
        let claims = SessionClaims {
            user_id,
            phone: phone.to_string(),
            exp,
        };

        let payload = serde_json::to_vec(&claims)
            .map_err(|e| IdentityError::Internal(format!("Claims serialization: {}", e)))?;
        let payload_b64 = to_base64url(&payload);

        let signature = self.mac(payload_b64.as_bytes());
        let signature_b64 = to_base64url(&signature);

        Ok(format!("{}.{}", payload_b64, signature_b64))
    }

    /// Verify signature and expiry, returning the embedded claims
    pub fn verify(&self, token: &str) -> IdentityResult<SessionClaims> {
        let (payload_b64, signature_b64) =
            token.split_once('.').ok_or(IdentityError::TokenInvalid)?;

        let signature = from_base64url(signature_b64).map_err(|_| IdentityError::TokenInvalid)?;
        let expected = self.mac(payload_b64.as_bytes());

        if !platform::crypto::constant_time_eq(&signature, &expected) {
            return Err(IdentityError::TokenInvalid);
        }

        let payload = from_base64url(payload_b64).map_err(|_| IdentityError::TokenInvalid)?;
        let claims: SessionClaims =
            serde_json::from_slice(&payload).map_err(|_| IdentityError::TokenInvalid)?;

        if claims.exp <= Utc::now().timestamp() {
            return Err(IdentityError::TokenInvalid);
        }

        Ok(claims)
    }

    fn mac(&self, data: &[u8]) -> [u8; 32] {
        let mut mac =
            Hmac::<Sha256>::new_from_slice(&self.secret).expect("HMAC can take key of any size");
        mac.update(data);
        mac.finalize().into_bytes().into()
    }
}
