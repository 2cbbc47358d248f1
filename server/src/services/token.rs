//! Access / refresh token issuance and verification.
//!
//! ARCHITECTURE
//! ============
//! Both token kinds are HS256 JWTs signed with separate secrets, so a refresh
//! token can never pass as an access token or vice versa. Validity is purely a
//! function of signature and `exp`; nothing is stored server-side and there is
//! no revocation list.

use std::time::Duration;

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode, get_current_timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub id: Uuid,
    pub email: String,
    pub iat: u64,
    pub exp: u64,
}

/// Claims carried by a refresh token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub id: Uuid,
    pub iat: u64,
    pub exp: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token encoding failed: {0}")]
    Encode(jsonwebtoken::errors::Error),
    #[error("invalid token: {0}")]
    Invalid(jsonwebtoken::errors::Error),
}

pub struct TokenIssuer {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
    validation: Validation,
}

impl TokenIssuer {
    #[must_use]
    pub fn new(access_secret: &str, refresh_secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        let mut validation = Validation::default();
        validation.leeway = 0;
        Self {
            access_encoding: EncodingKey::from_secret(access_secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(access_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(refresh_secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(refresh_secret.as_bytes()),
            access_ttl,
            refresh_ttl,
            validation,
        }
    }

    #[must_use]
    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }

    /// Sign a short-lived access token for `id` / `email`.
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails.
    pub fn issue_access(&self, id: Uuid, email: &str) -> Result<String, TokenError> {
        let iat = get_current_timestamp();
        let exp = iat.saturating_add(self.access_ttl.as_secs());
        let claims = AccessClaims { id, email: email.to_owned(), iat, exp };
        encode(&Header::default(), &claims, &self.access_encoding).map_err(TokenError::Encode)
    }

    /// Sign a refresh token for `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails.
    pub fn issue_refresh(&self, id: Uuid) -> Result<String, TokenError> {
        let iat = get_current_timestamp();
        let claims = RefreshClaims { id, iat, exp: iat.saturating_add(self.refresh_ttl.as_secs()) };
        encode(&Header::default(), &claims, &self.refresh_encoding).map_err(TokenError::Encode)
    }

    /// Check signature and expiry of an access token.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Invalid`] for bad signatures, malformed input, or expired tokens.
    pub fn verify_access(&self, token: &str) -> Result<AccessClaims, TokenError> {
        decode::<AccessClaims>(token, &self.access_decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(TokenError::Invalid)
    }

    /// Check signature and expiry of a refresh token.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Invalid`] for bad signatures, malformed input, or expired tokens.
    pub fn verify_refresh(&self, token: &str) -> Result<RefreshClaims, TokenError> {
        decode::<RefreshClaims>(token, &self.refresh_decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(TokenError::Invalid)
    }
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
