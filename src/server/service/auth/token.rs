//! HS256 bearer tokens.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, internal::InternalError};

/// Claims carried by every bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// User ID the token was issued to.
    pub sub: i32,
    /// Issued at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Issues and verifies bearer tokens signed with a shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Creates a token service.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret shared by signing and verification
    /// - `ttl` - Lifetime of issued tokens
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Signs a token for `user_id` valid from `now` for the configured lifetime.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(InternalError::TokenSigning)` - Signing failed
    pub fn issue(&self, user_id: i32, now: DateTime<Utc>) -> Result<String, InternalError> {
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|source| InternalError::TokenSigning { user_id, source })
    }

    /// Decodes and validates a token, checking signature and expiry.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Malformed, badly signed or expired token
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(AuthError::InvalidToken)
    }
}
