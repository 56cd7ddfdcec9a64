// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Job Portal Contributors

//! Signed session token codec.
//!
//! Tokens are HS256 JWTs carrying `{sub, iat, exp}` and nothing else. The
//! symmetric secret is loaded once at startup and held for the lifetime of
//! the process; it is never logged and never embedded in tokens or
//! responses.
//!
//! Verification is pure: the result depends only on the token, the secret
//! and the current time. There is no revocation list, so a token stays
//! valid until its expiry even after logout.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::claims::{Claims, Identity};
use super::error::AuthError;

/// Default session token lifetime: 10 days.
pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 10;

/// Issues and verifies signed session tokens.
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenCodec {
    /// Create a codec from the server secret and a token lifetime.
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Create a codec with the default 10-day lifetime.
    pub fn with_default_ttl(secret: &[u8]) -> Self {
        Self::new(secret, Duration::days(DEFAULT_TOKEN_TTL_DAYS))
    }

    /// Issue a signed token embedding the identity, issued-at and expiry.
    pub fn issue(&self, identity: &Identity) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: identity.email.clone(),
            iat: now,
            exp: now + self.ttl.num_seconds(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|_| AuthError::TokenCreation)
    }

    /// Verify a token and return the embedded identity unchanged.
    ///
    /// Fails with `TokenExpired` past the embedded expiry, `InvalidSignature`
    /// when the signature does not validate against the secret, and
    /// `MalformedToken` when the artifact cannot be parsed.
    pub fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact; cookie lifetime already gives days of slack.
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| Identity::from_claims(data.claims))
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::MalformedToken,
            })
    }
}
