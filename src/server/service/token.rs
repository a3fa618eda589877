//! Signed access tokens.
//!
//! Tokens are HS256 JWTs carrying the account email as subject plus issue and expiry
//! timestamps. Nothing is persisted: a token is accepted purely on its signature and
//! expiry, so logging out cannot revoke one before it expires.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    config::Config,
    error::{auth::AuthError, config::ConfigError},
    model::user::User,
};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Account email.
    sub: String,
    iat: i64,
    exp: i64,
}

/// Issues and verifies access tokens with a server-held secret.
///
/// Cloned into every request through `AppState`; keys are rebuilt from the secret on
/// each call.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let ttl = Duration::try_seconds(config.jwt_ttl_seconds).ok_or_else(|| {
            ConfigError::InvalidValue {
                name: "JWT_TTL_SECONDS".to_string(),
                reason: "out of range".to_string(),
            }
        })?;

        Ok(Self::new(config.jwt_secret.clone(), ttl))
    }

    #[cfg(test)]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issues a token for the user valid from now until now + TTL.
    pub fn issue(&self, user: &User) -> Result<String, AuthError> {
        self.issue_at(&user.email, Utc::now())
    }

    /// Issues a token for `subject` as if the clock read `now`.
    ///
    /// # Returns
    /// - `Ok(String)` - Compact JWS
    /// - `Err(AuthError::TokenEncoding)` - Expiry is not representable or signing failed
    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> Result<String, AuthError> {
        let expires_at = now.checked_add_signed(self.ttl).ok_or_else(|| {
            AuthError::TokenEncoding(format!("expiry {} after {} is out of range", self.ttl, now))
        })?;
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenEncoding(e.to_string()))
    }

    /// Returns the email a token was issued for.
    ///
    /// Only the signature and shape are checked here; expiry is not.
    ///
    /// # Returns
    /// - `Ok(String)` - Subject email
    /// - `Err(AuthError::InvalidToken)` - Token is malformed or its signature does not verify
    pub fn subject(&self, token: &str) -> Result<String, AuthError> {
        Ok(self.claims(token)?.sub)
    }

    /// True iff the signature verifies, the token has not expired and its subject is
    /// `expected_subject`.
    pub fn is_valid(&self, token: &str, expected_subject: &str) -> bool {
        self.is_valid_at(token, expected_subject, Utc::now())
    }

    /// Same as [`TokenService::is_valid`] against an explicit clock. A token is expired
    /// from its `exp` second onwards.
    pub fn is_valid_at(&self, token: &str, expected_subject: &str, now: DateTime<Utc>) -> bool {
        match self.claims(token) {
            Ok(claims) => claims.sub == expected_subject && now.timestamp() < claims.exp,
            Err(_) => false,
        }
    }

    fn claims(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["sub", "exp"]);

        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(data.claims)
    }
}
