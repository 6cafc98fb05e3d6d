//! Token verification and claims extraction.
//!
//! This module provides the core JWT verification logic, including signature
//! verification, expiry checking, and claims extraction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use tendera_core::{Role, UserId};

use crate::error::{AuthError, Result};
use crate::AuthConfig;

/// Verified claims extracted from an access token.
#[derive(Debug, Clone)]
pub struct VerifiedClaims {
    /// The user ID extracted from the `user_id` claim.
    pub user_id: UserId,
    /// The role extracted from the `role` claim.
    pub role: Role,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
}

/// Trait for verifying bearer tokens.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify a token and extract its claims.
    ///
    /// The token is the bare JWT, with any `Bearer ` prefix already stripped
    /// by the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is expired, malformed, or its signature
    /// does not verify.
    async fn verify(&self, token: &str) -> Result<VerifiedClaims>;
}

/// Raw claims from a token before validation.
#[derive(Debug, Deserialize)]
struct RawClaims {
    /// Subject identity.
    user_id: i64,
    /// Role within the tender system.
    role: Role,
    /// Expiration timestamp (validated by jsonwebtoken).
    exp: u64,
}

/// Shared-secret HS256 token verifier.
///
/// Tokens are issued by the auth service with the same secret; the gateway
/// verifies them statelessly, without calling the auth service per request.
pub struct HsTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl HsTokenVerifier {
    /// Create a new verifier from the given configuration.
    #[must_use]
    pub fn new(config: AuthConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);
        validation.validate_exp = true;
        // Expired means expired; no grace window.
        validation.leeway = 0;

        Self {
            decoding_key,
            validation,
        }
    }
}

#[async_trait]
impl TokenVerifier for HsTokenVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedClaims> {
        let token_data = decode::<RawClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::InvalidToken(e.to_string()),
            })?;

        let claims = token_data.claims;

        // Convert expiration timestamp
        let exp_secs = i64::try_from(claims.exp).unwrap_or(i64::MAX);
        let expires_at = DateTime::from_timestamp(exp_secs, 0)
            .ok_or_else(|| AuthError::InvalidToken("invalid exp timestamp".to_string()))?;

        Ok(VerifiedClaims {
            user_id: UserId::new(claims.user_id),
            role: claims.role,
            expires_at,
        })
    }
}

/// Sign a token for use in tests.
///
/// Produces a real HS256 JWT carrying the given identity; pass a negative
/// `expires_in` to mint an already-expired token.
///
/// # Panics
///
/// Panics if token encoding fails, which cannot happen for HS256.
#[cfg(any(test, feature = "test-utils"))]
#[must_use]
pub fn issue_token(secret: &str, user_id: i64, role: Role, expires_in: chrono::Duration) -> String {
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct IssuedClaims {
        user_id: i64,
        role: Role,
        exp: i64,
    }

    let claims = IssuedClaims {
        user_id,
        role,
        exp: (Utc::now() + expires_in).timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("HS256 token encoding cannot fail")
}

/// A mock token verifier for testing.
///
/// This verifier accepts any token in the format `test-token:<user_id>:<role>`
/// and extracts the identity from it without cryptographic checks.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct MockTokenVerifier;

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl TokenVerifier for MockTokenVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedClaims> {
        // Expected format: test-token:<user_id>:<role>
        let rest = token.strip_prefix("test-token:").ok_or_else(|| {
            AuthError::InvalidToken("expected test-token:<user_id>:<role>".to_string())
        })?;

        let parts: Vec<&str> = rest.split(':').collect();
        if parts.len() != 2 {
            return Err(AuthError::InvalidToken(
                "expected test-token:<user_id>:<role>".to_string(),
            ));
        }

        let user_id: UserId = parts[0]
            .parse()
            .map_err(|_| AuthError::InvalidToken("invalid user ID".to_string()))?;
        let role: Role = parts[1]
            .parse()
            .map_err(|_| AuthError::InvalidToken("unknown role".to_string()))?;

        Ok(VerifiedClaims {
            user_id,
            role,
            expires_at: Utc::now() + chrono::Duration::hours(1),
        })
    }
}
