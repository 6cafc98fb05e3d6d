//! JWT credential verification for the tendera gateway.
//!
//! This crate provides stateless bearer-token verification, including:
//!
//! - HS256 signature validation against a shared secret
//! - Expiry checking and claims extraction
//! - A mock verifier for tests and local development
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐
//! │   Gateway        │────▶│  TokenVerifier   │
//! │   (HTTP)         │     │  (trait)         │
//! └──────────────────┘     └────────┬─────────┘
//!                                   │
//!                          ┌────────▼─────────┐
//!                          │  HsTokenVerifier │
//!                          │  (HS256 secret)  │
//!                          └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use tendera_auth::{AuthConfig, HsTokenVerifier, TokenVerifier};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let verifier = HsTokenVerifier::new(AuthConfig::new("shared-secret"));
//!
//! // In a request handler, after stripping the "Bearer " prefix:
//! let token = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...";
//! let claims = verifier.verify(token).await?;
//!
//! println!("User ID: {}", claims.user_id);
//! println!("Role: {}", claims.role);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod verifier;

pub use error::{AuthError, Result};
pub use verifier::{HsTokenVerifier, TokenVerifier, VerifiedClaims};

#[cfg(any(test, feature = "test-utils"))]
pub use verifier::{issue_token, MockTokenVerifier};

/// Configuration for token verification.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Shared secret used to verify HS256 signatures.
    pub secret: String,
}

impl AuthConfig {
    /// Create a configuration with the given shared secret.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: "your-secret-key-here".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AuthConfig::default();
        assert_eq!(config.secret, "your-secret-key-here");
    }

    #[test]
    fn config_from_secret() {
        let config = AuthConfig::new("s3cret");
        assert_eq!(config.secret, "s3cret");
    }

    #[test]
    fn auth_error_status_codes() {
        assert_eq!(AuthError::MissingToken.http_status_code(), 401);
        assert_eq!(AuthError::TokenExpired.http_status_code(), 401);
        assert_eq!(AuthError::InvalidSignature.http_status_code(), 401);
        assert_eq!(AuthError::InvalidToken("test".into()).http_status_code(), 401);
        assert_eq!(AuthError::Internal("test".into()).http_status_code(), 401);
    }

    #[test]
    fn auth_error_retriable() {
        assert!(AuthError::TokenExpired.is_retriable());
        assert!(!AuthError::MissingToken.is_retriable());
        assert!(!AuthError::InvalidSignature.is_retriable());
    }
}
