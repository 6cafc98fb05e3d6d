//! Authentication error types.

use thiserror::Error;

/// A result type using `AuthError`.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors that can occur during credential verification.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No `Authorization` header was present on the request.
    #[error("authorization token missing")]
    MissingToken,

    /// The token's `exp` claim is in the past.
    #[error("token expired")]
    TokenExpired,

    /// The token's signature does not match the shared secret.
    #[error("invalid token signature")]
    InvalidSignature,

    /// The token is structurally invalid or is missing required claims.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// An unexpected failure occurred while decoding the token.
    ///
    /// The detail is logged server-side; callers present a generic message.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Returns `true` if this error indicates the client should retry with a new token.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::TokenExpired)
    }

    /// Returns the appropriate HTTP status code for this error.
    ///
    /// Every verification failure is unauthorized from the caller's point of
    /// view; internal decode failures are not distinguished externally.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::MissingToken
            | Self::TokenExpired
            | Self::InvalidSignature
            | Self::InvalidToken(_)
            | Self::Internal(_) => 401,
        }
    }
}
