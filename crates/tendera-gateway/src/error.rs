//! API error types and responses.
//!
//! This module defines the standard error format for all gateway-synthesized
//! responses. Backend-originated errors are relayed verbatim by the proxy and
//! never pass through these types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use tendera_auth::AuthError;

use crate::proxy::ProxyError;

/// API error type that implements `IntoResponse`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request's credential was missing or failed verification.
    #[error("{0}")]
    Unauthorized(String),

    /// No route matches the request method and path.
    #[error("not found")]
    RouteNotFound,

    /// The matched route targets a service that is not registered.
    #[error("service not found")]
    ServiceNotFound,

    /// The backend did not respond within the proxy timeout.
    #[error("backend request timed out")]
    GatewayTimeout,

    /// The backend could not be reached.
    #[error("service unavailable")]
    ServiceUnavailable,

    /// Internal server error. Detail is logged; the message stays generic.
    #[error("internal server error")]
    Internal,
}

/// Error response body, shared wire format with the backend services.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl ApiError {
    /// Get the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::RouteNotFound | Self::ServiceNotFound => StatusCode::NOT_FOUND,
            Self::GatewayTimeout => StatusCode::GATEWAY_TIMEOUT,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Internal(detail) => {
                tracing::error!(detail = %detail, "credential verification failed unexpectedly");
                Self::Unauthorized("authentication failed".to_string())
            }
            other => Self::Unauthorized(other.to_string()),
        }
    }
}

impl From<ProxyError> for ApiError {
    fn from(err: ProxyError) -> Self {
        match err {
            ProxyError::ServiceNotFound(name) => {
                tracing::warn!(service = %name, "route targets an unregistered service");
                Self::ServiceNotFound
            }
            ProxyError::Timeout => Self::GatewayTimeout,
            ProxyError::Unreachable => Self::ServiceUnavailable,
            ProxyError::Internal(detail) => {
                tracing::error!(detail = %detail, "proxying failed");
                Self::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_status_codes() {
        assert_eq!(
            ApiError::Unauthorized("token expired".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::RouteNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::ServiceNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::GatewayTimeout.status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            ApiError::ServiceUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn auth_errors_keep_their_message() {
        let err = ApiError::from(AuthError::TokenExpired);
        assert_eq!(err.to_string(), "token expired");

        let err = ApiError::from(AuthError::MissingToken);
        assert_eq!(err.to_string(), "authorization token missing");
    }

    #[test]
    fn internal_auth_error_is_genericized() {
        let err = ApiError::from(AuthError::Internal("decode panic detail".into()));
        assert_eq!(err.to_string(), "authentication failed");
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn proxy_errors_translate() {
        assert!(matches!(
            ApiError::from(ProxyError::ServiceNotFound("billing".into())),
            ApiError::ServiceNotFound
        ));
        assert!(matches!(
            ApiError::from(ProxyError::Timeout),
            ApiError::GatewayTimeout
        ));
        assert!(matches!(
            ApiError::from(ProxyError::Unreachable),
            ApiError::ServiceUnavailable
        ));
        assert!(matches!(
            ApiError::from(ProxyError::Internal("boom".into())),
            ApiError::Internal
        ));
    }
}
