//! Auth gate for protected routes.
//!
//! The dispatch pipeline invokes [`authenticate`] only for routes whose
//! descriptor requires a credential; on failure the request is rejected
//! before the proxy is reached. The resulting [`Identity`] is passed
//! explicitly to the proxy, never attached to ambient request state.

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;

use tendera_auth::{AuthError, TokenVerifier};
use tendera_core::Identity;

/// Verify the request credential and produce the identity context.
///
/// Expects an `Authorization: Bearer <token>` header; the prefix is stripped
/// before decoding, and a header without the prefix is passed to the verifier
/// as-is.
///
/// # Errors
///
/// Returns [`AuthError::MissingToken`] when no header is present, or the
/// verifier's failure otherwise.
pub async fn authenticate<V>(headers: &HeaderMap, verifier: &V) -> Result<Identity, AuthError>
where
    V: TokenVerifier + ?Sized,
{
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = header.strip_prefix("Bearer ").unwrap_or(header);

    let claims = verifier.verify(token).await?;

    Ok(Identity::new(claims.user_id, claims.role))
}
