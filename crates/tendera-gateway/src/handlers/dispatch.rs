//! Route dispatch: the request pipeline for proxied endpoints.
//!
//! Every request that is not served locally flows through here:
//! route-table lookup, conditional auth gate, then the proxy. Credential and
//! routing failures are answered at the gateway and never reach a backend.

use std::sync::Arc;

use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::response::Response;

use tendera_auth::TokenVerifier;

use crate::error::ApiError;
use crate::gate;
use crate::proxy::ProxiedRequest;
use crate::state::GatewayState;

/// Dispatch an inbound request through the route table, auth gate, and proxy.
///
/// # Errors
///
/// Returns an error if no route matches, the credential check fails for a
/// protected route, or the backend cannot be reached.
pub async fn dispatch<V>(
    State(state): State<Arc<GatewayState<V>>>,
    request: Request,
) -> Result<Response, ApiError>
where
    V: TokenVerifier + 'static,
{
    let (parts, body) = request.into_parts();

    let matched = state
        .table
        .match_route(&parts.method, parts.uri.path())
        .ok_or(ApiError::RouteNotFound)?;

    let identity = if matched.route.requires_auth() {
        Some(gate::authenticate(&parts.headers, state.verifier.as_ref()).await?)
    } else {
        None
    };

    let body = to_bytes(body, state.config.max_body_bytes)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to buffer request body");
            ApiError::Internal
        })?;

    tracing::info!(
        method = %parts.method,
        path = parts.uri.path(),
        service = matched.route.service(),
        authenticated = identity.is_some(),
        "proxying request"
    );

    let proxied = ProxiedRequest {
        method: parts.method,
        headers: parts.headers,
        query: parts.uri.query().map(str::to_string),
        body,
        identity,
    };

    let response = state
        .proxy
        .forward(matched.route.service(), &matched.target_path, proxied)
        .await?;

    Ok(response)
}
