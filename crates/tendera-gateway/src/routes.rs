//! Router configuration.
//!
//! This module sets up the Axum router: the two locally served endpoints plus
//! the fallback dispatcher that drives every proxied route through the route
//! table.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use tendera_auth::TokenVerifier;

use crate::handlers::{dispatch, health, index};
use crate::state::GatewayState;

/// Create the gateway router with all routes and middleware.
///
/// # Routes
///
/// ## Served locally
/// - `GET /` - Capability listing
/// - `GET /health` - Aggregate health across registered services
///
/// ## Proxied (resolved through the route table)
/// - `POST /api/auth/register|login|verify` - Auth service (public)
/// - `GET /api/tenders`, `GET /api/tenders/{id}` - Tender service (public)
/// - `POST /api/tenders`, `POST /api/tenders/{id}/applications` - Tender service (protected)
/// - `GET|PUT /api/users/profile`, `GET /api/users/list` - User service (protected)
pub fn create_router<V>(state: GatewayState<V>) -> Router
where
    V: TokenVerifier + 'static,
{
    // Extract config values before moving state
    let cors_origins = state.config.cors_origins.clone();
    let max_body_bytes = state.config.max_body_bytes;

    // Build CORS layer
    let cors = build_cors_layer(&cors_origins);

    // Build the router
    let state = Arc::new(state);

    Router::new()
        .route("/", get(index::index))
        .route("/health", get(health::health::<V>))
        // Everything else goes through the route table
        .fallback(dispatch::dispatch::<V>)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // For specific origins, parse them
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_any_origin() {
        let origins = vec!["*".to_string()];
        let _layer = build_cors_layer(&origins);
        // Just verify it doesn't panic
    }

    #[test]
    fn cors_specific_origins() {
        let origins = vec![
            "http://localhost:3000".to_string(),
            "https://tenders.example.com".to_string(),
        ];
        let _layer = build_cors_layer(&origins);
    }
}
