//! Aggregate health endpoint.
//!
//! This module provides the public health check endpoint covering every
//! registered backend service.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use tendera_auth::TokenVerifier;

use crate::health::HealthStatus;
use crate::state::GatewayState;

/// Aggregate health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Gateway status; always "running".
    pub status: &'static str,
    /// When the report was computed.
    pub timestamp: DateTime<Utc>,
    /// Per-service probe outcomes.
    pub services: BTreeMap<String, HealthStatus>,
}

/// Aggregate health handler.
///
/// Probes every registered service and reports the composite status. This
/// endpoint is public and answers 200 regardless of how many backends are
/// down.
///
/// # Example
///
/// ```text
/// GET /health
///
/// Response: 200 OK
/// {
///   "status": "running",
///   "timestamp": "2026-08-07T12:00:00Z",
///   "services": { "auth": "healthy", "tenders": "unreachable" }
/// }
/// ```
pub async fn health<V>(State(state): State<Arc<GatewayState<V>>>) -> impl IntoResponse
where
    V: TokenVerifier + 'static,
{
    let services = state.health.check_all().await;

    Json(HealthResponse {
        status: "running",
        timestamp: Utc::now(),
        services,
    })
}
