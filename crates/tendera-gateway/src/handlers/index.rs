//! Capability listing for the gateway root.

use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Root handler returning a static description of the external API.
///
/// Documentation only; nothing here is proxied.
pub async fn index() -> impl IntoResponse {
    Json(json!({
        "message": "Tender System API Gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "auth": {
                "POST /api/auth/register": "Register a new user",
                "POST /api/auth/login": "Log in",
                "POST /api/auth/verify": "Verify a token"
            },
            "tenders": {
                "GET /api/tenders": "List tenders",
                "GET /api/tenders/{id}": "Tender details",
                "POST /api/tenders": "Create a tender (requires authentication)",
                "POST /api/tenders/{id}/applications": "Submit an application (requires authentication)"
            },
            "users": {
                "GET /api/users/profile": "Get own profile (requires authentication)",
                "PUT /api/users/profile": "Update own profile (requires authentication)",
                "GET /api/users/list": "List users (admin/manager only)"
            }
        }
    }))
}
