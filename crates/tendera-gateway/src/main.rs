//! Tendera Gateway - HTTP API Gateway
//!
//! This is the main entry point for the gateway service. The gateway is the
//! single externally facing component: it routes, authenticates, and proxies
//! requests to the backend services.
//!
//! # Dev Mode
//!
//! Build with `--features dev-mode` to use a mock credential verifier that
//! doesn't require a shared JWT secret.
//! Use tokens in format: `test-token:<user-id>:<role>`

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(not(feature = "dev-mode"))]
use tendera_auth::{AuthConfig, HsTokenVerifier};
#[cfg(feature = "dev-mode")]
use tendera_auth::MockTokenVerifier;
use tendera_gateway::{create_router, GatewayConfig, GatewayState, RouteTable, ServiceRegistry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tendera_gateway=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Tendera Gateway");

    // Load configuration from environment
    let mut config = GatewayConfig::default();
    if let Ok(listen_addr) = std::env::var("LISTEN_ADDR") {
        config.listen_addr = listen_addr;
    }

    let registry = Arc::new(registry_from_env());

    tracing::info!(
        listen_addr = %config.listen_addr,
        services = registry.len(),
        proxy_timeout_seconds = config.proxy_timeout_seconds,
        "Gateway configuration loaded"
    );

    for (name, base_url) in registry.iter() {
        tracing::info!(service = name, base_url, "Registered backend service");
    }

    // Initialize credential verifier
    #[cfg(feature = "dev-mode")]
    let verifier = {
        tracing::warn!("DEV MODE ENABLED - using mock credential verifier");
        tracing::warn!("Use tokens in format: test-token:<user-id>:<role>");
        Arc::new(MockTokenVerifier)
    };

    #[cfg(not(feature = "dev-mode"))]
    let verifier = {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| AuthConfig::default().secret);
        Arc::new(HsTokenVerifier::new(AuthConfig::new(secret)))
    };
    tracing::info!("Credential verifier initialized");

    // Build gateway state and the full router
    let listen_addr = config.listen_addr.clone();
    let state = GatewayState::new(verifier, registry, RouteTable::api_default(), config);
    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    // Start HTTP server
    tracing::info!(listen_addr = %listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the service registry, allowing per-service URL overrides via
/// environment variables.
fn registry_from_env() -> ServiceRegistry {
    let services = [
        ("auth", "AUTH_SERVICE_URL", "http://auth-service:5001"),
        ("users", "USER_SERVICE_URL", "http://user-service:5002"),
        ("tenders", "TENDER_SERVICE_URL", "http://tender-service:5003"),
        (
            "documents",
            "DOCUMENT_SERVICE_URL",
            "http://document-service:5004",
        ),
        (
            "notifications",
            "NOTIFICATION_SERVICE_URL",
            "http://notification-service:5005",
        ),
        (
            "analytics",
            "ANALYTICS_SERVICE_URL",
            "http://analytics-service:5006",
        ),
    ];

    services
        .into_iter()
        .fold(ServiceRegistry::new(), |registry, (name, var, default)| {
            let base_url = std::env::var(var).unwrap_or_else(|_| default.to_string());
            registry.with_service(name, base_url)
        })
}
