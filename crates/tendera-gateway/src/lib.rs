//! HTTP API gateway for the tendera procurement platform.
//!
//! This crate provides the single externally facing entry point of the
//! system. It handles:
//!
//! - Route resolution against a fixed route table
//! - JWT credential verification for protected routes
//! - Transparent proxying to backend services with identity propagation
//! - Aggregate health reporting across all registered services
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Clients                              │
//! │                  (frontend, API users)                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     tendera-gateway                         │
//! │  ┌─────────────┐ ┌─────────────┐ ┌─────────────────────┐    │
//! │  │   Route     │ │   Auth      │ │    Service          │    │
//! │  │   Table     │ │   Gate      │ │    Proxy            │    │
//! │  └─────────────┘ └─────────────┘ └─────────────────────┘    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!               ┌──────────────┼──────────────┐
//!               ▼              ▼              ▼
//!        ┌──────────┐   ┌──────────┐   ┌──────────┐
//!        │  Auth    │   │  User    │   │  Tender  │
//!        │  service │   │  service │   │  service │
//!        └──────────┘   └──────────┘   └──────────┘
//! ```
//!
//! A request that is not served locally is resolved through the route table;
//! protected routes pass the auth gate before the proxy forwards them with
//! `X-User-ID` / `X-User-Role` injected. Backend responses are relayed
//! verbatim; only failures to reach or resolve a backend are translated into
//! gateway-level errors.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tendera_auth::{AuthConfig, HsTokenVerifier};
//! use tendera_gateway::{
//!     create_router, GatewayConfig, GatewayState, RouteTable, ServiceRegistry,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Initialize dependencies
//! let registry = Arc::new(ServiceRegistry::standard());
//! let verifier = Arc::new(HsTokenVerifier::new(AuthConfig::default()));
//!
//! // Create gateway state
//! let config = GatewayConfig::default();
//! let state = GatewayState::new(verifier, registry, RouteTable::api_default(), config);
//!
//! // Create router
//! let app = create_router(state);
//!
//! // Run server
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod gate;
pub mod handlers;
pub mod health;
pub mod proxy;
pub mod registry;
pub mod routes;
pub mod state;
pub mod table;

pub use config::GatewayConfig;
pub use error::ApiError;
pub use registry::ServiceRegistry;
pub use routes::create_router;
pub use state::GatewayState;
pub use table::{Route, RouteTable};

// Re-export key types for convenience
pub use health::HealthStatus;
pub use proxy::{ServiceProxy, USER_ID_HEADER, USER_ROLE_HEADER};
