//! Gateway application state.
//!
//! This module defines the shared state that is available to all request
//! handlers. Everything in it is immutable after startup; concurrent requests
//! share it without locking.

use std::sync::Arc;

use tendera_auth::TokenVerifier;

use crate::config::GatewayConfig;
use crate::health::HealthAggregator;
use crate::proxy::ServiceProxy;
use crate::registry::ServiceRegistry;
use crate::table::RouteTable;

/// Shared application state for the gateway.
pub struct GatewayState<V>
where
    V: TokenVerifier,
{
    /// The credential verifier for protected routes.
    pub verifier: Arc<V>,
    /// The service registry shared with proxy and health aggregator.
    pub registry: Arc<ServiceRegistry>,
    /// The fixed route table.
    pub table: RouteTable,
    /// The request proxy.
    pub proxy: ServiceProxy,
    /// The health aggregator.
    pub health: HealthAggregator,
    /// Gateway configuration.
    pub config: GatewayConfig,
}

impl<V> GatewayState<V>
where
    V: TokenVerifier,
{
    /// Create a new gateway state.
    #[must_use]
    pub fn new(
        verifier: Arc<V>,
        registry: Arc<ServiceRegistry>,
        table: RouteTable,
        config: GatewayConfig,
    ) -> Self {
        let proxy = ServiceProxy::new(Arc::clone(&registry), &config);
        let health = HealthAggregator::new(Arc::clone(&registry), config.health_timeout());

        Self {
            verifier,
            registry,
            table,
            proxy,
            health,
            config,
        }
    }
}

impl<V> Clone for GatewayState<V>
where
    V: TokenVerifier,
{
    fn clone(&self) -> Self {
        Self {
            verifier: Arc::clone(&self.verifier),
            registry: Arc::clone(&self.registry),
            table: self.table.clone(),
            proxy: self.proxy.clone(),
            health: self.health.clone(),
            config: self.config.clone(),
        }
    }
}
