//! Service registry: logical service names mapped to base URLs.
//!
//! The registry is built once at startup and shared read-only for the process
//! lifetime; the proxy and the health aggregator receive it explicitly.

use std::collections::BTreeMap;

/// An immutable mapping from logical service name to base URL.
#[derive(Debug, Clone, Default)]
pub struct ServiceRegistry {
    services: BTreeMap<String, String>,
}

impl ServiceRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            services: BTreeMap::new(),
        }
    }

    /// Add a service, returning the registry for chaining.
    ///
    /// Trailing slashes on the base URL are stripped so that target paths can
    /// be appended uniformly.
    #[must_use]
    pub fn with_service(mut self, name: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.services
            .insert(name.into(), base_url.trim_end_matches('/').to_string());
        self
    }

    /// Look up the base URL for a logical service name.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.services.get(name).map(String::as_str)
    }

    /// Iterate over `(name, base_url)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.services
            .iter()
            .map(|(name, url)| (name.as_str(), url.as_str()))
    }

    /// Number of registered services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// The registry of the standard deployment.
    ///
    /// The document, notification, and analytics services have no external
    /// routes; they participate in health aggregation only.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_service("auth", "http://auth-service:5001")
            .with_service("users", "http://user-service:5002")
            .with_service("tenders", "http://tender-service:5003")
            .with_service("documents", "http://document-service:5004")
            .with_service("notifications", "http://notification-service:5005")
            .with_service("analytics", "http://analytics-service:5006")
    }
}
