//! Gateway configuration types.
//!
//! This module defines configuration structures for the HTTP gateway.

use std::time::Duration;

use serde::Deserialize;

/// Configuration for the gateway service.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Listen address (e.g., "0.0.0.0:5000").
    #[serde(default = "GatewayConfig::default_listen_addr")]
    pub listen_addr: String,

    /// Allowed CORS origins.
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    #[serde(default = "GatewayConfig::default_max_body")]
    pub max_body_bytes: usize,

    /// Timeout for proxied backend calls, in seconds.
    #[serde(default = "GatewayConfig::default_proxy_timeout")]
    pub proxy_timeout_seconds: u64,

    /// Timeout for establishing backend connections, in seconds.
    #[serde(default = "GatewayConfig::default_connect_timeout")]
    pub connect_timeout_seconds: u64,

    /// Timeout for individual health probes, in seconds.
    #[serde(default = "GatewayConfig::default_health_timeout")]
    pub health_timeout_seconds: u64,
}

impl GatewayConfig {
    fn default_listen_addr() -> String {
        "0.0.0.0:5000".to_string()
    }

    const fn default_max_body() -> usize {
        1024 * 1024 // 1 MB
    }

    const fn default_proxy_timeout() -> u64 {
        30
    }

    const fn default_connect_timeout() -> u64 {
        5
    }

    const fn default_health_timeout() -> u64 {
        5
    }

    /// Get the proxy timeout as a `Duration`.
    #[must_use]
    pub fn proxy_timeout(&self) -> Duration {
        Duration::from_secs(self.proxy_timeout_seconds)
    }

    /// Get the connect timeout as a `Duration`.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    /// Get the health probe timeout as a `Duration`.
    #[must_use]
    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_seconds)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: Self::default_listen_addr(),
            cors_origins: vec!["*".to_string()],
            max_body_bytes: Self::default_max_body(),
            proxy_timeout_seconds: Self::default_proxy_timeout(),
            connect_timeout_seconds: Self::default_connect_timeout(),
            health_timeout_seconds: Self::default_health_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.listen_addr, "0.0.0.0:5000");
        assert_eq!(config.max_body_bytes, 1024 * 1024);
        assert_eq!(config.proxy_timeout_seconds, 30);
        assert_eq!(config.health_timeout_seconds, 5);
    }

    #[test]
    fn timeout_durations() {
        let config = GatewayConfig::default();
        assert_eq!(config.proxy_timeout(), Duration::from_secs(30));
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
        assert_eq!(config.health_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: GatewayConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:5000");
        assert!(config.cors_origins.is_empty());
    }
}
