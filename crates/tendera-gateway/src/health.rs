//! Health aggregation across registered services.
//!
//! Every registered service is probed at its well-known `/health` path with a
//! bounded timeout. Probes run concurrently; one service's failure never
//! delays or fails another's report, and the aggregate itself never fails.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use serde::Serialize;

use crate::registry::ServiceRegistry;

/// Probe outcome for a single service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// The service answered 200 on its health path.
    Healthy,
    /// The service answered with a non-200 status.
    Unhealthy,
    /// The service could not be reached within the probe timeout.
    Unreachable,
}

/// Polls every registered service and reports composite status.
#[derive(Debug, Clone)]
pub struct HealthAggregator {
    client: reqwest::Client,
    registry: Arc<ServiceRegistry>,
}

impl HealthAggregator {
    /// Create a new aggregator over the given registry.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created (should never happen with
    /// default TLS).
    #[must_use]
    pub fn new(registry: Arc<ServiceRegistry>, probe_timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(probe_timeout)
            .build()
            .expect("failed to create HTTP client");

        Self { client, registry }
    }

    /// Probe every registered service concurrently.
    ///
    /// The report always carries one entry per registered service, recomputed
    /// on every call.
    pub async fn check_all(&self) -> BTreeMap<String, HealthStatus> {
        let probes = self.registry.iter().map(|(name, base_url)| {
            let name = name.to_string();
            let url = format!("{base_url}/health");
            async move { (name, self.probe(&url).await) }
        });

        join_all(probes).await.into_iter().collect()
    }

    async fn probe(&self, url: &str) -> HealthStatus {
        match self.client.get(url).send().await {
            Ok(response) if response.status() == reqwest::StatusCode::OK => HealthStatus::Healthy,
            Ok(response) => {
                tracing::debug!(url, status = %response.status(), "service unhealthy");
                HealthStatus::Unhealthy
            }
            Err(e) => {
                tracing::debug!(url, error = %e, "service unreachable");
                HealthStatus::Unreachable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Healthy).unwrap(),
            "\"healthy\""
        );
        assert_eq!(
            serde_json::to_string(&HealthStatus::Unhealthy).unwrap(),
            "\"unhealthy\""
        );
        assert_eq!(
            serde_json::to_string(&HealthStatus::Unreachable).unwrap(),
            "\"unreachable\""
        );
    }

    #[tokio::test]
    async fn aggregation_is_total_with_mixed_outcomes() {
        let healthy = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&healthy)
            .await;

        let unhealthy = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&unhealthy)
            .await;

        // Bind then drop a listener to obtain a port nothing is listening on.
        let closed_port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let registry = Arc::new(
            ServiceRegistry::new()
                .with_service("auth", healthy.uri())
                .with_service("tenders", unhealthy.uri())
                .with_service("users", format!("http://127.0.0.1:{closed_port}")),
        );

        let aggregator = HealthAggregator::new(registry, Duration::from_secs(1));
        let report = aggregator.check_all().await;

        assert_eq!(report.len(), 3);
        assert_eq!(report["auth"], HealthStatus::Healthy);
        assert_eq!(report["tenders"], HealthStatus::Unhealthy);
        assert_eq!(report["users"], HealthStatus::Unreachable);
    }
}
