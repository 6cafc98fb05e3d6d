//! Request proxying to backend services.
//!
//! The proxy resolves a logical service name through the registry, forwards
//! the inbound request with identity headers injected where applicable, and
//! relays the backend response verbatim. Failures to reach the backend are
//! translated into gateway-level errors; backend 4xx/5xx responses are not.

use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::http::header::{CONNECTION, CONTENT_LENGTH, HOST, TRANSFER_ENCODING};
use axum::http::{HeaderMap, HeaderValue, Method};
use axum::response::Response;
use thiserror::Error;

use tendera_core::Identity;

use crate::config::GatewayConfig;
use crate::registry::ServiceRegistry;

/// Header conveying the authenticated user ID to backends.
pub const USER_ID_HEADER: &str = "X-User-ID";
/// Header conveying the authenticated user role to backends.
pub const USER_ROLE_HEADER: &str = "X-User-Role";

/// Errors that can occur while forwarding a request.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The logical service name is not in the registry.
    #[error("service not found: {0}")]
    ServiceNotFound(String),

    /// The backend did not respond within the proxy timeout.
    #[error("backend request timed out")]
    Timeout,

    /// A connection to the backend could not be established.
    #[error("backend unreachable")]
    Unreachable,

    /// Any other failure while forwarding or relaying.
    #[error("{0}")]
    Internal(String),
}

/// An inbound request captured for forwarding.
///
/// Lives only for the duration of one proxied call. Cookies travel inside
/// `headers`; `identity` is `Some` if and only if the auth gate validated a
/// credential for this request.
#[derive(Debug)]
pub struct ProxiedRequest {
    /// HTTP method of the inbound request.
    pub method: Method,
    /// Inbound headers, filtered before forwarding.
    pub headers: HeaderMap,
    /// Raw query string, if any.
    pub query: Option<String>,
    /// Buffered request body.
    pub body: Bytes,
    /// Validated identity, present only for authenticated requests.
    pub identity: Option<Identity>,
}

/// Forwards inbound requests to registered backend services.
#[derive(Debug, Clone)]
pub struct ServiceProxy {
    client: reqwest::Client,
    registry: Arc<ServiceRegistry>,
}

impl ServiceProxy {
    /// Create a new proxy over the given registry.
    ///
    /// The underlying client never follows redirects; backends' redirects are
    /// relayed to the original caller.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created (should never happen with
    /// default TLS).
    #[must_use]
    pub fn new(registry: Arc<ServiceRegistry>, config: &GatewayConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.proxy_timeout())
            .connect_timeout(config.connect_timeout())
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("failed to create HTTP client");

        Self { client, registry }
    }

    /// Forward an inbound request to the named service.
    ///
    /// On success the backend's status, headers, and body are relayed
    /// unchanged, minus connection-framing headers that the gateway's own
    /// server layer re-derives for the identical payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the service is not registered, the backend times
    /// out or refuses the connection, or the response cannot be relayed.
    pub async fn forward(
        &self,
        service: &str,
        path: &str,
        request: ProxiedRequest,
    ) -> Result<Response, ProxyError> {
        let base_url = self
            .registry
            .resolve(service)
            .ok_or_else(|| ProxyError::ServiceNotFound(service.to_string()))?;

        let mut url = format!("{base_url}/{path}");
        if let Some(query) = &request.query {
            url.push('?');
            url.push_str(query);
        }

        let headers = forwarded_headers(&request.headers, request.identity.as_ref());

        tracing::debug!(service, method = %request.method, url = %url, "forwarding request");

        let response = self
            .client
            .request(request.method, url)
            .headers(headers)
            .body(request.body)
            .send()
            .await
            .map_err(|e| classify_send_error(&e))?;

        let status = response.status();
        tracing::info!(service, status = %status, "backend response");

        let mut headers = response.headers().clone();
        for name in [CONTENT_LENGTH, TRANSFER_ENCODING, CONNECTION] {
            headers.remove(&name);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ProxyError::Internal(format!("failed to read backend response: {e}")))?;

        let mut relayed = Response::builder()
            .status(status)
            .body(Body::from(body))
            .map_err(|e| ProxyError::Internal(format!("failed to build relayed response: {e}")))?;
        *relayed.headers_mut() = headers;

        Ok(relayed)
    }
}

/// Translate a send failure into a gateway-level error.
fn classify_send_error(err: &reqwest::Error) -> ProxyError {
    if err.is_timeout() {
        ProxyError::Timeout
    } else if err.is_connect() {
        ProxyError::Unreachable
    } else {
        ProxyError::Internal(err.to_string())
    }
}

/// Build the outbound header set.
///
/// All inbound headers are forwarded except transport-framing ones (`Host`,
/// `Content-Length`). Identity headers are injected if and only if the
/// gateway validated a credential for this request.
fn forwarded_headers(inbound: &HeaderMap, identity: Option<&Identity>) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(inbound.len() + 2);

    for (name, value) in inbound {
        if name == HOST || name == CONTENT_LENGTH {
            continue;
        }
        headers.append(name.clone(), value.clone());
    }

    if let Some(identity) = identity {
        headers.insert(USER_ID_HEADER, HeaderValue::from(identity.user_id.as_i64()));
        headers.insert(
            USER_ROLE_HEADER,
            HeaderValue::from_static(identity.role.as_str()),
        );
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use tendera_core::{Role, UserId};

    fn inbound_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("gateway.local"));
        headers.insert(CONTENT_LENGTH, HeaderValue::from_static("17"));
        headers.insert("x-request-id", HeaderValue::from_static("req-1"));
        headers.insert("cookie", HeaderValue::from_static("session=abc"));
        headers
    }

    #[test]
    fn transport_headers_are_dropped() {
        let headers = forwarded_headers(&inbound_headers(), None);

        assert!(!headers.contains_key(HOST));
        assert!(!headers.contains_key(CONTENT_LENGTH));
        assert_eq!(headers.get("x-request-id").unwrap(), "req-1");
        assert_eq!(headers.get("cookie").unwrap(), "session=abc");
    }

    #[test]
    fn identity_headers_injected_when_validated() {
        let identity = Identity::new(UserId::new(42), Role::Manager);
        let headers = forwarded_headers(&inbound_headers(), Some(&identity));

        assert_eq!(headers.get(USER_ID_HEADER).unwrap(), "42");
        assert_eq!(headers.get(USER_ROLE_HEADER).unwrap(), "manager");
    }

    #[test]
    fn identity_headers_absent_without_credential() {
        let headers = forwarded_headers(&inbound_headers(), None);

        assert!(!headers.contains_key(USER_ID_HEADER));
        assert!(!headers.contains_key(USER_ROLE_HEADER));
    }

    #[tokio::test]
    async fn unknown_service_fails_before_any_network_call() {
        let registry = Arc::new(ServiceRegistry::new());
        let proxy = ServiceProxy::new(registry, &GatewayConfig::default());

        let request = ProxiedRequest {
            method: Method::GET,
            headers: HeaderMap::new(),
            query: None,
            body: Bytes::new(),
            identity: None,
        };

        let err = proxy
            .forward("billing", "billing", request)
            .await
            .unwrap_err();
        assert!(matches!(err, ProxyError::ServiceNotFound(name) if name == "billing"));
    }
}
