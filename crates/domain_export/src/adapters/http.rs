//! HTTP Rendering Adapter
//!
//! Posts the serialized statement to a rendering service over HTTP and
//! returns the response body as the document.
//!
//! # Configuration
//!
//! ```rust,ignore
//! let config = HttpRenderConfig {
//!     base_url: "http://localhost:3000".to_string(),
//!     timeout_secs: 30,
//!     health_endpoint: "/api/index.py".to_string(),
//! };
//! ```
//!
//! # Error Handling
//!
//! Non-success statuses map through `error_for_status`. Transport failures
//! map to:
//! - Timeouts -> `PortError::Timeout`
//! - Connect failures -> `PortError::Connection`
//! - Other -> `PortError::Internal`
//!
//! A success status with an empty body is a `PortError::Transformation`.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{CONTENT_TYPE, RETRY_AFTER};
use tracing::{debug, instrument};

use core_kernel::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError,
};

use crate::policy::PRIMARY_ENDPOINT;
use crate::ports::{error_for_status, RenderPort, RenderRequest, RenderedDocument};

/// Header carrying the export correlation ID
pub const CORRELATION_HEADER: &str = "x-correlation-id";

/// Configuration for the HTTP rendering adapter
#[derive(Debug, Clone)]
pub struct HttpRenderConfig {
    /// Scheme, host and port of the rendering service
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Path probed by health checks
    pub health_endpoint: String,
}

impl HttpRenderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for HttpRenderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_secs: 30,
            health_endpoint: PRIMARY_ENDPOINT.to_string(),
        }
    }
}

/// Rendering adapter backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpRenderAdapter {
    config: HttpRenderConfig,
    client: reqwest::Client,
}

impl HttpRenderAdapter {
    /// Creates an adapter with its own connection pool
    pub fn new(config: HttpRenderConfig) -> Result<Self, PortError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PortError::Internal {
                message: "failed to build HTTP client".to_string(),
                source: Some(Box::new(e)),
            })?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &HttpRenderConfig {
        &self.config
    }

    /// Joins the base URL and an endpoint path with exactly one slash
    pub fn url_for(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn transport_error(&self, url: &str, error: reqwest::Error) -> PortError {
        if error.is_timeout() {
            PortError::Timeout {
                operation: format!("POST {url}"),
                duration_ms: self.config.timeout_secs * 1000,
            }
        } else if error.is_connect() || error.is_request() {
            PortError::Connection {
                message: format!("cannot reach {url}"),
                source: Some(Box::new(error)),
            }
        } else {
            PortError::Internal {
                message: format!("request to {url} failed"),
                source: Some(Box::new(error)),
            }
        }
    }
}

impl DomainPort for HttpRenderAdapter {}

#[async_trait]
impl HealthCheckable for HttpRenderAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        let url = self.url_for(&self.config.health_endpoint);
        let start = Instant::now();

        let (status, message) = match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => (AdapterHealth::Healthy, None),
            Ok(response) => (
                AdapterHealth::Degraded,
                Some(format!("status {} from {url}", response.status().as_u16())),
            ),
            Err(e) => (AdapterHealth::Unhealthy, Some(e.to_string())),
        };

        HealthCheckResult {
            adapter_id: "http-render-adapter".to_string(),
            status,
            latency_ms: start.elapsed().as_millis() as u64,
            message,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl RenderPort for HttpRenderAdapter {
    #[instrument(
        skip(self, request),
        fields(
            correlation_id = ?request.metadata.correlation_id,
            body_len = request.body.len()
        )
    )]
    async fn render(
        &self,
        endpoint: &str,
        request: &RenderRequest,
    ) -> Result<RenderedDocument, PortError> {
        let url = self.url_for(endpoint);

        let mut builder = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(request.body.clone());
        if let Some(id) = &request.metadata.correlation_id {
            builder = builder.header(CORRELATION_HEADER, id);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        let status = response.status();
        debug!(status = status.as_u16(), "Renderer responded");
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok());
            return Err(error_for_status(status.as_u16(), &url, retry_after));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        if bytes.is_empty() {
            return Err(PortError::transformation(format!("empty document from {url}")));
        }

        Ok(RenderedDocument {
            bytes,
            content_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let adapter = HttpRenderAdapter::new(HttpRenderConfig::new("http://render:3000/")).unwrap();
        assert_eq!(adapter.url_for("/api/index.py"), "http://render:3000/api/index.py");
        assert_eq!(adapter.url_for("api"), "http://render:3000/api");
    }

    #[test]
    fn test_default_config() {
        let config = HttpRenderConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.health_endpoint, "/api/index.py");
    }

    #[tokio::test]
    async fn test_unreachable_service_is_a_connection_error() {
        // Port 9 (discard) on localhost is closed in test environments.
        let adapter = HttpRenderAdapter::new(HttpRenderConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 5,
            health_endpoint: "/api".to_string(),
        })
        .unwrap();

        let request = RenderRequest::new(&b"{}"[..], Default::default());
        let error = adapter.render("/api", &request).await.unwrap_err();
        assert!(matches!(error, PortError::Connection { .. }), "got {error:?}");

        let health = adapter.health_check().await;
        assert_eq!(health.status, AdapterHealth::Unhealthy);
    }
}
