//! Rendering Port
//!
//! The rendering service turns a serialized statement into a document. The
//! export pipeline only knows it through `RenderPort`:
//!
//! - **HTTP Adapter**: posts to a live rendering service (`adapters::http`)
//! - **Mock Adapter**: scripted per-endpoint responses for tests
//!
//! ```rust,ignore
//! use domain_export::ports::RenderPort;
//! use std::sync::Arc;
//!
//! let port: Arc<dyn RenderPort> = Arc::new(HttpRenderAdapter::new(config)?);
//! let rendered = port.render("/api/index.py", &request).await?;
//! ```

use async_trait::async_trait;
use bytes::Bytes;

use core_kernel::{DomainPort, HealthCheckable, OperationMetadata, PortError};

/// A serialized statement on its way to the renderer
///
/// The body is encoded once per export so every endpoint receives
/// byte-identical JSON.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// JSON-encoded statement
    pub body: Bytes,
    /// Correlation data for logs and request headers
    pub metadata: OperationMetadata,
}

impl RenderRequest {
    pub fn new(body: impl Into<Bytes>, metadata: OperationMetadata) -> Self {
        Self {
            body: body.into(),
            metadata,
        }
    }
}

/// A document returned by the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Raw document content
    pub bytes: Bytes,
    /// Media type reported by the renderer, if any
    pub content_type: Option<String>,
}

/// Port for document rendering
#[async_trait]
pub trait RenderPort: DomainPort + HealthCheckable {
    /// Renders the request at one endpoint path
    ///
    /// Any non-success answer is an error; the caller decides whether to try
    /// another endpoint.
    async fn render(
        &self,
        endpoint: &str,
        request: &RenderRequest,
    ) -> Result<RenderedDocument, PortError>;
}

/// Maps a non-success HTTP status to a port error
///
/// - 404 -> `NotFound`
/// - 401/403 -> `Unauthorized`
/// - 429 -> `RateLimited`
/// - 5xx -> `ServiceUnavailable`
/// - anything else -> `UnexpectedStatus`
pub fn error_for_status(status: u16, location: &str, retry_after_secs: Option<u64>) -> PortError {
    match status {
        404 => PortError::not_found("render endpoint", location),
        401 | 403 => PortError::Unauthorized {
            message: format!("status {status} from {location}"),
        },
        429 => PortError::RateLimited {
            retry_after_secs: retry_after_secs.unwrap_or(0),
        },
        500..=599 => PortError::ServiceUnavailable {
            service: location.to_string(),
            status,
        },
        _ => PortError::UnexpectedStatus {
            location: location.to_string(),
            status,
        },
    }
}

#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;

    use chrono::Utc;
    use core_kernel::{AdapterHealth, HealthCheckResult};
    use tokio::sync::{Notify, RwLock};

    /// Scripted answer for one endpoint
    #[derive(Debug, Clone)]
    pub enum MockOutcome {
        /// Success with the given document
        Document(Bytes),
        /// The endpoint answers with this HTTP status
        Status(u16),
        /// The endpoint cannot be reached
        Unreachable,
        /// The endpoint answers success with no content
        Empty,
    }

    impl MockOutcome {
        /// Success with a small fake PDF
        pub fn pdf() -> Self {
            MockOutcome::Document(Bytes::from_static(b"%PDF-1.4\n% mock\n%%EOF\n"))
        }
    }

    /// One call received by the mock
    #[derive(Debug, Clone)]
    pub struct RecordedCall {
        pub endpoint: String,
        pub body: Bytes,
        pub correlation_id: Option<String>,
    }

    /// In-memory mock implementation of RenderPort
    ///
    /// Endpoints without a script answer 404.
    #[derive(Debug, Default)]
    pub struct MockRenderPort {
        outcomes: HashMap<String, MockOutcome>,
        calls: Arc<RwLock<Vec<RecordedCall>>>,
        gate: Option<Arc<Notify>>,
    }

    impl MockRenderPort {
        /// Creates a mock with no scripted endpoints
        pub fn new() -> Self {
            Self::default()
        }

        /// Scripts the answer for an endpoint
        pub fn with_outcome(mut self, endpoint: impl Into<String>, outcome: MockOutcome) -> Self {
            self.outcomes.insert(endpoint.into(), outcome);
            self
        }

        /// Holds every render until the gate is notified
        pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
            self.gate = Some(gate);
            self
        }

        /// Calls received so far, in order
        pub async fn calls(&self) -> Vec<RecordedCall> {
            self.calls.read().await.clone()
        }

        /// Endpoints called so far, in order
        pub async fn called_endpoints(&self) -> Vec<String> {
            self.calls
                .read()
                .await
                .iter()
                .map(|c| c.endpoint.clone())
                .collect()
        }
    }

    impl DomainPort for MockRenderPort {}

    #[async_trait]
    impl HealthCheckable for MockRenderPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "mock-render-port".to_string(),
                status: AdapterHealth::Healthy,
                latency_ms: 0,
                message: Some("Mock adapter always healthy".to_string()),
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl RenderPort for MockRenderPort {
        async fn render(
            &self,
            endpoint: &str,
            request: &RenderRequest,
        ) -> Result<RenderedDocument, PortError> {
            self.calls.write().await.push(RecordedCall {
                endpoint: endpoint.to_string(),
                body: request.body.clone(),
                correlation_id: request.metadata.correlation_id.clone(),
            });

            if let Some(gate) = &self.gate {
                gate.notified().await;
            }

            match self.outcomes.get(endpoint) {
                Some(MockOutcome::Document(bytes)) => Ok(RenderedDocument {
                    bytes: bytes.clone(),
                    content_type: Some(crate::PDF_CONTENT_TYPE.to_string()),
                }),
                Some(MockOutcome::Status(status)) => Err(error_for_status(*status, endpoint, None)),
                Some(MockOutcome::Unreachable) => {
                    Err(PortError::connection(format!("{endpoint} is unreachable")))
                }
                Some(MockOutcome::Empty) => {
                    Err(PortError::transformation(format!("empty document from {endpoint}")))
                }
                None => Err(error_for_status(404, endpoint, None)),
            }
        }
    }
}
