//! Export Pipeline
//!
//! Runs the `Idle -> Generating -> Idle` lifecycle for one statement at a
//! time. While generating, further requests are rejected with
//! `ExportError::Busy`; the flag is cleared on every exit path, including
//! when the export future is dropped part way through.
//!
//! Endpoints are tried in policy order. The next endpoint is tried only when
//! the current one answers with a non-success status; a transport failure or
//! an unusable success answer ends the export with that single attempt.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use core_kernel::OperationMetadata;
use domain_statement::StatementDocument;

use crate::artifact::{artifact_filename, StatementArtifact, PDF_CONTENT_TYPE};
use crate::error::{AttemptFailure, ExportError};
use crate::policy::EndpointPolicy;
use crate::ports::{RenderPort, RenderRequest};
use crate::sink::{ArtifactSink, DeliveryReceipt};

/// Observable pipeline state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportState {
    Idle,
    Generating,
}

impl fmt::Display for ExportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportState::Idle => write!(f, "idle"),
            ExportState::Generating => write!(f, "generating"),
        }
    }
}

/// Holds the generating flag for the lifetime of one export
struct GeneratingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> GeneratingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, ExportError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ExportError::Busy)?;
        Ok(Self { flag })
    }
}

impl Drop for GeneratingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Turns statement snapshots into rendered artifacts
pub struct ExportPipeline {
    port: Arc<dyn RenderPort>,
    policy: EndpointPolicy,
    generating: AtomicBool,
}

impl ExportPipeline {
    pub fn new(port: Arc<dyn RenderPort>, policy: EndpointPolicy) -> Self {
        Self {
            port,
            policy,
            generating: AtomicBool::new(false),
        }
    }

    pub fn policy(&self) -> &EndpointPolicy {
        &self.policy
    }

    /// The rendering port, for health checks
    pub fn port(&self) -> &Arc<dyn RenderPort> {
        &self.port
    }

    pub fn state(&self) -> ExportState {
        if self.generating.load(Ordering::Acquire) {
            ExportState::Generating
        } else {
            ExportState::Idle
        }
    }

    pub fn is_busy(&self) -> bool {
        self.state() == ExportState::Generating
    }

    /// Renders a statement snapshot
    ///
    /// The document is serialized once up front; later edits by the caller
    /// cannot affect an export in flight.
    #[instrument(
        skip(self, doc),
        fields(truck_number = %doc.statement_info.truck_number, date = %doc.statement_info.date)
    )]
    pub async fn export(&self, doc: &StatementDocument) -> Result<StatementArtifact, ExportError> {
        let _guard = GeneratingGuard::acquire(&self.generating)?;
        self.generate(doc, artifact_filename(doc)).await
    }

    /// Renders a statement snapshot and hands the artifact to a sink
    ///
    /// The pipeline stays busy until delivery finishes. A filename the sink
    /// cannot store is rejected before anything is rendered, and nothing
    /// reaches the sink when rendering fails.
    #[instrument(
        skip(self, doc, sink),
        fields(truck_number = %doc.statement_info.truck_number, date = %doc.statement_info.date)
    )]
    pub async fn export_to(
        &self,
        doc: &StatementDocument,
        sink: &dyn ArtifactSink,
    ) -> Result<DeliveryReceipt, ExportError> {
        let _guard = GeneratingGuard::acquire(&self.generating)?;
        let filename = artifact_filename(doc);
        if let Err(e) = sink.check_filename(&filename) {
            error!(error = %e, filename = %filename, "Sink rejected the statement filename");
            return Err(e);
        }
        let artifact = self.generate(doc, filename).await?;

        match sink.deliver(&artifact).await {
            Ok(receipt) => {
                info!(location = %receipt.location, size = receipt.size, "Statement delivered");
                Ok(receipt)
            }
            Err(e) => {
                error!(error = %e, filename = %artifact.filename, "Statement delivery failed");
                Err(e)
            }
        }
    }

    async fn generate(
        &self,
        doc: &StatementDocument,
        filename: String,
    ) -> Result<StatementArtifact, ExportError> {
        if self.policy.is_empty() {
            return Err(ExportError::NoEndpoints);
        }

        let metadata = OperationMetadata::generated()
            .with_context("truck_number", doc.statement_info.truck_number.clone())
            .with_context("filename", filename.clone());
        let request = RenderRequest::new(serde_json::to_vec(doc)?, metadata);

        info!(
            correlation_id = ?request.metadata.correlation_id,
            endpoints = self.policy.len(),
            "Generating statement"
        );

        let mut attempts = Vec::new();
        for endpoint in self.policy.endpoints() {
            match self.port.render(endpoint, &request).await {
                Ok(rendered) => {
                    info!(
                        endpoint = %endpoint,
                        size = rendered.bytes.len(),
                        failed_attempts = attempts.len(),
                        "Statement generated"
                    );
                    return Ok(StatementArtifact {
                        filename,
                        content_type: rendered
                            .content_type
                            .unwrap_or_else(|| PDF_CONTENT_TYPE.to_string()),
                        bytes: rendered.bytes,
                        endpoint: endpoint.clone(),
                    });
                }
                Err(e) => {
                    let falls_back = e.is_status_failure();
                    warn!(endpoint = %endpoint, error = %e, falls_back, "Rendering endpoint failed");
                    attempts.push(AttemptFailure {
                        endpoint: endpoint.clone(),
                        error: e,
                    });
                    // Only a status answer moves on to the next endpoint
                    if !falls_back {
                        break;
                    }
                }
            }
        }

        error!(attempts = attempts.len(), "Statement generation failed");
        Err(ExportError::GenerationFailed { attempts })
    }
}

impl fmt::Debug for ExportPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportPipeline")
            .field("policy", &self.policy)
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::mock::{MockOutcome, MockRenderPort};

    fn statement() -> StatementDocument {
        let mut doc = StatementDocument::default();
        doc.statement_info.date = "12/12/2025".to_string();
        doc.statement_info.truck_number = "196".to_string();
        doc
    }

    #[tokio::test]
    async fn test_primary_success_skips_fallback() {
        let port = Arc::new(
            MockRenderPort::new()
                .with_outcome("/api/index.py", MockOutcome::pdf())
                .with_outcome("/api", MockOutcome::pdf()),
        );
        let pipeline = ExportPipeline::new(port.clone(), EndpointPolicy::default());

        let artifact = pipeline.export(&statement()).await.unwrap();

        assert_eq!(artifact.endpoint, "/api/index.py");
        assert_eq!(artifact.filename, "statement_196_12-12-2025.pdf");
        assert_eq!(artifact.content_type, "application/pdf");
        assert_eq!(port.called_endpoints().await, vec!["/api/index.py"]);
        assert_eq!(pipeline.state(), ExportState::Idle);
    }

    #[tokio::test]
    async fn test_empty_policy() {
        let port = Arc::new(MockRenderPort::new());
        let pipeline = ExportPipeline::new(port.clone(), EndpointPolicy::from_endpoints(Vec::<String>::new()));

        assert!(matches!(
            pipeline.export(&statement()).await,
            Err(ExportError::NoEndpoints)
        ));
        assert!(port.calls().await.is_empty());
        assert!(!pipeline.is_busy());
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let flag = AtomicBool::new(false);
        {
            let _guard = GeneratingGuard::acquire(&flag).unwrap();
            assert!(matches!(GeneratingGuard::acquire(&flag), Err(ExportError::Busy)));
        }
        assert!(GeneratingGuard::acquire(&flag).is_ok());
    }
}
