//! Export Domain
//!
//! Turns a statement snapshot into a retrievable document. The rendering
//! service is an external collaborator behind the `RenderPort` trait; the
//! pipeline serializes the statement once, walks an ordered list of
//! endpoints until one renders it, names the result, and hands it to an
//! `ArtifactSink`.
//!
//! # Export Lifecycle
//!
//! ```text
//! Idle --export--> Generating --success--> Idle (artifact)
//!                             --failure--> Idle (one error)
//! ```
//!
//! A pipeline runs one export at a time. A request that arrives while another
//! is generating is rejected with `ExportError::Busy`.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_export::{ExportPipeline, EndpointPolicy, HttpRenderAdapter, HttpRenderConfig, DirectorySink};
//! use std::sync::Arc;
//!
//! let adapter = HttpRenderAdapter::new(HttpRenderConfig::new("http://localhost:3000"))?;
//! let pipeline = ExportPipeline::new(Arc::new(adapter), EndpointPolicy::default());
//! let receipt = pipeline.export_to(&doc, &DirectorySink::new("out")).await?;
//! ```

pub mod artifact;
pub mod policy;
pub mod ports;
pub mod adapters;
pub mod sink;
pub mod pipeline;
pub mod error;

pub use artifact::{artifact_filename, StatementArtifact, PDF_CONTENT_TYPE};
pub use policy::{EndpointPolicy, PRIMARY_ENDPOINT, FALLBACK_ENDPOINT};
pub use ports::{RenderPort, RenderRequest, RenderedDocument, error_for_status};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::{MockRenderPort, MockOutcome, RecordedCall};
pub use adapters::{HttpRenderAdapter, HttpRenderConfig};
pub use sink::{ArtifactSink, DeliveryReceipt, DirectorySink, MemorySink};
pub use pipeline::{ExportPipeline, ExportState};
pub use error::{ExportError, AttemptFailure};
