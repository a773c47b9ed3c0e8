//! Ports and Adapters Infrastructure
//!
//! This module provides the foundational types for the hexagonal architecture
//! used by the export domain. The document-rendering service is an external
//! collaborator reached through a port trait; adapters implement that trait
//! against HTTP or an in-memory script.
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │        Export Pipeline / Session           │
//! └───────────────────────────────────────────┘
//!                      │
//!                      ▼
//! ┌───────────────────────────────────────────┐
//! │        RenderPort (domain_export)          │
//! └───────────────────────────────────────────┘
//!            ▲                     ▲
//!   ┌────────┴────────┐   ┌────────┴────────┐
//!   │  HTTP Adapter    │   │  Mock Adapter    │
//!   │  (reqwest)       │   │  (scripted)      │
//!   └─────────────────┘   └─────────────────┘
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Error type for port operations
///
/// Provides a unified error type that all port implementations must use,
/// so the pipeline can reason about failures without knowing the adapter.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested resource does not exist on the remote side
    #[error("Not found: {resource} at {location}")]
    NotFound {
        resource: String,
        location: String,
    },

    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The operation timed out
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
    },

    /// Authentication or authorization failed
    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
    },

    /// Rate limit exceeded for external API
    #[error("Rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        retry_after_secs: u64,
    },

    /// The external system answered with a server error
    #[error("Service unavailable: {service} (status {status})")]
    ServiceUnavailable {
        service: String,
        status: u16,
    },

    /// The external system answered with a status no other variant covers
    #[error("Unexpected status {status} from {location}")]
    UnexpectedStatus {
        location: String,
        status: u16,
    },

    /// The response could not be turned into a domain value
    #[error("Transformation error: {message}")]
    Transformation {
        message: String,
    },

    /// Any other failure
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(resource: impl Into<String>, location: impl fmt::Display) -> Self {
        PortError::NotFound {
            resource: resource.into(),
            location: location.to_string(),
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a Transformation error
    pub fn transformation(message: impl Into<String>) -> Self {
        PortError::Transformation {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::Connection { .. }
                | PortError::Timeout { .. }
                | PortError::RateLimited { .. }
                | PortError::ServiceUnavailable { .. }
        )
    }

    /// Returns true if the remote side answered with a non-success status
    ///
    /// Transport failures (no answer at all) and malformed success answers
    /// return false.
    pub fn is_status_failure(&self) -> bool {
        matches!(
            self,
            PortError::NotFound { .. }
                | PortError::Unauthorized { .. }
                | PortError::RateLimited { .. }
                | PortError::ServiceUnavailable { .. }
                | PortError::UnexpectedStatus { .. }
        )
    }

    /// Returns true if this error indicates the resource was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Marker trait for all domain ports
///
/// All port traits extend this marker so they are thread-safe and usable
/// behind `Arc<dyn ...>` in async contexts.
pub trait DomainPort: Send + Sync + 'static {}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    /// Adapter is healthy and operational
    Healthy,
    /// Adapter is degraded but operational
    Degraded,
    /// Adapter is unhealthy and not operational
    Unhealthy,
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Adapter identifier
    pub adapter_id: String,
    /// Current health status
    pub status: AdapterHealth,
    /// Latency of the health check in milliseconds
    pub latency_ms: u64,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the health check
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

/// Trait for adapters that support health checks
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    /// Performs a health check on the adapter
    async fn health_check(&self) -> HealthCheckResult;
}

/// Metadata about a port operation for tracing
#[derive(Debug, Clone, Default)]
pub struct OperationMetadata {
    /// Correlation ID for tracing across systems
    pub correlation_id: Option<String>,
    /// Additional context as key-value pairs
    pub context: HashMap<String, String>,
}

impl OperationMetadata {
    /// Creates new metadata with a correlation ID
    pub fn with_correlation_id(correlation_id: impl Into<String>) -> Self {
        Self {
            correlation_id: Some(correlation_id.into()),
            ..Default::default()
        }
    }

    /// Creates metadata with a freshly generated, time-ordered correlation ID
    pub fn generated() -> Self {
        Self::with_correlation_id(Uuid::now_v7().to_string())
    }

    /// Adds context to the metadata
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}
