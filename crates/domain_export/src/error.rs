//! Export error types

use std::path::PathBuf;

use core_kernel::PortError;
use thiserror::Error;

/// Message shown to a user when a document could not be generated
pub const GENERATION_FAILED_MESSAGE: &str = "Error generating PDF. Please check the logs.";

/// A single failed rendering attempt
#[derive(Debug)]
pub struct AttemptFailure {
    /// Endpoint path that was tried
    pub endpoint: String,
    /// Why the attempt failed
    pub error: PortError,
}

impl std::fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.endpoint, self.error)
    }
}

/// Errors that can occur while exporting a statement
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("An export is already in progress")]
    Busy,

    #[error("No rendering endpoints configured")]
    NoEndpoints,

    #[error("Document generation failed after {} attempt(s): {}", attempts.len(), summarize(attempts))]
    GenerationFailed { attempts: Vec<AttemptFailure> },

    #[error("Failed to serialize statement: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to deliver {}: {source}", path.display())]
    Delivery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// Text suitable for showing to the person who asked for the export
    pub fn user_message(&self) -> &'static str {
        match self {
            ExportError::Busy => "A statement is already being generated.",
            _ => GENERATION_FAILED_MESSAGE,
        }
    }

    /// Returns the failed attempts, in the order they were made
    pub fn attempts(&self) -> &[AttemptFailure] {
        match self {
            ExportError::GenerationFailed { attempts } => attempts.as_slice(),
            _ => &[],
        }
    }
}

fn summarize(attempts: &[AttemptFailure]) -> String {
    attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
