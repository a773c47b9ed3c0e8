//! Application error handling

use thiserror::Error;

use core_kernel::PortError;
use domain_export::ExportError;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Rendering adapter error: {0}")]
    Adapter(#[from] PortError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl AppError {
    /// Text suitable for showing to the person running the tool
    pub fn user_message(&self) -> String {
        match self {
            AppError::Export(e) => e.user_message().to_string(),
            other => other.to_string(),
        }
    }
}
