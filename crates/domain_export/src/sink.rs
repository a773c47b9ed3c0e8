//! Artifact delivery
//!
//! A sink takes a finished artifact and makes it available to the person
//! who asked for it. `DirectorySink` writes files; `MemorySink` keeps
//! artifacts in memory for callers that hand the bytes on themselves.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::artifact::StatementArtifact;
use crate::error::ExportError;

/// Where and how an artifact was delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub filename: String,
    /// Sink-specific location (a file path for `DirectorySink`)
    pub location: String,
    pub size: usize,
}

/// Destination for rendered statements
#[async_trait]
pub trait ArtifactSink: Send + Sync {
    /// Checks that an artifact with this name can be delivered
    ///
    /// Called before rendering so a name the sink cannot store fails fast.
    fn check_filename(&self, _filename: &str) -> Result<(), ExportError> {
        Ok(())
    }

    async fn deliver(&self, artifact: &StatementArtifact) -> Result<DeliveryReceipt, ExportError>;
}

/// Writes artifacts into a directory
///
/// Content goes to `<filename>.part` first and is renamed into place once
/// fully written. The partial file is removed on every failure path.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Removes the partial file unless the write was committed
struct PartFile {
    path: PathBuf,
    committed: bool,
}

impl PartFile {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            committed: false,
        }
    }

    fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for PartFile {
    fn drop(&mut self) {
        if !self.committed {
            if let Err(e) = std::fs::remove_file(&self.path) {
                if e.kind() != io::ErrorKind::NotFound {
                    warn!(path = %self.path.display(), error = %e, "Failed to remove partial file");
                }
            }
        }
    }
}

fn delivery_error(path: &Path, source: io::Error) -> ExportError {
    ExportError::Delivery {
        path: path.to_path_buf(),
        source,
    }
}

#[async_trait]
impl ArtifactSink for DirectorySink {
    /// Rejects names that are not a single path component
    ///
    /// A truck number containing `/` would otherwise escape the directory.
    fn check_filename(&self, filename: &str) -> Result<(), ExportError> {
        if Path::new(filename).file_name() != Some(OsStr::new(filename)) {
            return Err(delivery_error(
                &self.dir.join(filename),
                io::Error::new(io::ErrorKind::InvalidInput, "filename is not a single path component"),
            ));
        }
        Ok(())
    }

    async fn deliver(&self, artifact: &StatementArtifact) -> Result<DeliveryReceipt, ExportError> {
        self.check_filename(&artifact.filename)?;
        let target = self.dir.join(&artifact.filename);

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| delivery_error(&self.dir, e))?;

        let part = PartFile::new(self.dir.join(format!("{}.part", artifact.filename)));
        tokio::fs::write(&part.path, &artifact.bytes)
            .await
            .map_err(|e| delivery_error(&part.path, e))?;
        tokio::fs::rename(&part.path, &target)
            .await
            .map_err(|e| delivery_error(&target, e))?;
        part.commit();

        debug!(path = %target.display(), size = artifact.len(), "Artifact written");

        Ok(DeliveryReceipt {
            filename: artifact.filename.clone(),
            location: target.display().to_string(),
            size: artifact.len(),
        })
    }
}

/// Keeps delivered artifacts in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    delivered: Mutex<Vec<StatementArtifact>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Artifacts delivered so far, in order
    pub fn delivered(&self) -> Vec<StatementArtifact> {
        match self.delivered.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl ArtifactSink for MemorySink {
    async fn deliver(&self, artifact: &StatementArtifact) -> Result<DeliveryReceipt, ExportError> {
        let mut delivered = match self.delivered.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        delivered.push(artifact.clone());

        Ok(DeliveryReceipt {
            filename: artifact.filename.clone(),
            location: format!("memory:{}", delivered.len() - 1),
            size: artifact.len(),
        })
    }
}
