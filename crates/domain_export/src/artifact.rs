//! Rendered statement artifacts

use bytes::Bytes;
use domain_statement::StatementDocument;

/// Content type assumed when the renderer does not send one
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// A rendered statement ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementArtifact {
    /// Suggested file name
    pub filename: String,
    /// Media type of `bytes`
    pub content_type: String,
    /// Document content exactly as the renderer returned it
    pub bytes: Bytes,
    /// Endpoint that produced the document
    pub endpoint: String,
}

impl StatementArtifact {
    /// Size of the document in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Derives the download name for a statement
///
/// `statement_{truck_number}_{date}.pdf` with every `/` in the date replaced
/// by `-`. Other characters are kept as entered, so a truck number
/// containing a path separator yields a name `DirectorySink` refuses.
pub fn artifact_filename(doc: &StatementDocument) -> String {
    format!(
        "statement_{}_{}.pdf",
        doc.statement_info.truck_number,
        doc.statement_info.date.replace('/', "-")
    )
}
