//! Statement session
//!
//! One session owns one statement and the pipeline that exports it. Edits
//! replace the owned document with the edited copy; exports work from a
//! snapshot and never change it.

use std::sync::Arc;

use tracing::info;

use domain_export::{
    ArtifactSink, DeliveryReceipt, ExportError, ExportPipeline, ExportState, StatementArtifact,
};
use domain_statement::{
    edit, DeductionEdit, InfoField, RecipientField, StatementDocument, StatementError,
    StatementSummary, TripEdit, YtdField,
};

/// A user's statement and its export pipeline
#[derive(Debug)]
pub struct StatementSession {
    document: StatementDocument,
    pipeline: Arc<ExportPipeline>,
}

impl StatementSession {
    /// Starts a session from the seed statement dated today
    pub fn new(pipeline: Arc<ExportPipeline>) -> Self {
        Self::with_document(StatementDocument::seed(), pipeline)
    }

    /// Starts a session from an existing statement
    pub fn with_document(document: StatementDocument, pipeline: Arc<ExportPipeline>) -> Self {
        info!(
            truck_number = %document.statement_info.truck_number,
            trips = document.trips.len(),
            deductions = document.deductions.len(),
            "Statement session started"
        );
        Self { document, pipeline }
    }

    /// The current statement
    pub fn document(&self) -> &StatementDocument {
        &self.document
    }

    pub fn export_state(&self) -> ExportState {
        self.pipeline.state()
    }

    /// Totals as the rendered statement would print them
    pub fn summary(&self) -> StatementSummary {
        StatementSummary::of(&self.document)
    }

    pub fn set_recipient_field(&mut self, field: RecipientField, value: &str) {
        self.document = edit::set_recipient_field(&self.document, field, value);
    }

    pub fn set_info_field(&mut self, field: InfoField, value: &str) {
        self.document = edit::set_info_field(&self.document, field, value);
    }

    pub fn set_ytd_field(&mut self, field: YtdField, value: &str) {
        self.document = edit::set_ytd_field(&self.document, field, value);
    }

    pub fn add_trip(&mut self) {
        self.document = edit::add_trip(&self.document);
    }

    pub fn update_trip(&mut self, index: usize, trip_edit: TripEdit) -> Result<(), StatementError> {
        self.document = edit::update_trip(&self.document, index, trip_edit)?;
        Ok(())
    }

    pub fn remove_trip(&mut self, index: usize) {
        self.document = edit::remove_trip(&self.document, index);
    }

    pub fn add_deduction(&mut self) {
        self.document = edit::add_deduction(&self.document);
    }

    pub fn update_deduction(
        &mut self,
        index: usize,
        deduction_edit: DeductionEdit,
    ) -> Result<(), StatementError> {
        self.document = edit::update_deduction(&self.document, index, deduction_edit)?;
        Ok(())
    }

    pub fn remove_deduction(&mut self, index: usize) {
        self.document = edit::remove_deduction(&self.document, index);
    }

    /// Renders the current statement
    pub async fn export(&self) -> Result<StatementArtifact, ExportError> {
        self.pipeline.export(&self.document).await
    }

    /// Renders the current statement and delivers it
    pub async fn export_to(&self, sink: &dyn ArtifactSink) -> Result<DeliveryReceipt, ExportError> {
        self.pipeline.export_to(&self.document, sink).await
    }
}
