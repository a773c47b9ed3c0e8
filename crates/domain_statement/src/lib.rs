//! Statement Domain - Pay Statement Model and Edit Engine
//!
//! This crate holds the in-memory pay statement and every operation that
//! changes it. A statement is an aggregate of recipient identity, statement
//! metadata, two ordered line-item collections (trips and deductions), and
//! year-to-date totals.
//!
//! # Edit Discipline
//!
//! Edits never mutate their input. Each operation takes the current document
//! by reference and returns a new one, so callers can keep earlier snapshots
//! for undo or change detection:
//!
//! ```rust
//! use domain_statement::{edit, StatementDocument, TripEdit, YtdField};
//! use rust_decimal_macros::dec;
//!
//! let doc = StatementDocument::default();
//! let doc = edit::add_trip(&doc);
//! let doc = edit::update_trip(&doc, 0, TripEdit::Amount(dec!(600))).unwrap();
//! let doc = edit::set_ytd_field(&doc, YtdField::Gross, "not-a-number");
//!
//! assert_eq!(doc.trips[0].amount, dec!(600));
//! assert!(doc.ytd.gross.is_zero());
//! ```
//!
//! # Relaxed Invariants
//!
//! `amount = quantity × rate` and `net ≤ gross` are deliberately not
//! enforced. The `totals` module can report where they do not hold.

pub mod model;
pub mod fields;
pub mod edit;
pub mod totals;
pub mod error;

pub use model::{
    StatementDocument, RecipientInfo, StatementInfo, TripRecord, DeductionRecord, YtdTotals,
};
pub use fields::{
    RecipientField, InfoField, YtdField, TripField, DeductionField, TripEdit, DeductionEdit,
};
pub use totals::{StatementSummary, AmountMismatch};
pub use error::{StatementError, LineCollection};
