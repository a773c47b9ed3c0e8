//! Property-Based Test Generators
//!
//! Proptest strategies for statements, line items, and edit sequences.

use domain_statement::{
    edit, DeductionEdit, DeductionRecord, StatementDocument, StatementError, TripEdit, TripRecord,
};
use proptest::collection::vec;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for amounts with cent precision
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for any decimal the model can hold
///
/// Covers the full 96-bit mantissa and every scale from 0 to 28, so values
/// with far more digits than an `f64` carries are generated.
pub fn wide_decimal_strategy() -> impl Strategy<Value = Decimal> {
    (any::<u32>(), any::<u32>(), any::<u32>(), any::<bool>(), 0u32..=28).prop_map(
        |(lo, mid, hi, negative, scale)| {
            let negative = negative && (lo | mid | hi) != 0;
            Decimal::from_parts(lo, mid, hi, negative, scale)
        },
    )
}

/// Strategy mixing everyday cent amounts with arbitrary decimals
pub fn decimal_strategy() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        3 => amount_strategy(),
        1 => wide_decimal_strategy(),
    ]
}

/// Strategy for rates with four decimal places (0.0000 to 9.9999)
pub fn rate_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000i64).prop_map(|n| Decimal::new(n, 4))
}

/// Strategy for short free-text form values
pub fn text_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,.$%/-]{0,24}"
}

/// Strategy for trip line items
pub fn trip_strategy() -> impl Strategy<Value = TripRecord> {
    (
        text_strategy(),
        text_strategy(),
        text_strategy(),
        text_strategy(),
        decimal_strategy(),
        prop_oneof![rate_strategy(), wide_decimal_strategy()],
        decimal_strategy(),
    )
        .prop_map(|(date, trip_number, route, description, quantity, rate, amount)| TripRecord {
            date,
            trip_number,
            route,
            description,
            quantity,
            rate,
            amount,
        })
}

/// Strategy for deduction line items
pub fn deduction_strategy() -> impl Strategy<Value = DeductionRecord> {
    (text_strategy(), text_strategy(), decimal_strategy()).prop_map(|(description, date, amount)| {
        DeductionRecord {
            description,
            date,
            amount,
        }
    })
}

/// Strategy for whole statements
pub fn statement_strategy() -> impl Strategy<Value = StatementDocument> {
    (
        text_strategy(),
        text_strategy(),
        vec(trip_strategy(), 0..6),
        vec(deduction_strategy(), 0..4),
        decimal_strategy(),
        decimal_strategy(),
    )
        .prop_map(|(name, truck_number, trips, deductions, net, gross)| {
            let mut doc = StatementDocument::default();
            doc.recipient.name = name;
            doc.statement_info.truck_number = truck_number;
            doc.trips = trips;
            doc.deductions = deductions;
            doc.ytd.net = net;
            doc.ytd.gross = gross;
            doc
        })
}

/// Strategy for a single trip edit
pub fn trip_edit_strategy() -> impl Strategy<Value = TripEdit> {
    prop_oneof![
        text_strategy().prop_map(TripEdit::Date),
        text_strategy().prop_map(TripEdit::TripNumber),
        text_strategy().prop_map(TripEdit::Route),
        text_strategy().prop_map(TripEdit::Description),
        amount_strategy().prop_map(TripEdit::Quantity),
        rate_strategy().prop_map(TripEdit::Rate),
        amount_strategy().prop_map(TripEdit::Amount),
    ]
}

/// Strategy for a single deduction edit
pub fn deduction_edit_strategy() -> impl Strategy<Value = DeductionEdit> {
    prop_oneof![
        text_strategy().prop_map(DeductionEdit::Description),
        text_strategy().prop_map(DeductionEdit::Date),
        amount_strategy().prop_map(DeductionEdit::Amount),
    ]
}

/// One step of a trip editing session
#[derive(Debug, Clone)]
pub enum TripOp {
    Add,
    Update(usize, TripEdit),
    Remove(usize),
}

impl TripOp {
    /// Applies the step the way a form would
    ///
    /// Updates aimed at rows that do not exist are skipped, since a form
    /// only offers rows it has rendered.
    pub fn apply(&self, doc: &StatementDocument) -> StatementDocument {
        match self {
            TripOp::Add => edit::add_trip(doc),
            TripOp::Update(index, trip_edit) => {
                match edit::update_trip(doc, *index, trip_edit.clone()) {
                    Ok(next) => next,
                    Err(StatementError::IndexOutOfRange { .. }) => doc.clone(),
                    Err(other) => panic!("unexpected edit error: {other}"),
                }
            }
            TripOp::Remove(index) => edit::remove_trip(doc, *index),
        }
    }
}

/// Strategy for trip editing steps, with indices that sometimes miss
pub fn trip_op_strategy() -> impl Strategy<Value = TripOp> {
    prop_oneof![
        2 => Just(TripOp::Add),
        2 => (0usize..8, trip_edit_strategy()).prop_map(|(i, e)| TripOp::Update(i, e)),
        1 => (0usize..8).prop_map(TripOp::Remove),
    ]
}

/// Strategy for a sequence of trip editing steps
pub fn trip_session_strategy() -> impl Strategy<Value = Vec<TripOp>> {
    vec(trip_op_strategy(), 0..40)
}

/// One step of a deduction editing session
#[derive(Debug, Clone)]
pub enum DeductionOp {
    Add,
    Update(usize, DeductionEdit),
    Remove(usize),
}

impl DeductionOp {
    /// Applies the step the way a form would, skipping updates to missing rows
    pub fn apply(&self, doc: &StatementDocument) -> StatementDocument {
        match self {
            DeductionOp::Add => edit::add_deduction(doc),
            DeductionOp::Update(index, deduction_edit) => {
                match edit::update_deduction(doc, *index, deduction_edit.clone()) {
                    Ok(next) => next,
                    Err(StatementError::IndexOutOfRange { .. }) => doc.clone(),
                    Err(other) => panic!("unexpected edit error: {other}"),
                }
            }
            DeductionOp::Remove(index) => edit::remove_deduction(doc, *index),
        }
    }
}

/// Strategy for deduction editing steps, with indices that sometimes miss
pub fn deduction_op_strategy() -> impl Strategy<Value = DeductionOp> {
    prop_oneof![
        2 => Just(DeductionOp::Add),
        2 => (0usize..8, deduction_edit_strategy()).prop_map(|(i, e)| DeductionOp::Update(i, e)),
        1 => (0usize..8).prop_map(DeductionOp::Remove),
    ]
}

/// Strategy for a sequence of deduction editing steps
pub fn deduction_session_strategy() -> impl Strategy<Value = Vec<DeductionOp>> {
    vec(deduction_op_strategy(), 0..40)
}
