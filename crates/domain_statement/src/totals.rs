//! Derived totals
//!
//! Read-only figures computed from a statement: the same trip total,
//! deduction total, and check amount the rendered document prints. Nothing
//! here modifies the model. Mismatches between `quantity × rate` and the
//! recorded amount are reported, not corrected.

use core_kernel::round_cents;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::model::StatementDocument;

/// Sum of all trip amounts
pub fn trips_total(doc: &StatementDocument) -> Decimal {
    doc.trips.iter().map(|t| t.amount).sum()
}

/// Signed sum of all deduction amounts
pub fn deductions_total(doc: &StatementDocument) -> Decimal {
    doc.deductions.iter().map(|d| d.amount).sum()
}

/// Trips total plus the signed deductions total
///
/// Deductions are added as recorded; a deduction entered as a positive
/// number increases the check amount.
pub fn check_amount(doc: &StatementDocument) -> Decimal {
    trips_total(doc) + deductions_total(doc)
}

/// A trip whose recorded amount differs from `quantity × rate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmountMismatch {
    /// Position of the trip in the statement
    pub index: usize,
    /// `quantity × rate`, rounded to cents
    pub expected: Decimal,
    /// The amount as entered
    pub recorded: Decimal,
}

/// Lists trips where the recorded amount disagrees with `quantity × rate`
///
/// Both sides are compared at cent precision.
pub fn amount_mismatches(doc: &StatementDocument) -> Vec<AmountMismatch> {
    doc.trips
        .iter()
        .enumerate()
        .filter_map(|(index, trip)| {
            let expected = round_cents(trip.quantity * trip.rate);
            if round_cents(trip.amount) == expected {
                None
            } else {
                Some(AmountMismatch {
                    index,
                    expected,
                    recorded: trip.amount,
                })
            }
        })
        .collect()
}

/// Every derived figure of a statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementSummary {
    pub trips_total: Decimal,
    pub deductions_total: Decimal,
    pub check_amount: Decimal,
    pub ytd_net: Decimal,
    pub ytd_gross: Decimal,
    pub mismatches: Vec<AmountMismatch>,
}

impl StatementSummary {
    /// Computes the summary of a statement
    pub fn of(doc: &StatementDocument) -> Self {
        let trips_total = trips_total(doc);
        let deductions_total = deductions_total(doc);

        Self {
            trips_total,
            deductions_total,
            check_amount: trips_total + deductions_total,
            ytd_net: doc.ytd.net,
            ytd_gross: doc.ytd.gross,
            mismatches: amount_mismatches(doc),
        }
    }

    /// Returns true if the YTD net exceeds the YTD gross
    pub fn ytd_net_exceeds_gross(&self) -> bool {
        self.ytd_net > self.ytd_gross
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit;
    use crate::fields::TripEdit;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn seed() -> StatementDocument {
        StatementDocument::seed_on(NaiveDate::from_ymd_opt(2025, 12, 12).unwrap())
    }

    #[test]
    fn test_seed_totals() {
        let summary = StatementSummary::of(&seed());
        assert_eq!(summary.trips_total, dec!(600.00));
        assert_eq!(summary.deductions_total, dec!(-37.50));
        assert_eq!(summary.check_amount, dec!(562.50));
        assert!(summary.mismatches.is_empty());
        assert!(!summary.ytd_net_exceeds_gross());
    }

    #[test]
    fn test_empty_statement_totals_are_zero() {
        let doc = StatementDocument::default();
        assert!(trips_total(&doc).is_zero());
        assert!(deductions_total(&doc).is_zero());
        assert!(check_amount(&doc).is_zero());
    }

    #[test]
    fn test_positive_deduction_is_added_as_recorded() {
        let doc = edit::update_deduction(
            &seed(),
            0,
            crate::fields::DeductionEdit::Amount(dec!(37.50)),
        )
        .unwrap();
        assert_eq!(check_amount(&doc), dec!(637.50));
    }

    #[test]
    fn test_mismatch_is_reported_not_fixed() {
        let doc = edit::update_trip(&seed(), 0, TripEdit::Amount(dec!(550))).unwrap();
        let mismatches = amount_mismatches(&doc);

        assert_eq!(
            mismatches,
            vec![AmountMismatch {
                index: 0,
                expected: dec!(600.00),
                recorded: dec!(550),
            }]
        );
        assert_eq!(doc.trips[0].amount, dec!(550));
    }

    #[test]
    fn test_mismatch_ignores_sub_cent_noise() {
        let doc = edit::update_trip(&seed(), 0, TripEdit::Amount(dec!(600.004))).unwrap();
        assert!(amount_mismatches(&doc).is_empty());
    }

    #[test]
    fn test_blank_trip_is_consistent() {
        let doc = edit::add_trip(&StatementDocument::default());
        assert!(amount_mismatches(&doc).is_empty());
    }

    #[test]
    fn test_ytd_net_exceeds_gross_is_surfaced() {
        let doc = edit::set_ytd_field(&seed(), crate::fields::YtdField::Net, "99999");
        assert!(StatementSummary::of(&doc).ytd_net_exceeds_gross());
    }
}
