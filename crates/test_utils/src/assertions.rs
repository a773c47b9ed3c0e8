//! Custom Test Assertions
//!
//! Assertion helpers for comparing statement snapshots with messages that
//! name the part that changed.

use domain_statement::StatementDocument;

/// The top-level parts of a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementPart {
    Recipient,
    StatementInfo,
    Trips,
    Deductions,
    Ytd,
}

impl StatementPart {
    const ALL: [StatementPart; 5] = [
        StatementPart::Recipient,
        StatementPart::StatementInfo,
        StatementPart::Trips,
        StatementPart::Deductions,
        StatementPart::Ytd,
    ];

    fn equal_in(&self, a: &StatementDocument, b: &StatementDocument) -> bool {
        match self {
            StatementPart::Recipient => a.recipient == b.recipient,
            StatementPart::StatementInfo => a.statement_info == b.statement_info,
            StatementPart::Trips => a.trips == b.trips,
            StatementPart::Deductions => a.deductions == b.deductions,
            StatementPart::Ytd => a.ytd == b.ytd,
        }
    }
}

/// Asserts that every part of the statement except `changed` is identical
///
/// # Panics
///
/// Panics naming the first untouched part that differs
pub fn assert_unchanged_except(
    before: &StatementDocument,
    after: &StatementDocument,
    changed: &[StatementPart],
) {
    for part in StatementPart::ALL {
        if changed.contains(&part) {
            continue;
        }
        assert!(
            part.equal_in(before, after),
            "Expected {:?} to be unchanged\n before: {:#?}\n after: {:#?}",
            part,
            before,
            after
        );
    }
}

/// Asserts that the trip numbers of a statement are exactly `expected`, in order
pub fn assert_trip_numbers(doc: &StatementDocument, expected: &[&str]) {
    let actual: Vec<&str> = doc.trips.iter().map(|t| t.trip_number.as_str()).collect();
    assert_eq!(actual, expected, "Trip order mismatch");
}
