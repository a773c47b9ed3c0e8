//! Edit engine
//!
//! Pure functions over the statement aggregate. Every operation borrows the
//! current document and returns a freshly built one; the input is never
//! touched and the output shares no container with it.
//!
//! Numeric text goes through `core_kernel::parse_amount_or_zero`, so a bad
//! keystroke can never put an error or a non-number into the model. Row
//! removal is positional and silently ignores indices that do not exist.
//! Row updates return `StatementError::IndexOutOfRange` instead, because
//! writing to a row the caller never saw is a caller bug.

use core_kernel::parse_amount_or_zero;
use tracing::debug;

use crate::error::{LineCollection, StatementError};
use crate::fields::{DeductionEdit, InfoField, RecipientField, TripEdit, YtdField};
use crate::model::{DeductionRecord, StatementDocument, TripRecord};

/// Replaces one recipient field
pub fn set_recipient_field(
    doc: &StatementDocument,
    field: RecipientField,
    value: &str,
) -> StatementDocument {
    let mut next = doc.clone();
    let slot = match field {
        RecipientField::Name => &mut next.recipient.name,
        RecipientField::AddressLine1 => &mut next.recipient.address_line_1,
        RecipientField::AddressLine2 => &mut next.recipient.address_line_2,
    };
    *slot = value.to_string();

    debug!(%field, "Recipient field updated");
    next
}

/// Replaces one statement info field
pub fn set_info_field(doc: &StatementDocument, field: InfoField, value: &str) -> StatementDocument {
    let mut next = doc.clone();
    let slot = match field {
        InfoField::Date => &mut next.statement_info.date,
        InfoField::TruckNumber => &mut next.statement_info.truck_number,
    };
    *slot = value.to_string();

    debug!(%field, "Statement info field updated");
    next
}

/// Replaces one year-to-date total from raw text
///
/// Unparsable text stores zero.
pub fn set_ytd_field(doc: &StatementDocument, field: YtdField, value: &str) -> StatementDocument {
    let amount = parse_amount_or_zero(value);
    let mut next = doc.clone();
    match field {
        YtdField::Net => next.ytd.net = amount,
        YtdField::Gross => next.ytd.gross = amount,
    }

    debug!(%field, %amount, "YTD total updated");
    next
}

/// Appends a blank trip
pub fn add_trip(doc: &StatementDocument) -> StatementDocument {
    let mut next = doc.clone();
    next.trips.push(TripRecord::default());

    debug!(count = next.trips.len(), "Trip added");
    next
}

/// Replaces one field of the trip at `index`
pub fn update_trip(
    doc: &StatementDocument,
    index: usize,
    edit: TripEdit,
) -> Result<StatementDocument, StatementError> {
    check_index(LineCollection::Trips, index, doc.trips.len())?;

    let field = edit.field();
    let mut next = doc.clone();
    edit.apply_to(&mut next.trips[index]);

    debug!(index, %field, "Trip updated");
    Ok(next)
}

/// Removes the trip at `index`, or returns an equal document if there is none
pub fn remove_trip(doc: &StatementDocument, index: usize) -> StatementDocument {
    let mut next = doc.clone();
    if index < next.trips.len() {
        next.trips.remove(index);
        debug!(index, count = next.trips.len(), "Trip removed");
    } else {
        debug!(index, count = next.trips.len(), "Trip removal ignored, no such row");
    }
    next
}

/// Appends a blank deduction
pub fn add_deduction(doc: &StatementDocument) -> StatementDocument {
    let mut next = doc.clone();
    next.deductions.push(DeductionRecord::default());

    debug!(count = next.deductions.len(), "Deduction added");
    next
}

/// Replaces one field of the deduction at `index`
pub fn update_deduction(
    doc: &StatementDocument,
    index: usize,
    edit: DeductionEdit,
) -> Result<StatementDocument, StatementError> {
    check_index(LineCollection::Deductions, index, doc.deductions.len())?;

    let field = edit.field();
    let mut next = doc.clone();
    edit.apply_to(&mut next.deductions[index]);

    debug!(index, %field, "Deduction updated");
    Ok(next)
}

/// Removes the deduction at `index`, or returns an equal document if there is none
pub fn remove_deduction(doc: &StatementDocument, index: usize) -> StatementDocument {
    let mut next = doc.clone();
    if index < next.deductions.len() {
        next.deductions.remove(index);
        debug!(index, count = next.deductions.len(), "Deduction removed");
    } else {
        debug!(index, count = next.deductions.len(), "Deduction removal ignored, no such row");
    }
    next
}

fn check_index(collection: LineCollection, index: usize, len: usize) -> Result<(), StatementError> {
    if index < len {
        Ok(())
    } else {
        Err(StatementError::IndexOutOfRange { collection, index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn seed() -> StatementDocument {
        StatementDocument::seed_on(NaiveDate::from_ymd_opt(2025, 12, 12).unwrap())
    }

    #[test]
    fn test_set_recipient_field_leaves_input_untouched() {
        let doc = seed();
        let next = set_recipient_field(&doc, RecipientField::Name, "ACME HAULING");

        assert_eq!(next.recipient.name, "ACME HAULING");
        assert_eq!(doc.recipient.name, "FITRIGHT LOGISTICS LLC");
        assert_eq!(next.recipient.address_line_1, doc.recipient.address_line_1);
    }

    #[test]
    fn test_set_info_field() {
        let next = set_info_field(&seed(), InfoField::TruckNumber, "204");
        assert_eq!(next.statement_info.truck_number, "204");
    }

    #[test]
    fn test_set_ytd_field_parses_or_zeroes() {
        let doc = seed();

        let next = set_ytd_field(&doc, YtdField::Gross, "1234.5");
        assert_eq!(next.ytd.gross, dec!(1234.5));
        assert_eq!(next.ytd.net, doc.ytd.net);

        let next = set_ytd_field(&doc, YtdField::Net, "not-a-number");
        assert_eq!(next.ytd.net, Decimal::ZERO);
        assert_eq!(next.ytd.gross, doc.ytd.gross);
    }

    #[test]
    fn test_add_trip_appends_blank_row() {
        let next = add_trip(&seed());
        assert_eq!(next.trips.len(), 2);
        assert_eq!(next.trips[1], TripRecord::default());
    }

    #[test]
    fn test_update_trip_replaces_one_field() {
        let doc = seed();
        let next = update_trip(&doc, 0, TripEdit::Route("Boston, MA-Austin, TX".into())).unwrap();

        assert_eq!(next.trips[0].route, "Boston, MA-Austin, TX");
        assert_eq!(next.trips[0].amount, doc.trips[0].amount);
        assert_eq!(doc.trips[0].route, "Salem, MA-Murfreesboro, TN");
    }

    #[test]
    fn test_update_trip_does_not_recompute_amount() {
        let next = update_trip(&seed(), 0, TripEdit::Quantity(dec!(10))).unwrap();
        assert_eq!(next.trips[0].amount, dec!(600.00));
    }

    #[test]
    fn test_update_trip_out_of_range() {
        let err = update_trip(&seed(), 3, TripEdit::Amount(dec!(1))).unwrap_err();
        assert_eq!(
            err,
            StatementError::IndexOutOfRange {
                collection: LineCollection::Trips,
                index: 3,
                len: 1,
            }
        );
    }

    #[test]
    fn test_remove_trip_out_of_range_is_noop() {
        let doc = seed();
        assert_eq!(remove_trip(&doc, 1), doc);
        assert_eq!(remove_trip(&doc, usize::MAX), doc);
    }

    #[test]
    fn test_remove_trip_preserves_order() {
        let doc = seed();
        let doc = update_trip(&add_trip(&doc), 1, TripEdit::TripNumber("B".into())).unwrap();
        let doc = update_trip(&add_trip(&doc), 2, TripEdit::TripNumber("C".into())).unwrap();

        let next = remove_trip(&doc, 0);
        let numbers: Vec<_> = next.trips.iter().map(|t| t.trip_number.as_str()).collect();
        assert_eq!(numbers, vec!["B", "C"]);
    }

    #[test]
    fn test_deduction_operations_mirror_trips() {
        let doc = add_deduction(&seed());
        assert_eq!(doc.deductions.len(), 2);

        let doc = update_deduction(&doc, 1, DeductionEdit::Amount(dec!(-12.25))).unwrap();
        assert_eq!(doc.deductions[1].amount, dec!(-12.25));

        assert!(update_deduction(&doc, 2, DeductionEdit::Date("1/1/26".into())).is_err());

        let doc = remove_deduction(&doc, 0);
        assert_eq!(doc.deductions.len(), 1);
        assert_eq!(doc.deductions[0].amount, dec!(-12.25));
        assert_eq!(remove_deduction(&doc, 5), doc);
    }

    #[test]
    fn test_seed_add_trip_then_remove_deduction() {
        let doc = seed();
        let next = remove_deduction(&add_trip(&doc), 0);

        assert_eq!(next.trips.len(), 2);
        assert!(next.deductions.is_empty());
        assert_eq!(next.recipient, doc.recipient);
        assert_eq!(next.statement_info, doc.statement_info);
        assert_eq!(next.ytd, doc.ytd);
    }
}
