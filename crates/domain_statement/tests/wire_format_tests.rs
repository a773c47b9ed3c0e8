//! Tests for the statement wire representation
//!
//! The rendering service receives the statement as JSON with snake_case
//! field names and numeric amounts written with every digit the model holds.

use domain_statement::{edit, StatementDocument, YtdField};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;
use std::str::FromStr;
use test_utils::{statement_strategy, wide_decimal_strategy, StatementFixtures};

const SEED_WIRE: &str = r#"{
    "recipient": {
        "name": "FITRIGHT LOGISTICS LLC",
        "address_line_1": "3374 FLAMBOROUGH DR",
        "address_line_2": "Orlando, FL 32835"
    },
    "statement_info": {
        "date": "12/12/2025",
        "truck_number": "196"
    },
    "trips": [{
        "date": "12/01/25",
        "trip_number": "1743657425.00",
        "route": "Salem, MA-Murfreesboro, TN",
        "description": "30% of $2,000.00",
        "quantity": 2000.00,
        "rate": 0.3000,
        "amount": 600.00
    }],
    "deductions": [{
        "description": "OCCUPATIONAL ACCIDENTAL INSURANCE",
        "date": "12/04/25",
        "amount": -37.50
    }],
    "ytd": {
        "net": 22801.41,
        "gross": 28826.40
    }
}"#;

mod shape {
    use super::*;

    #[test]
    fn test_seed_serializes_to_expected_shape() {
        let value = serde_json::to_value(StatementFixtures::seed()).unwrap();
        let expected: serde_json::Value = serde_json::from_str(SEED_WIRE).unwrap();

        assert_eq!(value, expected);
    }

    #[test]
    fn test_amounts_are_json_numbers() {
        let text = serde_json::to_string(&StatementFixtures::seed()).unwrap();

        assert!(text.contains(r#""amount":-37.50"#), "{text}");
        assert!(text.contains(r#""rate":0.3000"#), "{text}");
    }

    #[test]
    fn test_integer_and_float_amounts_are_accepted() {
        let doc: StatementDocument =
            serde_json::from_value(json!({ "ytd": { "net": 100, "gross": 250.5 } })).unwrap();

        assert_eq!(doc.ytd.net, dec!(100));
        assert_eq!(doc.ytd.gross, dec!(250.5));
    }
}

mod round_trip {
    use super::*;

    #[test]
    fn test_busy_week_round_trips() {
        let doc = StatementFixtures::busy_week();
        let text = serde_json::to_string(&doc).unwrap();
        let back: StatementDocument = serde_json::from_str(&text).unwrap();

        assert_eq!(back, doc);
    }

    #[test]
    fn test_form_input_beyond_double_precision_round_trips() {
        let doc = edit::set_ytd_field(
            &StatementDocument::default(),
            YtdField::Net,
            "0.12345678901234567891",
        );
        let text = serde_json::to_string(&doc).unwrap();
        let back: StatementDocument = serde_json::from_str(&text).unwrap();

        assert_eq!(back.ytd.net, Decimal::from_str("0.12345678901234567891").unwrap());
        assert_eq!(back, doc);
    }

    #[test]
    fn test_largest_decimal_round_trips() {
        let mut doc = StatementDocument::default();
        doc.ytd.gross = Decimal::MAX;
        doc.ytd.net = Decimal::MIN;

        let text = serde_json::to_string(&doc).unwrap();
        let back: StatementDocument = serde_json::from_str(&text).unwrap();
        assert_eq!(back, doc);
    }
}

proptest! {
    #[test]
    fn wire_round_trip_preserves_values(doc in statement_strategy()) {
        let text = serde_json::to_string(&doc).unwrap();
        let back: StatementDocument = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(back, doc);
    }

    #[test]
    fn any_decimal_survives_the_wire(value in wide_decimal_strategy()) {
        let mut doc = StatementDocument::default();
        doc.ytd.net = value;
        let back: StatementDocument =
            serde_json::from_slice(&serde_json::to_vec(&doc).unwrap()).unwrap();
        prop_assert_eq!(back.ytd.net, value);
    }
}
