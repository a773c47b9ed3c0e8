//! Statement model
//!
//! The aggregate root and its parts. Every field is always present: partial
//! input is represented with empty strings and zero amounts, never with
//! `Option`. Amounts serialize as JSON numbers written with every digit the
//! decimal holds, so a statement read back from its wire form is identical.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Who the statement is addressed to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipientInfo {
    pub name: String,
    pub address_line_1: String,
    pub address_line_2: String,
}

/// Statement header metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementInfo {
    /// Free text, usually a locale-formatted date such as `12/12/2025`
    pub date: String,
    pub truck_number: String,
}

/// One billable movement
///
/// `amount` is recorded as entered; it is never derived from
/// `quantity × rate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripRecord {
    pub date: String,
    pub trip_number: String,
    pub route: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub rate: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
}

/// One subtractive line item
///
/// Deductions are conventionally negative (`-37.50`) but the sign is not
/// enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeductionRecord {
    pub description: String,
    pub date: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
}

/// Year-to-date cumulative totals, independent of the listed line items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YtdTotals {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub net: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub gross: Decimal,
}

/// The pay statement aggregate root
///
/// `Default` is the blank statement; `seed` is the pre-filled statement a
/// new session starts from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementDocument {
    pub recipient: RecipientInfo,
    pub statement_info: StatementInfo,
    pub trips: Vec<TripRecord>,
    pub deductions: Vec<DeductionRecord>,
    pub ytd: YtdTotals,
}

impl StatementDocument {
    /// Creates the seed statement dated today (local time)
    pub fn seed() -> Self {
        Self::seed_on(Local::now().date_naive())
    }

    /// Creates the seed statement with an explicit statement date
    ///
    /// The date is written the way a US-locale form shows it: `M/D/YYYY`
    /// without zero padding.
    pub fn seed_on(date: NaiveDate) -> Self {
        Self {
            recipient: RecipientInfo {
                name: "FITRIGHT LOGISTICS LLC".to_string(),
                address_line_1: "3374 FLAMBOROUGH DR".to_string(),
                address_line_2: "Orlando, FL 32835".to_string(),
            },
            statement_info: StatementInfo {
                date: format_form_date(date),
                truck_number: "196".to_string(),
            },
            trips: vec![TripRecord {
                date: "12/01/25".to_string(),
                trip_number: "1743657425.00".to_string(),
                route: "Salem, MA-Murfreesboro, TN".to_string(),
                description: "30% of $2,000.00".to_string(),
                quantity: dec!(2000.00),
                rate: dec!(0.3000),
                amount: dec!(600.00),
            }],
            deductions: vec![DeductionRecord {
                description: "OCCUPATIONAL ACCIDENTAL INSURANCE".to_string(),
                date: "12/04/25".to_string(),
                amount: dec!(-37.50),
            }],
            ytd: YtdTotals {
                net: dec!(22801.41),
                gross: dec!(28826.40),
            },
        }
    }
}

/// Formats a date as `M/D/YYYY`
pub fn format_form_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
