//! Pre-built Test Fixtures
//!
//! Ready-to-use statements and line items. Dates are fixed so fixtures are
//! stable across runs.

use chrono::NaiveDate;
use domain_statement::{DeductionRecord, RecipientInfo, StatementDocument, TripRecord};
use fake::faker::address::en::{CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::company::en::CompanyName;
use fake::Fake;
use rust_decimal_macros::dec;

/// Fixture for statement test data
pub struct StatementFixtures;

impl StatementFixtures {
    /// The statement date used by every fixture (Dec 12, 2025)
    pub fn statement_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 12).expect("valid fixture date")
    }

    /// The seed statement dated `statement_date()`
    pub fn seed() -> StatementDocument {
        StatementDocument::seed_on(Self::statement_date())
    }

    /// A statement with nothing filled in
    pub fn blank() -> StatementDocument {
        StatementDocument::default()
    }

    /// The seed statement with two more trips and one more deduction
    pub fn busy_week() -> StatementDocument {
        let mut doc = Self::seed();
        doc.trips.push(TripFixtures::linehaul());
        doc.trips.push(TripFixtures::short_haul());
        doc.deductions.push(DeductionFixtures::fuel_advance());
        doc
    }
}

/// Fixture for trip line items
pub struct TripFixtures;

impl TripFixtures {
    /// A percentage-of-revenue linehaul trip
    pub fn linehaul() -> TripRecord {
        TripRecord {
            date: "12/08/25".to_string(),
            trip_number: "1743657499.00".to_string(),
            route: "Hanover Park, IL-Columbus, OH".to_string(),
            description: "30% of $1,500.00".to_string(),
            quantity: dec!(1500.00),
            rate: dec!(0.3000),
            amount: dec!(450.00),
        }
    }

    /// A flat-rate short haul trip
    pub fn short_haul() -> TripRecord {
        TripRecord {
            date: "12/09/25".to_string(),
            trip_number: "1743657510.00".to_string(),
            route: "Elgin, IL-Aurora, IL".to_string(),
            description: "Flat".to_string(),
            quantity: dec!(1),
            rate: dec!(175.00),
            amount: dec!(175.00),
        }
    }
}

/// Fixture for deduction line items
pub struct DeductionFixtures;

impl DeductionFixtures {
    /// A fuel advance deduction
    pub fn fuel_advance() -> DeductionRecord {
        DeductionRecord {
            description: "FUEL ADVANCE".to_string(),
            date: "12/10/25".to_string(),
            amount: dec!(-120.00),
        }
    }
}

/// Generates a plausible random recipient
pub fn random_recipient() -> RecipientInfo {
    let street: String = StreetName().fake();
    let city: String = CityName().fake();
    let state: String = StateAbbr().fake();
    let zip: String = ZipCode().fake();

    RecipientInfo {
        name: CompanyName().fake::<String>().to_uppercase(),
        address_line_1: format!("{} {}", (100..9999).fake::<u32>(), street.to_uppercase()),
        address_line_2: format!("{}, {} {}", city, state, zip),
    }
}
