//! Test Data Builders
//!
//! Builder patterns for constructing statements with sensible defaults.
//! Tests specify only the fields they care about.

use domain_statement::{
    DeductionRecord, RecipientInfo, StatementDocument, StatementInfo, TripRecord, YtdTotals,
};
use rust_decimal::Decimal;

use crate::fixtures::StatementFixtures;

/// Builder for trip line items
#[derive(Debug, Clone, Default)]
pub struct TripBuilder {
    trip: TripRecord,
}

impl TripBuilder {
    /// Creates a builder for a blank trip
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the trip number
    pub fn trip_number(mut self, number: impl Into<String>) -> Self {
        self.trip.trip_number = number.into();
        self
    }

    /// Sets the trip date
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.trip.date = date.into();
        self
    }

    /// Sets the route
    pub fn route(mut self, route: impl Into<String>) -> Self {
        self.trip.route = route.into();
        self
    }

    /// Sets quantity and rate, and records their product as the amount
    pub fn priced(mut self, quantity: Decimal, rate: Decimal) -> Self {
        self.trip.quantity = quantity;
        self.trip.rate = rate;
        self.trip.amount = quantity * rate;
        self
    }

    /// Overrides the recorded amount
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.trip.amount = amount;
        self
    }

    /// Builds the trip
    pub fn build(self) -> TripRecord {
        self.trip
    }
}

/// Builder for deduction line items
#[derive(Debug, Clone, Default)]
pub struct DeductionBuilder {
    deduction: DeductionRecord,
}

impl DeductionBuilder {
    /// Creates a builder for a blank deduction
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.deduction.description = description.into();
        self
    }

    /// Sets the date
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.deduction.date = date.into();
        self
    }

    /// Sets the amount
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.deduction.amount = amount;
        self
    }

    /// Builds the deduction
    pub fn build(self) -> DeductionRecord {
        self.deduction
    }
}

/// Builder for whole statements
#[derive(Debug, Clone)]
pub struct StatementBuilder {
    doc: StatementDocument,
}

impl Default for StatementBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementBuilder {
    /// Starts from a blank statement
    pub fn new() -> Self {
        Self {
            doc: StatementFixtures::blank(),
        }
    }

    /// Sets the recipient
    pub fn recipient(mut self, recipient: RecipientInfo) -> Self {
        self.doc.recipient = recipient;
        self
    }

    /// Sets the statement date and truck number
    pub fn info(mut self, date: impl Into<String>, truck_number: impl Into<String>) -> Self {
        self.doc.statement_info = StatementInfo {
            date: date.into(),
            truck_number: truck_number.into(),
        };
        self
    }

    /// Appends a trip
    pub fn trip(mut self, trip: TripRecord) -> Self {
        self.doc.trips.push(trip);
        self
    }

    /// Appends a deduction
    pub fn deduction(mut self, deduction: DeductionRecord) -> Self {
        self.doc.deductions.push(deduction);
        self
    }

    /// Sets the year-to-date totals
    pub fn ytd(mut self, net: Decimal, gross: Decimal) -> Self {
        self.doc.ytd = YtdTotals { net, gross };
        self
    }

    /// Builds the statement
    pub fn build(self) -> StatementDocument {
        self.doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_priced_trip_records_product() {
        let trip = TripBuilder::new().priced(dec!(2000), dec!(0.3)).build();
        assert_eq!(trip.amount, dec!(600));
    }

    #[test]
    fn test_statement_builder_appends_in_order() {
        let doc = StatementBuilder::new()
            .trip(TripBuilder::new().trip_number("A").build())
            .trip(TripBuilder::new().trip_number("B").build())
            .build();

        assert_eq!(doc.trips[0].trip_number, "A");
        assert_eq!(doc.trips[1].trip_number, "B");
    }

    #[test]
    fn test_statement_builder_sets_every_section() {
        let doc = StatementBuilder::new()
            .recipient(crate::random_recipient())
            .info("01/09/2026", "204")
            .trip(
                TripBuilder::new()
                    .date("01/05/2026")
                    .route("GREELEY, CO - AMARILLO, TX")
                    .amount(dec!(1250.00))
                    .build(),
            )
            .deduction(DeductionBuilder::new().date("01/09/2026").amount(dec!(-20)).build())
            .ytd(dec!(1000.00), dec!(1500.00))
            .build();

        assert!(!doc.recipient.name.is_empty());
        assert_eq!(doc.statement_info.truck_number, "204");
        assert_eq!(doc.trips[0].route, "GREELEY, CO - AMARILLO, TX");
        assert_eq!(doc.trips[0].date, "01/05/2026");
        assert_eq!(doc.deductions[0].date, "01/09/2026");
        assert_eq!(doc.ytd.gross, dec!(1500.00));
    }
}
