//! Field identifiers and typed edits
//!
//! Edits address fields through closed enumerations instead of free-form
//! names. Each identifier still round-trips through its wire name so a
//! text-driven caller (a form, a command line) can resolve a field by name.

use std::fmt;
use std::str::FromStr;

use core_kernel::parse_amount_or_zero;
use rust_decimal::Decimal;

use crate::error::StatementError;
use crate::model::{DeductionRecord, TripRecord};

macro_rules! field_names {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Every field, in form order
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// The wire name of this field
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = StatementError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok($ty::$variant),)+
                    other => Err(StatementError::UnknownField {
                        kind: $kind,
                        name: other.to_string(),
                    }),
                }
            }
        }
    };
}

/// Fields of `RecipientInfo`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipientField {
    Name,
    AddressLine1,
    AddressLine2,
}

field_names!(RecipientField, "recipient", {
    Name => "name",
    AddressLine1 => "address_line_1",
    AddressLine2 => "address_line_2",
});

/// Fields of `StatementInfo`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoField {
    Date,
    TruckNumber,
}

field_names!(InfoField, "statement_info", {
    Date => "date",
    TruckNumber => "truck_number",
});

/// Fields of `YtdTotals`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YtdField {
    Net,
    Gross,
}

field_names!(YtdField, "ytd", {
    Net => "net",
    Gross => "gross",
});

/// Fields of `TripRecord`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TripField {
    Date,
    TripNumber,
    Route,
    Description,
    Quantity,
    Rate,
    Amount,
}

field_names!(TripField, "trip", {
    Date => "date",
    TripNumber => "trip_number",
    Route => "route",
    Description => "description",
    Quantity => "quantity",
    Rate => "rate",
    Amount => "amount",
});

impl TripField {
    /// Returns true for the decimal-valued fields
    pub fn is_numeric(&self) -> bool {
        matches!(self, TripField::Quantity | TripField::Rate | TripField::Amount)
    }
}

/// Fields of `DeductionRecord`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeductionField {
    Description,
    Date,
    Amount,
}

field_names!(DeductionField, "deduction", {
    Description => "description",
    Date => "date",
    Amount => "amount",
});

impl DeductionField {
    /// Returns true for the decimal-valued fields
    pub fn is_numeric(&self) -> bool {
        matches!(self, DeductionField::Amount)
    }
}

/// A replacement value for one field of a trip
///
/// Text fields carry raw text; numeric fields carry an already parsed
/// decimal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripEdit {
    Date(String),
    TripNumber(String),
    Route(String),
    Description(String),
    Quantity(Decimal),
    Rate(Decimal),
    Amount(Decimal),
}

impl TripEdit {
    /// Builds an edit from raw form text
    ///
    /// Numeric fields go through the lenient parser, so unparsable text
    /// becomes zero.
    pub fn from_input(field: TripField, raw: &str) -> Self {
        match field {
            TripField::Date => TripEdit::Date(raw.to_string()),
            TripField::TripNumber => TripEdit::TripNumber(raw.to_string()),
            TripField::Route => TripEdit::Route(raw.to_string()),
            TripField::Description => TripEdit::Description(raw.to_string()),
            TripField::Quantity => TripEdit::Quantity(parse_amount_or_zero(raw)),
            TripField::Rate => TripEdit::Rate(parse_amount_or_zero(raw)),
            TripField::Amount => TripEdit::Amount(parse_amount_or_zero(raw)),
        }
    }

    /// The field this edit replaces
    pub fn field(&self) -> TripField {
        match self {
            TripEdit::Date(_) => TripField::Date,
            TripEdit::TripNumber(_) => TripField::TripNumber,
            TripEdit::Route(_) => TripField::Route,
            TripEdit::Description(_) => TripField::Description,
            TripEdit::Quantity(_) => TripField::Quantity,
            TripEdit::Rate(_) => TripField::Rate,
            TripEdit::Amount(_) => TripField::Amount,
        }
    }

    pub(crate) fn apply_to(self, trip: &mut TripRecord) {
        match self {
            TripEdit::Date(v) => trip.date = v,
            TripEdit::TripNumber(v) => trip.trip_number = v,
            TripEdit::Route(v) => trip.route = v,
            TripEdit::Description(v) => trip.description = v,
            TripEdit::Quantity(v) => trip.quantity = v,
            TripEdit::Rate(v) => trip.rate = v,
            TripEdit::Amount(v) => trip.amount = v,
        }
    }
}

/// A replacement value for one field of a deduction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeductionEdit {
    Description(String),
    Date(String),
    Amount(Decimal),
}

impl DeductionEdit {
    /// Builds an edit from raw form text
    pub fn from_input(field: DeductionField, raw: &str) -> Self {
        match field {
            DeductionField::Description => DeductionEdit::Description(raw.to_string()),
            DeductionField::Date => DeductionEdit::Date(raw.to_string()),
            DeductionField::Amount => DeductionEdit::Amount(parse_amount_or_zero(raw)),
        }
    }

    /// The field this edit replaces
    pub fn field(&self) -> DeductionField {
        match self {
            DeductionEdit::Description(_) => DeductionField::Description,
            DeductionEdit::Date(_) => DeductionField::Date,
            DeductionEdit::Amount(_) => DeductionField::Amount,
        }
    }

    pub(crate) fn apply_to(self, deduction: &mut DeductionRecord) {
        match self {
            DeductionEdit::Description(v) => deduction.description = v,
            DeductionEdit::Date(v) => deduction.date = v,
            DeductionEdit::Amount(v) => deduction.amount = v,
        }
    }
}
