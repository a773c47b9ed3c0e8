//! Decimal amount helpers
//!
//! Every numeric field on a statement is a `rust_decimal::Decimal`. Form input
//! arrives as free text, so parsing is lenient: anything that is not a number
//! becomes zero instead of an error. Formatting follows the printed statement,
//! where negative amounts are shown in parentheses.

use rust_decimal::{Decimal, RoundingStrategy};

/// Parses free-form text into a decimal, substituting zero on failure
///
/// Surrounding whitespace is ignored. Both plain (`"1234.5"`) and scientific
/// (`"1.2e3"`) notation are accepted. Empty input, `"NaN"`, and any other
/// unparsable text yield `0`.
pub fn parse_amount_or_zero(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    trimmed
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// Rounds an amount to cents, half away from zero
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount the way the statement prints it
///
/// Positive amounts render as `$1,234.56`; negative amounts render in
/// parentheses, `($37.50)`.
pub fn format_statement_amount(amount: Decimal) -> String {
    let rounded = round_cents(amount.abs());
    let text = format!("{:.2}", rounded);
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let body = format!("${}.{}", group_thousands(whole), cents);

    if amount.is_sign_negative() && !rounded.is_zero() {
        format!("({})", body)
    } else {
        body
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn printed_cents_parse_back(cents in -1_000_000_000i64..1_000_000_000i64) {
            let amount = Decimal::new(cents, 2);
            prop_assert_eq!(parse_amount_or_zero(&amount.to_string()), amount);
        }

        #[test]
        fn alphabetic_input_is_zero(text in "[a-zA-Z]{1,12}") {
            prop_assume!(!text.eq_ignore_ascii_case("e"));
            prop_assert_eq!(parse_amount_or_zero(&text), Decimal::ZERO);
        }
    }
}
