use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a COP amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for amount parsing: trims whitespace, drops an optional
/// leading `$`, and removes commas (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    s.trim().trim_start_matches('$').trim().replace(',', "")
}

/// Parses a string into a COP amount.
///
/// Handles comma as thousands separator (e.g. `"1,000,000,000"`) and an
/// optional `$` prefix. Empty or whitespace-only input is treated as 0.
/// Returns an error and logs when the input is invalid (non-empty but not
/// parseable).
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid amount: {}", e);
        ParseAmountError {
            input: s.to_string(),
            source: e,
        }
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn accepts_comma_thousands_separator() {
        assert_eq!(parse_amount("1,000,000,000").unwrap(), dec!(1000000000));
        assert_eq!(parse_amount("1,234.56").unwrap(), dec!(1234.56));
    }

    #[test]
    fn accepts_dollar_prefix() {
        assert_eq!(parse_amount("$ 848,240,000").unwrap(), dec!(848240000));
        assert_eq!(parse_amount("$100").unwrap(), dec!(100));
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_amount("  123.45  ").unwrap(), dec!(123.45));
    }

    #[test]
    fn empty_is_treated_as_zero() {
        assert_eq!(parse_amount("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn invalid_input_returns_error() {
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("12..3").is_err());
    }

    #[test]
    fn negative_amounts_parse_and_are_left_to_the_calculator() {
        // Rejecting negatives is the calculator's job, not the parser's.
        assert_eq!(parse_amount("-5").unwrap(), dec!(-5));
    }
}
