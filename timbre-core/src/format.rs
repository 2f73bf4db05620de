//! Display formatting for COP and UVT amounts.
//!
//! Uses es-CO conventions throughout: `.` as the thousands separator, `,` as
//! the decimal separator, always two decimal places. Values are rounded
//! half-up for display; the underlying amounts are not modified.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;

/// Formats a COP amount, e.g. `"$ 2.276.400,00"`.
///
/// `None` formats as the zero string `"$ 0,00"` rather than an error, so
/// callers can feed optional fields straight through.
pub fn format_cop(value: Option<Decimal>) -> String {
    format!("$ {}", grouped(value.unwrap_or(Decimal::ZERO)))
}

/// Formats a UVT quantity, e.g. `"23.578,23 UVT"`.
///
/// `None` formats as `"0,00 UVT"`.
pub fn format_uvt(value: Option<Decimal>) -> String {
    format!("{} UVT", grouped(value.unwrap_or(Decimal::ZERO)))
}

/// Renders a value with es-CO separators and exactly two decimals.
fn grouped(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();

    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (text.as_str(), ""),
    };

    let digits = int_part.as_bytes();
    let mut out = String::with_capacity(text.len() + digits.len() / 3 + 4);
    if negative {
        out.push('-');
    }
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(*digit as char);
    }

    out.push(',');
    // round_half_up leaves at most two fractional digits; pad up to two.
    out.push_str(frac_part);
    for _ in frac_part.len()..2 {
        out.push('0');
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn format_cop_groups_thousands_with_dots() {
        assert_eq!(format_cop(Some(dec!(2276400))), "$ 2.276.400,00");
        assert_eq!(format_cop(Some(dec!(848240000))), "$ 848.240.000,00");
    }

    #[test]
    fn format_cop_uses_comma_for_decimals() {
        assert_eq!(format_cop(Some(dec!(1234.5))), "$ 1.234,50");
        assert_eq!(format_cop(Some(dec!(0.07))), "$ 0,07");
    }

    #[test]
    fn format_cop_rounds_half_up_for_display() {
        assert_eq!(format_cop(Some(dec!(19.995))), "$ 20,00");
        assert_eq!(format_cop(Some(dec!(19.994))), "$ 19,99");
    }

    #[test]
    fn format_cop_none_is_the_zero_string() {
        assert_eq!(format_cop(None), "$ 0,00");
    }

    #[test]
    fn format_cop_handles_negative_amounts() {
        assert_eq!(format_cop(Some(dec!(-1234.5))), "$ -1.234,50");
    }

    #[test]
    fn format_uvt_two_decimals_and_suffix() {
        assert_eq!(format_uvt(Some(dec!(20000))), "20.000,00 UVT");
        let quotient = dec!(1000000000) / dec!(42412);
        assert_eq!(format_uvt(Some(quotient)), "23.578,23 UVT");
    }

    #[test]
    fn format_uvt_none_is_the_zero_string() {
        assert_eq!(format_uvt(None), "0,00 UVT");
    }

    #[test]
    fn grouping_boundaries() {
        assert_eq!(format_uvt(Some(dec!(999))), "999,00 UVT");
        assert_eq!(format_uvt(Some(dec!(1000))), "1.000,00 UVT");
        assert_eq!(format_uvt(Some(dec!(100000))), "100.000,00 UVT");
    }
}
