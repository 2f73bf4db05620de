use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// COP value of one UVT used when no fiscal year is specified.
///
/// This is the 2023 value; pass an explicit rate or year through
/// [`TransferTaxSchedule`](crate::TransferTaxSchedule) to override it.
pub const DEFAULT_COP_PER_UVT: Decimal = dec!(42412);

/// UVT value in COP as published by DIAN for the given fiscal year.
///
/// Returns `None` for years outside the built-in table; callers fall back to
/// [`DEFAULT_COP_PER_UVT`] or a rates file.
pub fn cop_per_uvt_for_year(year: i32) -> Option<Decimal> {
    match year {
        2025 => Some(dec!(49799)),
        2024 => Some(dec!(47065)),
        2023 => Some(dec!(42412)),
        2022 => Some(dec!(38004)),
        2021 => Some(dec!(36308)),
        2020 => Some(dec!(35607)),
        2019 => Some(dec!(34270)),
        _ => None,
    }
}
