//! CSV loader for per-fiscal-year UVT rates.
//!
//! The UVT value is fixed by DIAN once per fiscal year, so deployments keep a
//! small rates file next to the binary and update it yearly instead of
//! shipping a new build.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Whitespace
//! around values is tolerated.
//!
//! | Column        | Type    | Notes                              |
//! |---------------|---------|------------------------------------|
//! | `year`        | integer | fiscal year, e.g. `2024`           |
//! | `cop_per_uvt` | decimal | COP value of one UVT for that year |
//!
//! ### Example
//!
//! ```csv
//! year,cop_per_uvt
//! 2023,42412
//! 2024,47065
//! 2025,49799
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    year: i32,
    cop_per_uvt: Decimal,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading a UVT rates file.
#[derive(Debug, thiserror::Error)]
pub enum UvtRateLoadError {
    /// The rates file could not be read.
    #[error("cannot read rates file: {0}")]
    Io(#[from] std::io::Error),

    /// The underlying CSV deserialisation failed (bad structure, missing
    /// column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A rate cell was zero or negative. `row` is the 1-based data row
    /// number (header = row 0).
    #[error("non-positive UVT rate {rate} for year {year} on row {row}")]
    NonPositiveRate {
        year: i32,
        rate: Decimal,
        row: usize,
    },

    /// The same year appeared more than once. `row` is the 1-based data row
    /// number of the second occurrence.
    #[error("duplicate year {year} on row {row}")]
    DuplicateYear { year: i32, row: usize },
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// One fiscal year's UVT rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UvtRate {
    pub year: i32,
    pub cop_per_uvt: Decimal,
}

/// UVT rates keyed by fiscal year, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UvtTable {
    rates: Vec<UvtRate>,
}

impl UvtTable {
    /// The COP-per-UVT rate for `year`, if the table has one.
    pub fn get(&self, year: i32) -> Option<Decimal> {
        self.rates
            .iter()
            .find(|rate| rate.year == year)
            .map(|rate| rate.cop_per_uvt)
    }

    /// All rates in file order.
    pub fn rates(&self) -> &[UvtRate] {
        &self.rates
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Parse CSV text (the full file contents as a `&str`) into a [`UvtTable`].
///
/// # Errors
///
/// * [`UvtRateLoadError::Parse`] – the CSV is structurally invalid or a
///   field cannot be deserialised.
/// * [`UvtRateLoadError::NonPositiveRate`] – a rate is zero or negative.
/// * [`UvtRateLoadError::DuplicateYear`] – a year appears twice.
pub fn load_from_str(input: &str) -> Result<UvtTable, UvtRateLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let mut table = UvtTable::default();
    for (idx, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = result?;
        let row_number = idx + 1; // 1-based for user-facing messages

        if row.cop_per_uvt <= Decimal::ZERO {
            return Err(UvtRateLoadError::NonPositiveRate {
                year: row.year,
                rate: row.cop_per_uvt,
                row: row_number,
            });
        }
        if table.get(row.year).is_some() {
            return Err(UvtRateLoadError::DuplicateYear {
                year: row.year,
                row: row_number,
            });
        }

        table.rates.push(UvtRate {
            year: row.year,
            cop_per_uvt: row.cop_per_uvt,
        });
    }

    Ok(table)
}

/// Convenience wrapper: read a file from disk and delegate to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<UvtTable, UvtRateLoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const RATES_CSV: &str = "\
year,cop_per_uvt
2023,42412
2024,47065
2025,49799
";

    // -----------------------------------------------------------------------
    // 1. Happy path
    // -----------------------------------------------------------------------
    #[test]
    fn parses_rates_in_file_order() {
        let table = load_from_str(RATES_CSV).expect("should parse rates CSV");

        assert_eq!(table.len(), 3);
        assert_eq!(
            table.rates()[0],
            UvtRate {
                year: 2023,
                cop_per_uvt: dec!(42412),
            }
        );
        assert_eq!(table.get(2024), Some(dec!(47065)));
        assert_eq!(table.get(2025), Some(dec!(49799)));
    }

    #[test]
    fn get_returns_none_for_missing_year() {
        let table = load_from_str(RATES_CSV).expect("should parse");

        assert_eq!(table.get(2019), None);
    }

    #[test]
    fn fractional_rates_are_preserved() {
        let csv = "year,cop_per_uvt\n2026,52374.50\n";
        let table = load_from_str(csv).expect("should parse fractional rate");

        assert_eq!(table.get(2026), Some(dec!(52374.50)));
    }

    // -----------------------------------------------------------------------
    // 2. Column order and whitespace tolerance
    // -----------------------------------------------------------------------
    #[test]
    fn column_order_does_not_matter() {
        let csv = "cop_per_uvt,year\n42412,2023\n";
        let table = load_from_str(csv).expect("column order should not matter");

        assert_eq!(table.get(2023), Some(dec!(42412)));
    }

    #[test]
    fn whitespace_around_values_is_trimmed() {
        let csv = "year , cop_per_uvt\n2023 , 42412\n";
        let table = load_from_str(csv).expect("should tolerate surrounding whitespace");

        assert_eq!(table.get(2023), Some(dec!(42412)));
    }

    // -----------------------------------------------------------------------
    // 3. Empty input
    // -----------------------------------------------------------------------
    #[test]
    fn header_only_csv_yields_empty_table() {
        let table = load_from_str("year,cop_per_uvt\n").expect("header-only CSV is valid");

        assert!(table.is_empty());
    }

    #[test]
    fn completely_empty_string_yields_empty_table() {
        let table = load_from_str("").expect("empty string yields zero rows");

        assert!(table.is_empty());
    }

    // -----------------------------------------------------------------------
    // 4. Validation errors
    // -----------------------------------------------------------------------
    #[test]
    fn zero_rate_is_rejected_with_row_number() {
        let csv = "year,cop_per_uvt\n2023,42412\n2024,0\n";
        let err = load_from_str(csv).expect_err("zero rate should fail");

        match err {
            UvtRateLoadError::NonPositiveRate { year, rate, row } => {
                assert_eq!(year, 2024);
                assert_eq!(rate, dec!(0));
                assert_eq!(row, 2);
            }
            other => panic!("expected NonPositiveRate, got {other:?}"),
        }
    }

    #[test]
    fn negative_rate_is_rejected() {
        let csv = "year,cop_per_uvt\n2023,-42412\n";
        let err = load_from_str(csv).expect_err("negative rate should fail");

        assert!(matches!(err, UvtRateLoadError::NonPositiveRate { .. }));
    }

    #[test]
    fn duplicate_year_is_rejected_with_row_number() {
        let csv = "year,cop_per_uvt\n2023,42412\n2023,47065\n";
        let err = load_from_str(csv).expect_err("duplicate year should fail");

        match err {
            UvtRateLoadError::DuplicateYear { year, row } => {
                assert_eq!(year, 2023);
                assert_eq!(row, 2);
            }
            other => panic!("expected DuplicateYear, got {other:?}"),
        }
    }

    // -----------------------------------------------------------------------
    // 5. Structural errors
    // -----------------------------------------------------------------------
    #[test]
    fn missing_column_is_a_parse_error() {
        let csv = "year\n2023\n";
        let err = load_from_str(csv).expect_err("missing column should fail");

        assert!(matches!(err, UvtRateLoadError::Parse(_)));
    }

    #[test]
    fn non_numeric_rate_is_a_parse_error() {
        let csv = "year,cop_per_uvt\n2023,not_a_number\n";
        let err = load_from_str(csv).expect_err("non-numeric rate should fail");

        assert!(matches!(err, UvtRateLoadError::Parse(_)));
    }
}
