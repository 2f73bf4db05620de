//! UVT rate resolution.
//!
//! Precedence: an explicit `--uvt-rate` override, then the rates file, then
//! the built-in statutory table, then the default rate as a last resort.

use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use timbre_core::{DEFAULT_COP_PER_UVT, cop_per_uvt_for_year};

/// Where a resolved UVT rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateSource {
    /// Explicit command-line override.
    Override,
    /// Entry in the rates CSV file.
    RatesFile,
    /// Built-in statutory table.
    BuiltIn,
    /// Fallback default (year unknown everywhere).
    Default,
}

impl RateSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Override => "override",
            Self::RatesFile => "rates file",
            Self::BuiltIn => "built-in table",
            Self::Default => "default",
        }
    }
}

/// Resolves the COP-per-UVT rate for a fiscal year.
///
/// # Errors
///
/// Fails only when a rates file was given but cannot be loaded; a file that
/// loads but has no entry for `year` falls through to the built-in table.
pub fn resolve(
    year: i32,
    override_rate: Option<Decimal>,
    rates_file: Option<&Path>,
) -> Result<(Decimal, RateSource)> {
    if let Some(rate) = override_rate {
        return Ok((rate, RateSource::Override));
    }

    if let Some(path) = rates_file {
        let table = timbre_data::load_from_file(path)
            .with_context(|| format!("failed to load UVT rates from: {}", path.display()))?;
        if let Some(rate) = table.get(year) {
            return Ok((rate, RateSource::RatesFile));
        }
        tracing::warn!(
            year,
            path = %path.display(),
            "rates file has no entry for year, trying the built-in table"
        );
    }

    if let Some(rate) = cop_per_uvt_for_year(year) {
        return Ok((rate, RateSource::BuiltIn));
    }

    tracing::warn!(
        year,
        default = %DEFAULT_COP_PER_UVT,
        "no UVT rate known for year, using the default"
    );
    Ok((DEFAULT_COP_PER_UVT, RateSource::Default))
}
