use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TaxBracket;

/// Line-item detail behind a tax amount, for display in a breakdown panel.
///
/// Each variant carries exactly the fields relevant to its bracket; the
/// exempt bracket has no breakdown at all (the assessment holds `None`).
///
/// Bracket *slice* amounts are exact partitions of the sale value, so
/// `exempt_amount + low_bracket_amount (+ high_bracket_amount)` always equals
/// the input with no tolerance needed. Tax components are rounded half-up to
/// two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaxBreakdown {
    // High is listed first so untagged deserialization tries the superset of
    // fields before falling back to Low.
    High {
        /// First 20,000 UVT of the sale value, free of tax.
        exempt_amount: Decimal,
        /// The fixed-size middle slice between the two thresholds.
        low_bracket_amount: Decimal,
        /// Middle slice taxed at the low rate.
        low_bracket_tax: Decimal,
        /// Everything above 50,000 UVT.
        high_bracket_amount: Decimal,
        /// Top slice taxed at the high rate.
        high_bracket_tax: Decimal,
        /// Flat 450 UVT component owed by every value past the high threshold.
        fixed_amount: Decimal,
    },
    Low {
        /// First 20,000 UVT of the sale value, free of tax.
        exempt_amount: Decimal,
        /// Portion of the sale value taxed at the low rate.
        low_bracket_amount: Decimal,
        /// `low_bracket_amount` times the low rate.
        low_bracket_tax: Decimal,
    },
}

/// Result of a single stamp tax calculation.
///
/// Produced fresh on every call; carries no identity or lifecycle. Two
/// assessments computed from the same input compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferTaxAssessment {
    /// The input sale value in COP.
    pub value_in_cop: Decimal,

    /// Sale value converted to UVT at the schedule's rate, full precision.
    pub value_in_uvt: Decimal,

    /// Which bracket the value fell into.
    pub bracket: TaxBracket,

    /// Total tax owed in COP. Always non-negative.
    pub tax_amount: Decimal,

    /// Rate used for display: 0 for exempt, 0.015 for low, 0.03 (the
    /// marginal top rate, not a blend) for high.
    pub tax_rate: Decimal,

    /// Per-bracket line items; `None` for exempt values.
    pub breakdown: Option<TaxBreakdown>,
}
