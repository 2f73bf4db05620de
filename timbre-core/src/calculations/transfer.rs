//! Progressive stamp tax calculation for property transfers.
//!
//! Implements the three-band transfer tax schedule for real-estate sales.
//! Value bands are expressed in UVT (unidad de valor tributario) and
//! converted to COP through the fiscal year's UVT rate.
//!
//! # Schedule
//!
//! | Band   | Range (UVT)     | Levy |
//! |--------|-----------------|------|
//! | Exempt | 0 – 20,000      | none |
//! | Low    | 20,000 – 50,000 | 1.5% of the value above 20,000 UVT |
//! | High   | over 50,000     | 1.5% of the 30,000 UVT middle slice, plus 3% of the value above 50,000 UVT, plus a fixed 450 UVT |
//!
//! Band boundaries are inclusive on the lower side: a value of exactly
//! 20,000 UVT is exempt, and exactly 50,000 UVT is taxed at the low rate.
//! Bracket selection compares in COP against the thresholds scaled by the
//! UVT rate, so boundary values never depend on division rounding.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use timbre_core::models::TaxBracket;
//! use timbre_core::{TransferTaxCalculator, TransferTaxSchedule};
//!
//! let calculator = TransferTaxCalculator::new(TransferTaxSchedule::default());
//! let assessment = calculator.calculate(dec!(1_000_000_000)).unwrap();
//!
//! assert_eq!(assessment.bracket, TaxBracket::Low);
//! assert_eq!(assessment.tax_amount, dec!(2_276_400));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::round_half_up;
use crate::models::{
    DEFAULT_COP_PER_UVT, TaxBracket, TaxBreakdown, TransferTaxAssessment, cop_per_uvt_for_year,
};

/// Errors that can occur during stamp tax calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransferTaxError {
    /// The sale value was negative. The calculator rejects rather than
    /// clamps; callers that want clamp-to-zero semantics do so explicitly.
    #[error("sale value must be non-negative, got {0}")]
    NegativeValue(Decimal),

    /// The COP-per-UVT conversion rate must be positive.
    #[error("COP-per-UVT rate must be positive, got {0}")]
    InvalidUvtRate(Decimal),

    /// The bracket thresholds must satisfy `0 <= exempt < high`.
    #[error("bracket thresholds must satisfy 0 <= exempt < high, got {exempt} and {high} UVT")]
    InvalidThresholds { exempt: Decimal, high: Decimal },

    /// A marginal tax rate must be between 0 and 1.
    #[error("tax rate must be between 0 and 1, got {0}")]
    InvalidRate(Decimal),

    /// The fixed high-bracket component must be non-negative.
    #[error("fixed component must be non-negative, got {0} UVT")]
    InvalidFixedComponent(Decimal),
}

/// Configuration for the transfer tax schedule.
///
/// The UVT rate changes every fiscal year, so it is an explicit parameter
/// rather than a constant baked into the computation. The thresholds, rates,
/// and fixed component are statutory and rarely change, but are carried here
/// so a new schedule never requires touching the calculator.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use timbre_core::TransferTaxSchedule;
///
/// // 2024 fiscal year
/// let schedule = TransferTaxSchedule::with_cop_per_uvt(dec!(47065));
/// assert_eq!(schedule.exempt_threshold_uvt, dec!(20000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferTaxSchedule {
    /// COP value of one UVT for the fiscal year in effect.
    pub cop_per_uvt: Decimal,

    /// Values at or below this many UVT owe no tax. Statutorily 20,000.
    pub exempt_threshold_uvt: Decimal,

    /// Values at or below this many UVT (and above the exempt threshold)
    /// are taxed at the low rate. Statutorily 50,000.
    pub high_threshold_uvt: Decimal,

    /// Marginal rate for the low band. Statutorily 1.5%.
    pub low_rate: Decimal,

    /// Marginal rate for the portion above the high threshold. Statutorily 3%.
    pub high_rate: Decimal,

    /// Flat component, in UVT, owed by every value past the high threshold
    /// on top of the two marginal pieces. Statutorily 450.
    pub fixed_component_uvt: Decimal,
}

impl Default for TransferTaxSchedule {
    fn default() -> Self {
        Self::with_cop_per_uvt(DEFAULT_COP_PER_UVT)
    }
}

impl TransferTaxSchedule {
    /// Statutory schedule with an explicit COP-per-UVT rate.
    pub fn with_cop_per_uvt(cop_per_uvt: Decimal) -> Self {
        Self {
            cop_per_uvt,
            exempt_threshold_uvt: dec!(20000),
            high_threshold_uvt: dec!(50000),
            low_rate: dec!(0.015),
            high_rate: dec!(0.03),
            fixed_component_uvt: dec!(450),
        }
    }

    /// Statutory schedule using the built-in UVT table for `year`.
    ///
    /// Returns `None` when the year is not in the table; see
    /// [`cop_per_uvt_for_year`].
    pub fn for_year(year: i32) -> Option<Self> {
        cop_per_uvt_for_year(year).map(Self::with_cop_per_uvt)
    }

    /// Validates the schedule parameters.
    ///
    /// # Errors
    ///
    /// Returns [`TransferTaxError`] if:
    /// - `cop_per_uvt` is not positive
    /// - the thresholds are negative or not strictly increasing
    /// - either rate is outside `[0, 1]`
    /// - the fixed component is negative
    pub fn validate(&self) -> Result<(), TransferTaxError> {
        if self.cop_per_uvt <= Decimal::ZERO {
            return Err(TransferTaxError::InvalidUvtRate(self.cop_per_uvt));
        }
        if self.exempt_threshold_uvt < Decimal::ZERO
            || self.high_threshold_uvt <= self.exempt_threshold_uvt
        {
            return Err(TransferTaxError::InvalidThresholds {
                exempt: self.exempt_threshold_uvt,
                high: self.high_threshold_uvt,
            });
        }
        if self.low_rate < Decimal::ZERO || self.low_rate > Decimal::ONE {
            return Err(TransferTaxError::InvalidRate(self.low_rate));
        }
        if self.high_rate < Decimal::ZERO || self.high_rate > Decimal::ONE {
            return Err(TransferTaxError::InvalidRate(self.high_rate));
        }
        if self.fixed_component_uvt < Decimal::ZERO {
            return Err(TransferTaxError::InvalidFixedComponent(
                self.fixed_component_uvt,
            ));
        }
        Ok(())
    }

    /// Exempt threshold expressed in COP.
    fn exempt_limit_cop(&self) -> Decimal {
        self.exempt_threshold_uvt * self.cop_per_uvt
    }

    /// High threshold expressed in COP.
    fn high_limit_cop(&self) -> Decimal {
        self.high_threshold_uvt * self.cop_per_uvt
    }
}

/// Calculator for the property transfer stamp tax.
///
/// Pure and stateless: the same input always produces the same assessment,
/// and no call observes or mutates anything outside its arguments.
#[derive(Debug, Clone)]
pub struct TransferTaxCalculator {
    schedule: TransferTaxSchedule,
}

impl TransferTaxCalculator {
    /// Creates a calculator with the given schedule.
    pub fn new(schedule: TransferTaxSchedule) -> Self {
        Self { schedule }
    }

    /// The schedule this calculator applies.
    pub fn schedule(&self) -> &TransferTaxSchedule {
        &self.schedule
    }

    /// Calculates the stamp tax owed on a sale value in COP.
    ///
    /// Bracket slice amounts in the breakdown partition the input exactly;
    /// tax components and the total are rounded half-up to two decimal
    /// places.
    ///
    /// # Errors
    ///
    /// Returns [`TransferTaxError`] if the schedule is invalid or the value
    /// is negative.
    pub fn calculate(
        &self,
        value_in_cop: Decimal,
    ) -> Result<TransferTaxAssessment, TransferTaxError> {
        self.schedule.validate()?;

        if value_in_cop < Decimal::ZERO {
            return Err(TransferTaxError::NegativeValue(value_in_cop));
        }

        let value_in_uvt = value_in_cop / self.schedule.cop_per_uvt;
        let bracket = self.bracket_for(value_in_cop);

        let (tax_amount, tax_rate, breakdown) = match bracket {
            TaxBracket::Exempt => (Decimal::ZERO, Decimal::ZERO, None),
            TaxBracket::Low => {
                let (tax, breakdown) = self.low_bracket(value_in_cop);
                (tax, self.schedule.low_rate, Some(breakdown))
            }
            TaxBracket::High => {
                let (tax, breakdown) = self.high_bracket(value_in_cop);
                (tax, self.schedule.high_rate, Some(breakdown))
            }
        };

        Ok(TransferTaxAssessment {
            value_in_cop,
            value_in_uvt,
            bracket,
            tax_amount,
            tax_rate,
            breakdown,
        })
    }

    /// Selects the bracket. Thresholds are inclusive on the lower side.
    fn bracket_for(&self, value_in_cop: Decimal) -> TaxBracket {
        if value_in_cop <= self.schedule.exempt_limit_cop() {
            TaxBracket::Exempt
        } else if value_in_cop <= self.schedule.high_limit_cop() {
            TaxBracket::Low
        } else {
            TaxBracket::High
        }
    }

    /// Tax and line items for a value in the low band.
    fn low_bracket(&self, value_in_cop: Decimal) -> (Decimal, TaxBreakdown) {
        let exempt_amount = self.schedule.exempt_limit_cop();
        let low_bracket_amount = value_in_cop - exempt_amount;
        let low_bracket_tax = round_half_up(low_bracket_amount * self.schedule.low_rate);

        (
            low_bracket_tax,
            TaxBreakdown::Low {
                exempt_amount,
                low_bracket_amount,
                low_bracket_tax,
            },
        )
    }

    /// Tax and line items for a value in the high band.
    fn high_bracket(&self, value_in_cop: Decimal) -> (Decimal, TaxBreakdown) {
        let exempt_amount = self.schedule.exempt_limit_cop();
        let low_bracket_amount =
            (self.schedule.high_threshold_uvt - self.schedule.exempt_threshold_uvt)
                * self.schedule.cop_per_uvt;
        let low_bracket_tax = round_half_up(low_bracket_amount * self.schedule.low_rate);

        let high_bracket_amount = value_in_cop - self.schedule.high_limit_cop();
        let high_bracket_tax = round_half_up(high_bracket_amount * self.schedule.high_rate);

        let fixed_amount = round_half_up(self.schedule.fixed_component_uvt * self.schedule.cop_per_uvt);

        (
            low_bracket_tax + high_bracket_tax + fixed_amount,
            TaxBreakdown::High {
                exempt_amount,
                low_bracket_amount,
                low_bracket_tax,
                high_bracket_amount,
                high_bracket_tax,
                fixed_amount,
            },
        )
    }
}
