//! Stamp tax calculation modules.
//!
//! This module provides the progressive transfer tax computation and the
//! shared arithmetic helpers it relies on.

pub mod common;
pub mod transfer;

pub use transfer::{TransferTaxCalculator, TransferTaxError, TransferTaxSchedule};
