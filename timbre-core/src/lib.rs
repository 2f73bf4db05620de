pub mod calculations;
pub mod format;
pub mod models;

pub use calculations::{TransferTaxCalculator, TransferTaxError, TransferTaxSchedule};
pub use models::*;
