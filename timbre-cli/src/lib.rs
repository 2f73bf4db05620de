pub mod logging;
pub mod rates;
pub mod report;
pub mod utils;
