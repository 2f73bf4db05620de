pub mod loader;

pub use loader::{UvtRate, UvtRateLoadError, UvtTable, load_from_file, load_from_str};
