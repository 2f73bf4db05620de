mod assessment;
mod tax_bracket;
mod uvt;

pub use assessment::{TaxBreakdown, TransferTaxAssessment};
pub use tax_bracket::TaxBracket;
pub use uvt::{DEFAULT_COP_PER_UVT, cop_per_uvt_for_year};
