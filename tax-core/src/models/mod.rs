mod filing_status;
mod tax_bracket;
mod tax_result;

pub use filing_status::FilingStatus;
pub use tax_bracket::BracketRow;
pub use tax_result::TaxResult;
