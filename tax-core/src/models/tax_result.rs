use rust_decimal::Decimal;
use serde::Serialize;

use crate::FilingStatus;

/// Outcome of a single tax computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxResult {
    pub status: FilingStatus,

    /// Income exactly as supplied by the caller.
    pub income: Decimal,

    /// Tax owed, rounded to cents.
    pub tax: Decimal,
}

impl TaxResult {
    pub fn status_label(&self) -> &'static str {
        self.status.label()
    }
}
