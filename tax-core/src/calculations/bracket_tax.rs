//! Progressive bracket tax computation.
//!
//! Income is split into slices, one per bracket row, and each slice is
//! taxed at that row's marginal rate. A taxpayer whose income crosses into
//! a higher bracket only pays the higher rate on the part above the
//! threshold.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::{compute_tax, TaxError};
//!
//! // Single filer: 8350 at 10% plus 1650 at 15%.
//! let result = compute_tax(0, dec!(10000.00)).unwrap();
//! assert_eq!(result.status_label(), "Single");
//! assert_eq!(result.tax, dec!(1082.50));
//!
//! assert_eq!(compute_tax(9, dec!(10000.00)), Err(TaxError::InvalidStatus(9)));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::round_to_cents;
use crate::{BracketRow, FilingStatus, TaxResult};

/// Errors returned by [`compute_tax`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TaxError {
    /// The status code does not name one of the four filing statuses.
    #[error("invalid filing status code {0}")]
    InvalidStatus(i64),
}

/// Computes the tax for a numeric filing status code.
///
/// # Errors
///
/// Returns [`TaxError::InvalidStatus`] when `status_code` is not 0-3. No
/// partial result is produced in that case.
pub fn compute_tax(
    status_code: i64,
    income: Decimal,
) -> Result<TaxResult, TaxError> {
    let status =
        FilingStatus::from_code(status_code).ok_or(TaxError::InvalidStatus(status_code))?;

    Ok(compute_tax_for(status, income))
}

/// Computes the tax for a known filing status.
///
/// Negative income yields zero tax.
pub fn compute_tax_for(
    status: FilingStatus,
    income: Decimal,
) -> TaxResult {
    let tax = round_to_cents(bracket_tax(status.brackets(), income));

    debug!(status = status.as_str(), %income, %tax, "computed bracket tax");

    TaxResult {
        status,
        income,
        tax,
    }
}

/// Accumulates marginal tax over `rows`, without rounding.
///
/// Rows must be ordered by ascending upper bound. A bounded row's slice is
/// its bound minus the previous row's bound, so income sitting exactly on
/// a threshold is taxed entirely at the lower rate.
pub fn bracket_tax(
    rows: &[BracketRow],
    income: Decimal,
) -> Decimal {
    let mut remaining = income;
    let mut total = Decimal::ZERO;
    let mut previous_bound = Decimal::ZERO;

    for row in rows {
        if remaining <= Decimal::ZERO {
            break;
        }

        let taxable = match row.upper_bound {
            Some(upper) => remaining.min(upper - previous_bound),
            None => remaining,
        };

        if taxable > Decimal::ZERO {
            total += taxable * row.rate;
            remaining -= taxable;
        }

        if let Some(upper) = row.upper_bound {
            previous_bound = upper;
        }
    }

    total
}
