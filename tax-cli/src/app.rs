use std::io::Write;

use anyhow::{Context, Result};
use tax_core::{TaxResult, compute_tax};
use tracing::info;

use crate::{display, input};

/// Computes a single result from command-line values and prints it.
///
/// The values go through the same validation as the interactive prompts.
pub fn calculate_once<W: Write>(
    status: &str,
    income: &str,
    out: &mut W,
) -> Result<TaxResult> {
    let code = input::parse_status_code(status)
        .with_context(|| format!("invalid --status '{}'", status.trim()))?;
    let income = input::parse_income(income)
        .with_context(|| format!("invalid --income '{}'", income.trim()))?;

    let result = compute_tax(code, income)?;
    info!(status = result.status.as_str(), tax = %result.tax, "one-shot calculation");

    display::write_result(out, &result).context("failed to write result")?;
    Ok(result)
}
