//! Text rendering for the terminal session.

use std::io::{self, Write};

use rust_decimal::{Decimal, RoundingStrategy};
use tax_core::{FilingStatus, TaxResult};

pub const TITLE: &str = "2009 U.S. Federal Income Tax Calculator";

const BANNER_WIDTH: usize = 50;
const RESULT_WIDTH: usize = 40;

/// Formats an amount as dollars with thousands separators and two decimals.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_cli::display::format_currency;
///
/// assert_eq!(format_currency(dec!(1234567.891)), "$1,234,567.89");
/// assert_eq!(format_currency(dec!(-1500)), "-$1,500.00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{rule}")
}

pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nFiling Status Options:")?;
    for status in FilingStatus::ALL {
        writeln!(out, "  {} → {}", status.code(), status.label())?;
    }
    writeln!(out, "  Q → Quit program")
}

pub fn write_result<W: Write>(
    out: &mut W,
    result: &TaxResult,
) -> io::Result<()> {
    let rule = "─".repeat(RESULT_WIDTH);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "Filing Status: {}", result.status_label())?;
    writeln!(out, "Taxable Income: {}", format_currency(result.income))?;
    writeln!(out, "Estimated Tax: {}", format_currency(result.tax))?;
    writeln!(out, "{rule}")
}
