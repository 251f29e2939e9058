use std::num::IntErrorKind;

use rust_decimal::Decimal;
use thiserror::Error;

/// Validation failures for user-typed values.
///
/// The `Display` text is shown to the user verbatim before re-prompting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a valid number (0-3)")]
    InvalidStatus(String),

    #[error("Please enter 0, 1, 2, or 3 only")]
    StatusOutOfRange(String),

    #[error("Please enter a valid dollar amount")]
    InvalidIncome(String),

    #[error("Income cannot be negative")]
    NegativeIncome(Decimal),
}

/// Returns true when the trimmed input asks to quit (`q` or `Q`).
pub fn is_quit(s: &str) -> bool {
    s.trim().eq_ignore_ascii_case("q")
}

/// Returns true when the trimmed input is an affirmative `y` or `Y`.
pub fn is_yes(s: &str) -> bool {
    s.trim().eq_ignore_ascii_case("y")
}

/// Parses a filing status menu selection into its numeric code.
///
/// Only the codes 0-3 are accepted. Any other integer, including one too
/// large for `i64`, is reported as out of range so the caller can
/// re-prompt.
pub fn parse_status_code(s: &str) -> Result<i64, InputError> {
    let trimmed = s.trim();
    let code = trimmed.parse::<i64>().map_err(|e| {
        tracing::debug!(input = %trimmed, "invalid status selection: {}", e);
        match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                InputError::StatusOutOfRange(trimmed.to_string())
            }
            _ => InputError::InvalidStatus(trimmed.to_string()),
        }
    })?;

    if (0..=3).contains(&code) {
        Ok(code)
    } else {
        Err(InputError::StatusOutOfRange(trimmed.to_string()))
    }
}

/// Normalizes income text: trims whitespace and removes `$` and `,`.
fn normalize_income_input(s: &str) -> String {
    s.trim().replace(['$', ','], "").trim().to_string()
}

/// Parses a free-text income amount into a [`Decimal`].
///
/// Accepts a leading `$`, comma thousands separators and scientific
/// notation (`2.5e4`). Empty, unparseable and negative input are rejected.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_cli::input::parse_income;
///
/// assert_eq!(parse_income(" $1,234.56 ").unwrap(), dec!(1234.56));
/// assert!(parse_income("-5").is_err());
/// ```
pub fn parse_income(s: &str) -> Result<Decimal, InputError> {
    let normalized = normalize_income_input(s);

    let income = normalized
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&normalized))
        .map_err(|e| {
            tracing::debug!(input = %s, "invalid income: {}", e);
            InputError::InvalidIncome(s.trim().to_string())
        })?;

    if income.is_sign_negative() && !income.is_zero() {
        return Err(InputError::NegativeIncome(income));
    }

    Ok(income)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // parse_status_code tests
    // =========================================================================

    #[test]
    fn parse_status_code_accepts_menu_codes() {
        assert_eq!(parse_status_code("0"), Ok(0));
        assert_eq!(parse_status_code(" 3 "), Ok(3));
    }

    #[test]
    fn parse_status_code_rejects_non_numeric() {
        assert_eq!(
            parse_status_code("single"),
            Err(InputError::InvalidStatus("single".to_string()))
        );
        assert_eq!(
            parse_status_code("1.5"),
            Err(InputError::InvalidStatus("1.5".to_string()))
        );
        assert_eq!(
            parse_status_code(""),
            Err(InputError::InvalidStatus(String::new()))
        );
    }

    #[test]
    fn parse_status_code_rejects_out_of_range() {
        assert_eq!(
            parse_status_code("4"),
            Err(InputError::StatusOutOfRange("4".to_string()))
        );
        assert_eq!(
            parse_status_code("-1"),
            Err(InputError::StatusOutOfRange("-1".to_string()))
        );
        assert_eq!(
            parse_status_code(" 9 "),
            Err(InputError::StatusOutOfRange("9".to_string()))
        );
    }

    #[test]
    fn parse_status_code_treats_huge_integers_as_out_of_range() {
        assert_eq!(
            parse_status_code("99999999999999999999"),
            Err(InputError::StatusOutOfRange("99999999999999999999".to_string()))
        );
        assert_eq!(
            parse_status_code("-99999999999999999999"),
            Err(InputError::StatusOutOfRange("-99999999999999999999".to_string()))
        );
        assert_eq!(
            parse_status_code("99999999999999999999").unwrap_err().to_string(),
            "Please enter 0, 1, 2, or 3 only"
        );
    }

    // =========================================================================
    // parse_income tests
    // =========================================================================

    #[test]
    fn parse_income_strips_dollar_and_commas() {
        assert_eq!(parse_income("$1,234,567.89").unwrap(), dec!(1234567.89));
        assert_eq!(parse_income("  $ 50,000  ").unwrap(), dec!(50000));
    }

    #[test]
    fn parse_income_accepts_scientific_notation() {
        assert_eq!(parse_income("2.5e4").unwrap(), dec!(25000));
    }

    #[test]
    fn parse_income_keeps_precision() {
        assert_eq!(parse_income("10000.00").unwrap().scale(), 2);
    }

    #[test]
    fn parse_income_zero_is_valid() {
        assert_eq!(parse_income("0").unwrap(), Decimal::ZERO);
        assert_eq!(parse_income("-0").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_income_rejects_garbage() {
        assert!(matches!(parse_income("abc"), Err(InputError::InvalidIncome(_))));
        assert!(matches!(parse_income(""), Err(InputError::InvalidIncome(_))));
        assert!(matches!(parse_income("$"), Err(InputError::InvalidIncome(_))));
    }

    #[test]
    fn parse_income_rejects_negative() {
        assert_eq!(
            parse_income("-100"),
            Err(InputError::NegativeIncome(dec!(-100)))
        );
    }

    // =========================================================================
    // quit / yes tests
    // =========================================================================

    #[test]
    fn quit_and_yes_are_case_insensitive() {
        assert!(is_quit("q"));
        assert!(is_quit(" Q "));
        assert!(!is_quit("quit"));
        assert!(is_yes("y"));
        assert!(is_yes("Y"));
        assert!(!is_yes("yes"));
        assert!(!is_yes(""));
    }
}
