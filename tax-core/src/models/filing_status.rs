use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::tax_bracket::{
    BracketRow, HEAD_OF_HOUSEHOLD_2009, MARRIED_FILING_JOINTLY_2009,
    MARRIED_FILING_SEPARATELY_2009, SINGLE_2009,
};

/// The four filing statuses covered by the 2009 rate schedules.
///
/// Each status has a stable numeric code (used by the menu) and an
/// immutable bracket table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilingStatus {
    Single,
    MarriedFilingJointly,
    MarriedFilingSeparately,
    HeadOfHousehold,
}

impl FilingStatus {
    /// All statuses in menu order.
    pub const ALL: [FilingStatus; 4] = [
        Self::Single,
        Self::MarriedFilingJointly,
        Self::MarriedFilingSeparately,
        Self::HeadOfHousehold,
    ];

    pub fn code(&self) -> i64 {
        match self {
            Self::Single => 0,
            Self::MarriedFilingJointly => 1,
            Self::MarriedFilingSeparately => 2,
            Self::HeadOfHousehold => 3,
        }
    }

    /// Looks up a status by its numeric menu code.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Single),
            1 => Some(Self::MarriedFilingJointly),
            2 => Some(Self::MarriedFilingSeparately),
            3 => Some(Self::HeadOfHousehold),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::MarriedFilingJointly => "Married Filing Jointly",
            Self::MarriedFilingSeparately => "Married Filing Separately",
            Self::HeadOfHousehold => "Head of Household",
        }
    }

    /// Short IRS-style abbreviation, used in log records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "S",
            Self::MarriedFilingJointly => "MFJ",
            Self::MarriedFilingSeparately => "MFS",
            Self::HeadOfHousehold => "HOH",
        }
    }

    /// The ordered bracket rows for this status, lowest bracket first.
    pub fn brackets(&self) -> &'static [BracketRow] {
        match self {
            Self::Single => &SINGLE_2009,
            Self::MarriedFilingJointly => &MARRIED_FILING_JOINTLY_2009,
            Self::MarriedFilingSeparately => &MARRIED_FILING_SEPARATELY_2009,
            Self::HeadOfHousehold => &HEAD_OF_HOUSEHOLD_2009,
        }
    }
}

impl fmt::Display for FilingStatus {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn from_code_round_trips_every_status() {
        for status in FilingStatus::ALL {
            assert_eq!(FilingStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn from_code_rejects_unknown_codes() {
        assert_eq!(FilingStatus::from_code(-1), None);
        assert_eq!(FilingStatus::from_code(4), None);
        assert_eq!(FilingStatus::from_code(9), None);
    }

    #[test]
    fn menu_order_matches_codes() {
        let codes: Vec<i64> = FilingStatus::ALL.iter().map(FilingStatus::code).collect();

        assert_eq!(codes, vec![0, 1, 2, 3]);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(
            FilingStatus::MarriedFilingSeparately.to_string(),
            "Married Filing Separately"
        );
        assert_eq!(FilingStatus::HeadOfHousehold.to_string(), "Head of Household");
    }
}
