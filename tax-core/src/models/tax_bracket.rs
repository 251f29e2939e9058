use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// One row of a progressive rate schedule.
///
/// `upper_bound` is the cumulative income at which the row ends; `None`
/// marks the open-ended top bracket. The row covers income between the
/// previous row's bound (exclusive) and its own bound (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BracketRow {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl BracketRow {
    pub const fn new(
        upper_bound: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            rate,
        }
    }

    pub const fn unbounded(rate: Decimal) -> Self {
        Self {
            upper_bound: None,
            rate,
        }
    }
}

// 2009 rate schedules X, Y-1, Y-2 and Z.

pub(crate) static SINGLE_2009: [BracketRow; 6] = [
    BracketRow::new(dec!(8350), dec!(0.10)),
    BracketRow::new(dec!(33950), dec!(0.15)),
    BracketRow::new(dec!(82250), dec!(0.25)),
    BracketRow::new(dec!(171550), dec!(0.28)),
    BracketRow::new(dec!(372950), dec!(0.33)),
    BracketRow::unbounded(dec!(0.35)),
];

pub(crate) static MARRIED_FILING_JOINTLY_2009: [BracketRow; 6] = [
    BracketRow::new(dec!(16700), dec!(0.10)),
    BracketRow::new(dec!(67900), dec!(0.15)),
    BracketRow::new(dec!(137050), dec!(0.25)),
    BracketRow::new(dec!(208850), dec!(0.28)),
    BracketRow::new(dec!(372950), dec!(0.33)),
    BracketRow::unbounded(dec!(0.35)),
];

pub(crate) static MARRIED_FILING_SEPARATELY_2009: [BracketRow; 6] = [
    BracketRow::new(dec!(8350), dec!(0.10)),
    BracketRow::new(dec!(33950), dec!(0.15)),
    BracketRow::new(dec!(68525), dec!(0.25)),
    BracketRow::new(dec!(104425), dec!(0.28)),
    BracketRow::new(dec!(186475), dec!(0.33)),
    BracketRow::unbounded(dec!(0.35)),
];

pub(crate) static HEAD_OF_HOUSEHOLD_2009: [BracketRow; 6] = [
    BracketRow::new(dec!(11950), dec!(0.10)),
    BracketRow::new(dec!(45500), dec!(0.15)),
    BracketRow::new(dec!(117450), dec!(0.25)),
    BracketRow::new(dec!(190200), dec!(0.28)),
    BracketRow::new(dec!(372950), dec!(0.33)),
    BracketRow::unbounded(dec!(0.35)),
];
