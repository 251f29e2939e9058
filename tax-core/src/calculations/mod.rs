//! Tax calculation modules.
//!
//! Bracket accumulation lives in [`bracket_tax`]; shared helpers such as
//! cent rounding live in [`common`].

pub mod bracket_tax;
pub mod common;

pub use bracket_tax::{TaxError, bracket_tax, compute_tax, compute_tax_for};
