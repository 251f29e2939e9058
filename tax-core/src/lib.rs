//! Progressive bracket income tax for the 2009 U.S. federal rate schedules.

pub mod calculations;
pub mod models;

pub use calculations::{TaxError, compute_tax, compute_tax_for};
pub use models::*;
