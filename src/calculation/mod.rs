//! Calculation logic for the payroll engine.
//!
//! This module contains all the pure calculation functions: federal bracket
//! tax, state flat tax, FICA withholding, time entry aggregation with the
//! weekly overtime split, deduction normalization, and the per-employee
//! payroll calculation that ties them together.

mod deductions;
mod federal_tax;
mod fica;
mod payroll;
mod state_tax;
mod time_aggregation;

use rust_decimal::{Decimal, RoundingStrategy};

pub use deductions::{DeductionTotals, deduction_amount, deduction_totals};
pub use federal_tax::federal_tax;
pub use fica::{FicaWithholding, fica};
pub use payroll::calculate_for_employee;
pub use state_tax::state_tax;
pub use time_aggregation::{
    AggregatedHours, WEEKLY_OVERTIME_THRESHOLD, aggregate_hours, entry_hours,
};

/// Rounds a monetary amount to cents using round-half-up.
///
/// Every monetary result in the engine is rounded with this helper at the
/// computation step that produced it, not only at the end, so itemized
/// fields always sum exactly to their totals.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("46.0829").unwrap();
/// assert_eq!(round_to_cents(amount), Decimal::from_str("46.08").unwrap());
///
/// let midpoint = Decimal::from_str("2.005").unwrap();
/// assert_eq!(round_to_cents(midpoint), Decimal::from_str("2.01").unwrap());
/// ```
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
