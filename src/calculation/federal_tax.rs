//! Federal income tax calculation.
//!
//! This module computes federal withholding from the progressive bracket
//! tables. The bracket-table approach is the single canonical
//! implementation: each bracket carries a precomputed cumulative base so
//! the tax inside a bracket is `base + (income - floor) * rate`.

use rust_decimal::Decimal;

use crate::config::TaxTables;
use crate::error::{EngineError, EngineResult};
use crate::models::FilingStatus;

use super::round_to_cents;

/// Calculates federal income tax for a single paycheck or annual amount.
///
/// The number of withholding allowances reduces taxable income by the
/// table's allowance value each, floored at zero, before the
/// filing-status-specific bracket table is applied.
///
/// # Arguments
///
/// * `income` - Taxable income; must be non-negative
/// * `filing_status` - The employee's federal filing status
/// * `allowances` - Number of withholding allowances claimed
/// * `tables` - The tax table set to compute against
///
/// # Returns
///
/// The federal tax rounded to cents, or `InvalidInput` if `income` is
/// negative.
///
/// # Examples
///
/// ```no_run
/// use payroll_engine::calculation::federal_tax;
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::FilingStatus;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/us2024").unwrap();
/// let tax = federal_tax(
///     Decimal::from(50000),
///     FilingStatus::Single,
///     0,
///     loader.tables(),
/// ).unwrap();
/// ```
pub fn federal_tax(
    income: Decimal,
    filing_status: FilingStatus,
    allowances: u32,
    tables: &TaxTables,
) -> EngineResult<Decimal> {
    if income < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "income".to_string(),
            message: "must not be negative".to_string(),
        });
    }

    let federal = tables.federal();
    let allowance_value = federal.allowance_value * Decimal::from(allowances);
    let adjusted_income = (income - allowance_value).max(Decimal::ZERO);

    let brackets = federal.brackets_for(filing_status);

    // Brackets are sorted by floor ascending with the lowest floor at zero,
    // so the search always finds a bracket for non-negative income.
    let bracket = brackets
        .iter()
        .rfind(|b| adjusted_income >= b.floor)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("no federal bracket covers income {}", adjusted_income),
        })?;

    let tax = bracket.base + (adjusted_income - bracket.floor) * bracket.rate;
    Ok(round_to_cents(tax))
}
