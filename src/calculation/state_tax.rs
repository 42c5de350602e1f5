//! State income tax calculation.
//!
//! Eight states levy no income tax and return exactly zero; every other
//! supported state applies a single representative flat rate to full
//! income. This is a deliberate simplification over true progressive
//! state schedules and is not city/county-aware.

use rust_decimal::Decimal;

use crate::config::TaxTables;
use crate::error::{EngineError, EngineResult};

use super::round_to_cents;

/// Calculates state income tax for the given state code.
///
/// # Arguments
///
/// * `income` - Taxable income; must be non-negative
/// * `state_code` - Two-letter state code; case-insensitive
/// * `tables` - The tax table set to compute against
///
/// # Returns
///
/// The state tax rounded to cents. Zero-income-tax states return exactly
/// `0`. Fails with `InvalidInput` for a negative income or a malformed
/// state code, and `StateNotFound` for a well-formed code with no
/// configured rate.
pub fn state_tax(income: Decimal, state_code: &str, tables: &TaxTables) -> EngineResult<Decimal> {
    if income < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "income".to_string(),
            message: "must not be negative".to_string(),
        });
    }

    if state_code.len() != 2 || !state_code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(EngineError::InvalidInput {
            field: "state_code".to_string(),
            message: format!("'{}' is not a two-letter state code", state_code),
        });
    }

    let code = state_code.to_ascii_uppercase();
    let state = tables.state();

    if state.is_zero_tax(&code) {
        return Ok(Decimal::ZERO);
    }

    let rate = state
        .flat_rate(&code)
        .ok_or(EngineError::StateNotFound { code })?;

    Ok(round_to_cents(income * rate))
}
