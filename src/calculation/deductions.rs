//! Per-paycheck deduction amounts and pre/post-tax totals.
//!
//! Declared amounts are normalized to the paycheck cadence: monthly
//! amounts divide by the average paychecks per month, annual amounts by
//! the paychecks per year, and per-paycheck amounts apply as-is.

use rust_decimal::Decimal;

use crate::models::{
    CalculationMethod, DeductionDefinition, DeductionFrequency, DeductionType, PayFrequency,
};

use super::round_to_cents;

/// Pre-tax and post-tax deduction totals for one paycheck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeductionTotals {
    /// Sum of deductions taken before tax.
    pub pre_tax: Decimal,
    /// Sum of deductions taken after tax.
    pub post_tax: Decimal,
}

impl DeductionTotals {
    /// Combined pre-tax and post-tax total.
    pub fn total(&self) -> Decimal {
        self.pre_tax + self.post_tax
    }
}

/// Computes the per-paycheck amount of a single deduction.
///
/// Percentage deductions apply to gross pay; fixed deductions are
/// normalized from their declared frequency to the pay frequency. Returns
/// `None` when the definition is missing the value its method requires.
///
/// # Arguments
///
/// * `definition` - The deduction definition
/// * `gross_pay` - Gross pay for the paycheck; percentage base
/// * `frequency` - The pay frequency of the period being calculated
pub fn deduction_amount(
    definition: &DeductionDefinition,
    gross_pay: Decimal,
    frequency: PayFrequency,
) -> Option<Decimal> {
    let declared = match definition.method {
        CalculationMethod::Percentage => {
            let percentage = definition.default_percentage?;
            gross_pay * percentage / Decimal::from(100)
        }
        CalculationMethod::Fixed => definition.default_amount?,
    };

    let per_paycheck = match definition.frequency {
        DeductionFrequency::PerPaycheck => declared,
        DeductionFrequency::Monthly => declared / frequency.periods_per_month(),
        DeductionFrequency::Annual => declared / frequency.periods_per_year(),
    };

    Some(round_to_cents(per_paycheck))
}

/// Sums active deductions into pre-tax and post-tax totals.
///
/// Definitions missing their required value are skipped rather than
/// failing the whole paycheck. Callers filter for active definitions
/// before calling; this function applies every definition it is given.
pub fn deduction_totals(
    definitions: &[DeductionDefinition],
    gross_pay: Decimal,
    frequency: PayFrequency,
) -> DeductionTotals {
    let mut totals = DeductionTotals::default();

    for definition in definitions {
        let Some(amount) = deduction_amount(definition, gross_pay, frequency) else {
            continue;
        };
        match definition.deduction_type {
            DeductionType::PreTax => totals.pre_tax += amount,
            DeductionType::PostTax => totals.post_tax += amount,
        }
    }

    totals
}
