//! Per-employee payroll calculation.
//!
//! This is the orchestration point of the calculation core: gross pay from
//! compensation mode, the four tax components, deduction totals, and the
//! net pay identity. A calculation either fails with an error before any
//! result exists, or produces a complete [`PayrollCalculation`]; suspicious
//! results such as negative net pay are reported as warnings on the result,
//! never as errors.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::TaxTables;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CalculationWarning, Compensation, DeductionDefinition, Employee, NEGATIVE_NET_PAY, PayPeriod,
    PayrollCalculation, TaxWithholdings, TimeEntry,
};

use super::{
    aggregate_hours, deduction_totals, federal_tax, fica, round_to_cents, state_tax,
};

const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Calculates a complete paycheck for one employee and pay period.
///
/// Salaried employees are paid their annual salary divided by the period
/// frequency regardless of time entries. Hourly employees are paid from
/// aggregated approved hours, with overtime at 1.5x. Taxes are computed on
/// gross pay, and deductions active on the pay date are normalized to the
/// paycheck cadence.
///
/// # Arguments
///
/// * `employee` - The employee snapshot to calculate for
/// * `period` - The pay period being processed
/// * `entries` - Time entries for the employee within the period; ignored
///   for salaried employees
/// * `deductions` - Deduction definitions assigned to the employee
/// * `tables` - The tax table set; must be valid for the period's pay date
///
/// # Returns
///
/// A [`PayrollCalculation`] with every monetary field rounded to cents, or
/// an error if the tax tables do not cover the pay date, the compensation
/// amounts are negative, or a tax lookup fails.
pub fn calculate_for_employee(
    employee: &Employee,
    period: &PayPeriod,
    entries: &[TimeEntry],
    deductions: &[DeductionDefinition],
    tables: &TaxTables,
) -> EngineResult<PayrollCalculation> {
    if !tables.is_valid_for(period.pay_date) {
        return Err(EngineError::TablesNotValid {
            date: period.pay_date,
        });
    }

    let (regular_pay, overtime_pay) = match employee.compensation {
        Compensation::Salaried { annual_salary } => {
            if annual_salary < Decimal::ZERO {
                return Err(EngineError::InvalidInput {
                    field: "annual_salary".to_string(),
                    message: "must not be negative".to_string(),
                });
            }
            let per_period = round_to_cents(annual_salary / period.frequency.periods_per_year());
            (per_period, Decimal::ZERO)
        }
        Compensation::Hourly { hourly_rate } => {
            if hourly_rate < Decimal::ZERO {
                return Err(EngineError::InvalidInput {
                    field: "hourly_rate".to_string(),
                    message: "must not be negative".to_string(),
                });
            }
            // Entries outside the period's date range never contribute,
            // even if a caller hands them over.
            let in_period: Vec<TimeEntry> = entries
                .iter()
                .filter(|e| period.contains_date(e.date))
                .cloned()
                .collect();
            let hours = aggregate_hours(&in_period);
            let regular = round_to_cents(hours.regular_hours * hourly_rate);
            let overtime =
                round_to_cents(hours.overtime_hours * hourly_rate * OVERTIME_MULTIPLIER);
            (regular, overtime)
        }
    };
    let gross_pay = regular_pay + overtime_pay;

    let federal = federal_tax(
        gross_pay,
        employee.filing_status,
        employee.allowances,
        tables,
    )?;
    let state = state_tax(gross_pay, &employee.work_state, tables)?;
    let fica_withheld = fica(gross_pay, employee.ytd_earnings, tables)?;

    let taxes = TaxWithholdings {
        federal,
        state,
        social_security: fica_withheld.social_security,
        medicare: fica_withheld.medicare,
    };

    let active: Vec<DeductionDefinition> = deductions
        .iter()
        .filter(|d| d.is_active_on(period.pay_date))
        .cloned()
        .collect();
    let totals = deduction_totals(&active, gross_pay, period.frequency);

    let net_pay = gross_pay - taxes.total() - totals.total();

    let mut warnings = Vec::new();
    if net_pay < Decimal::ZERO {
        warnings.push(CalculationWarning {
            code: NEGATIVE_NET_PAY.to_string(),
            message: format!(
                "taxes and deductions exceed gross pay by {}",
                -net_pay
            ),
            severity: "high".to_string(),
        });
    }

    Ok(PayrollCalculation {
        calculation_id: Uuid::new_v4(),
        calculated_at: Utc::now(),
        employee_id: employee.id.clone(),
        period_id: period.id.clone(),
        gross_pay,
        regular_pay,
        overtime_pay,
        taxes,
        pre_tax_deductions: totals.pre_tax,
        post_tax_deductions: totals.post_tax,
        net_pay,
        warnings,
    })
}
