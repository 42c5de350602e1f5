//! Payroll calculation result models.
//!
//! This module contains the [`PayrollCalculation`] type produced once per
//! employee per pay period, along with its itemized tax withholdings and
//! calculation warnings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Itemized tax withholdings for a single paycheck.
///
/// # Example
///
/// ```
/// use payroll_engine::models::TaxWithholdings;
/// use rust_decimal::Decimal;
///
/// let taxes = TaxWithholdings {
///     federal: Decimal::new(20000, 2),
///     state: Decimal::new(18600, 2),
///     social_security: Decimal::new(12400, 2),
///     medicare: Decimal::new(2900, 2),
/// };
/// assert_eq!(taxes.total(), Decimal::new(53900, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxWithholdings {
    /// Federal income tax withheld.
    pub federal: Decimal,
    /// State income tax withheld.
    pub state: Decimal,
    /// Social Security (OASDI) tax withheld.
    pub social_security: Decimal,
    /// Medicare tax withheld, including any additional surtax.
    pub medicare: Decimal,
}

impl TaxWithholdings {
    /// Returns the sum of all withheld taxes.
    pub fn total(&self) -> Decimal {
        self.federal + self.state + self.social_security + self.medicare
    }
}

/// A warning attached to a calculation result.
///
/// Warnings flag suspicious-but-computed results that require attention
/// without preventing the calculation from completing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// Warning code emitted when deductions and taxes exceed gross pay.
pub const NEGATIVE_NET_PAY: &str = "NEGATIVE_NET_PAY";

/// The complete result of a payroll calculation for one employee and period.
///
/// Invariant: `net_pay` equals `gross_pay` minus the sum of the itemized
/// tax withholdings and the two deduction totals. Every monetary field is
/// rounded to two decimal places at the step that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub calculated_at: DateTime<Utc>,
    /// The employee this calculation is for.
    pub employee_id: String,
    /// The pay period this calculation covers.
    pub period_id: String,
    /// Total earnings before taxes and deductions.
    pub gross_pay: Decimal,
    /// Earnings for regular (non-overtime) hours, or the full salary portion.
    pub regular_pay: Decimal,
    /// Earnings for overtime hours at 1.5x; zero for salaried employees.
    pub overtime_pay: Decimal,
    /// Itemized tax withholdings.
    pub taxes: TaxWithholdings,
    /// Total of pre-tax deductions for this paycheck.
    pub pre_tax_deductions: Decimal,
    /// Total of post-tax deductions for this paycheck.
    pub post_tax_deductions: Decimal,
    /// Amount actually payable to the employee.
    pub net_pay: Decimal,
    /// Warnings generated during calculation (e.g., negative net pay).
    #[serde(default)]
    pub warnings: Vec<CalculationWarning>,
}

impl PayrollCalculation {
    /// Returns true if this calculation carries a negative-net-pay warning.
    pub fn has_negative_net_pay(&self) -> bool {
        self.warnings.iter().any(|w| w.code == NEGATIVE_NET_PAY)
    }
}
