//! Employee model and related types.
//!
//! This module defines the Employee struct together with the compensation
//! and filing-status enums consumed by the payroll calculator. The engine
//! treats an employee record as an immutable snapshot per calculation; the
//! employee directory collaborator owns the canonical data.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Federal filing status used for bracket selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    /// Single filer.
    Single,
    /// Married filing jointly.
    Married,
    /// Head of household.
    Head,
}

/// How an employee is compensated.
///
/// Exactly one of the two amounts is meaningful, enforced by the enum:
/// a salaried employee carries an annual salary, an hourly employee carries
/// an hourly rate. Both are non-negative by contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Compensation {
    /// Annual salary, prorated by pay frequency.
    Salaried {
        /// The annual salary amount.
        annual_salary: Decimal,
    },
    /// Hourly rate, paid against aggregated approved hours.
    Hourly {
        /// The base hourly rate.
        hourly_rate: Decimal,
    },
}

/// Represents an employee as consumed by the payroll calculation core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The compensation mode and amount.
    pub compensation: Compensation,
    /// Two-letter work-state code (e.g., "CA").
    pub work_state: String,
    /// Federal filing status.
    pub filing_status: FilingStatus,
    /// Number of withholding allowances claimed.
    #[serde(default)]
    pub allowances: u32,
    /// Year-to-date earnings prior to this calculation, used for the
    /// Social Security wage base and the additional Medicare threshold.
    #[serde(default)]
    pub ytd_earnings: Decimal,
}

impl Employee {
    /// Returns true if the employee is paid an hourly rate.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Compensation, Employee, FilingStatus};
    /// use rust_decimal::Decimal;
    ///
    /// let hourly = Employee {
    ///     id: "emp_001".to_string(),
    ///     compensation: Compensation::Hourly { hourly_rate: Decimal::new(2000, 2) },
    ///     work_state: "TX".to_string(),
    ///     filing_status: FilingStatus::Single,
    ///     allowances: 0,
    ///     ytd_earnings: Decimal::ZERO,
    /// };
    /// assert!(hourly.is_hourly());
    /// ```
    pub fn is_hourly(&self) -> bool {
        matches!(self.compensation, Compensation::Hourly { .. })
    }
}
