//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    ApprovalStatus, CalculationMethod, Compensation, DeductionDefinition, DeductionFrequency,
    DeductionType, Employee, FilingStatus, PayFrequency, PayPeriod, PeriodStatus, TimeEntry,
};

/// Request body for the `/calculate` endpoint.
///
/// Contains all information needed to calculate a paycheck for one
/// employee and pay period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee information.
    pub employee: EmployeeRequest,
    /// The pay period for the calculation.
    pub pay_period: PayPeriodRequest,
    /// Time entries within the pay period; ignored for salaried employees.
    #[serde(default)]
    pub time_entries: Vec<TimeEntryRequest>,
    /// Deduction definitions assigned to the employee.
    #[serde(default)]
    pub deductions: Vec<DeductionRequest>,
}

/// Employee information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
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
    /// Year-to-date earnings prior to this calculation.
    #[serde(default)]
    pub ytd_earnings: Decimal,
}

/// Pay period information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// Unique identifier for the pay period.
    pub id: String,
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
    /// The date employees are paid for this period.
    pub pay_date: NaiveDate,
    /// The pay frequency this period belongs to.
    pub frequency: PayFrequency,
}

/// Time entry information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntryRequest {
    /// The employee this entry belongs to.
    pub employee_id: String,
    /// The work date of the entry.
    pub date: NaiveDate,
    /// The clock-in time.
    pub start_time: NaiveDateTime,
    /// The clock-out time; `null` while the entry is still open.
    #[serde(default)]
    pub end_time: Option<NaiveDateTime>,
    /// Unpaid break duration in minutes.
    #[serde(default)]
    pub break_minutes: u32,
    /// The approval status of the entry.
    pub approval: ApprovalStatus,
}

/// Deduction information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeductionRequest {
    /// Unique identifier for the deduction.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// How the amount is calculated.
    pub method: CalculationMethod,
    /// Pre-tax or post-tax treatment.
    pub deduction_type: DeductionType,
    /// Fixed dollar amount; meaningful when `method` is `fixed`.
    #[serde(default)]
    pub default_amount: Option<Decimal>,
    /// Percentage of gross pay; meaningful when `method` is `percentage`.
    #[serde(default)]
    pub default_percentage: Option<Decimal>,
    /// How often the declared amount recurs.
    pub frequency: DeductionFrequency,
    /// Declared annual cap.
    #[serde(default)]
    pub max_annual_amount: Option<Decimal>,
    /// First date the deduction is active (inclusive).
    pub start_date: NaiveDate,
    /// Last date the deduction is active (inclusive).
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            compensation: req.compensation,
            work_state: req.work_state,
            filing_status: req.filing_status,
            allowances: req.allowances,
            ytd_earnings: req.ytd_earnings,
        }
    }
}

impl From<PayPeriodRequest> for PayPeriod {
    fn from(req: PayPeriodRequest) -> Self {
        PayPeriod {
            id: req.id,
            start_date: req.start_date,
            end_date: req.end_date,
            pay_date: req.pay_date,
            frequency: req.frequency,
            status: PeriodStatus::Pending,
        }
    }
}

impl From<TimeEntryRequest> for TimeEntry {
    fn from(req: TimeEntryRequest) -> Self {
        TimeEntry {
            employee_id: req.employee_id,
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
            break_minutes: req.break_minutes,
            approval: req.approval,
        }
    }
}

impl From<DeductionRequest> for DeductionDefinition {
    fn from(req: DeductionRequest) -> Self {
        DeductionDefinition {
            id: req.id,
            name: req.name,
            method: req.method,
            deduction_type: req.deduction_type,
            default_amount: req.default_amount,
            default_percentage: req.default_percentage,
            frequency: req.frequency,
            max_annual_amount: req.max_annual_amount,
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}
