//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod deduction;
mod disbursement;
mod employee;
mod pay_period;
mod time_entry;

pub use calculation_result::{
    CalculationWarning, NEGATIVE_NET_PAY, PayrollCalculation, TaxWithholdings,
};
pub use deduction::{CalculationMethod, DeductionDefinition, DeductionFrequency, DeductionType};
pub use disbursement::{
    DisbursementMethod, DisbursementResult, DisbursementStatus, SettlementState,
    TransactionRecord, WalletBalance,
};
pub use employee::{Compensation, Employee, FilingStatus};
pub use pay_period::{PayFrequency, PayPeriod, PeriodStatus};
pub use time_entry::{ApprovalStatus, TimeEntry};
