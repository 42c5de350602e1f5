//! Pay period model and related types.
//!
//! This module contains the [`PayPeriod`] type along with the pay frequency
//! and lifecycle status enums. Periods are created by an external scheduler;
//! the engine reads them and later signals completion through the
//! [`PeriodStore`](crate::run::PeriodStore) collaborator.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How often employees are paid.
///
/// The frequency drives salary proration and deduction normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    /// 52 pay periods per year.
    Weekly,
    /// 26 pay periods per year.
    BiWeekly,
    /// 24 pay periods per year (1st and 15th).
    SemiMonthly,
    /// 12 pay periods per year.
    Monthly,
}

impl PayFrequency {
    /// Returns the number of pay periods per year for this frequency.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::PayFrequency;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(PayFrequency::BiWeekly.periods_per_year(), Decimal::from(26));
    /// ```
    pub fn periods_per_year(&self) -> Decimal {
        match self {
            PayFrequency::Weekly => Decimal::from(52),
            PayFrequency::BiWeekly => Decimal::from(26),
            PayFrequency::SemiMonthly => Decimal::from(24),
            PayFrequency::Monthly => Decimal::from(12),
        }
    }

    /// Returns the average number of pay periods per month for this frequency.
    ///
    /// Used to convert monthly deduction amounts to per-paycheck amounts
    /// (4.33 weekly, 2.17 bi-weekly, 2 semi-monthly, 1 monthly).
    pub fn periods_per_month(&self) -> Decimal {
        match self {
            PayFrequency::Weekly => Decimal::new(433, 2),
            PayFrequency::BiWeekly => Decimal::new(217, 2),
            PayFrequency::SemiMonthly => Decimal::from(2),
            PayFrequency::Monthly => Decimal::ONE,
        }
    }
}

/// Lifecycle status of a pay period.
///
/// Created `Pending` by the scheduler, moves to `Processing` while a run
/// is in flight, and ends `Completed` or `Error`. A `Completed` period is
/// the idempotency gate for disbursement: the runner refuses to process it
/// again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodStatus {
    /// Created, not yet processed.
    Pending,
    /// A payroll run is in progress.
    Processing,
    /// All disbursements for the period were attempted.
    Completed,
    /// The run aborted before attempting all employees.
    Error,
}

/// Represents a pay period with its date range and pay date.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayFrequency, PayPeriod, PeriodStatus};
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     id: "pp_2024_12".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 6, 16).unwrap(),
///     pay_date: NaiveDate::from_ymd_opt(2024, 6, 21).unwrap(),
///     frequency: PayFrequency::BiWeekly,
///     status: PeriodStatus::Pending,
/// };
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
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
    /// The lifecycle status of the period.
    pub status: PeriodStatus,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
