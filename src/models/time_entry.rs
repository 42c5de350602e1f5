//! Time entry model and related types.
//!
//! Time entries are created by employee or manager action outside the engine
//! and consumed read-only. Only approved entries with a recorded end time
//! contribute to hour aggregation.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Approval state of a time entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    /// Awaiting manager review.
    Pending,
    /// Approved for payroll.
    Approved,
    /// Rejected; never paid.
    Rejected,
}

/// A single clock-in/clock-out record for an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// The employee this entry belongs to.
    pub employee_id: String,
    /// The work date of the entry.
    pub date: NaiveDate,
    /// The clock-in time.
    pub start_time: NaiveDateTime,
    /// The clock-out time; `None` while the entry is still open.
    pub end_time: Option<NaiveDateTime>,
    /// Unpaid break duration in minutes.
    #[serde(default)]
    pub break_minutes: u32,
    /// The approval status of the entry.
    pub approval: ApprovalStatus,
}

impl TimeEntry {
    /// Returns true if the entry can contribute hours to payroll.
    ///
    /// An entry is payable only when it is approved and has a recorded
    /// end time.
    pub fn is_payable(&self) -> bool {
        self.approval == ApprovalStatus::Approved && self.end_time.is_some()
    }
}
