//! Time entry aggregation and the weekly overtime split.
//!
//! Hours are grouped into ISO 8601 weeks (Monday through Sunday) using the
//! date of each entry. Within each week the first 40 hours are regular and
//! everything above is overtime. Pay periods that span a week boundary
//! therefore split overtime per week, never across the whole period.

use std::collections::HashMap;

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::models::TimeEntry;

/// Weekly hours at or below this threshold are regular; hours above it
/// are overtime.
pub const WEEKLY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Regular and overtime hour totals across a set of time entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AggregatedHours {
    /// Hours paid at the base rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime multiplier.
    pub overtime_hours: Decimal,
}

impl AggregatedHours {
    /// Total worked hours, regular plus overtime.
    pub fn total(&self) -> Decimal {
        self.regular_hours + self.overtime_hours
    }
}

/// Computes the payable hours of a single time entry.
///
/// The duration is clock-out minus clock-in, less the unpaid break. A
/// break longer than the worked span clamps to zero rather than going
/// negative. Entries that are not payable (unapproved, or still open)
/// contribute zero.
pub fn entry_hours(entry: &TimeEntry) -> Decimal {
    let Some(end_time) = entry.end_time else {
        return Decimal::ZERO;
    };
    if !entry.is_payable() {
        return Decimal::ZERO;
    }

    let worked_minutes =
        (end_time - entry.start_time).num_minutes() - i64::from(entry.break_minutes);
    if worked_minutes <= 0 {
        return Decimal::ZERO;
    }

    Decimal::from(worked_minutes) / Decimal::from(60)
}

/// Aggregates time entries into regular and overtime hours.
///
/// Entries are grouped by ISO week before the overtime threshold is
/// applied, so each week's hours are split independently.
///
/// # Arguments
///
/// * `entries` - The time entries to aggregate; non-payable entries are
///   ignored
///
/// # Returns
///
/// The summed [`AggregatedHours`] across all weeks present in the input.
pub fn aggregate_hours(entries: &[TimeEntry]) -> AggregatedHours {
    let mut weekly_hours: HashMap<(i32, u32), Decimal> = HashMap::new();

    for entry in entries {
        let hours = entry_hours(entry);
        if hours == Decimal::ZERO {
            continue;
        }
        let week = entry.date.iso_week();
        *weekly_hours
            .entry((week.year(), week.week()))
            .or_insert(Decimal::ZERO) += hours;
    }

    let mut aggregated = AggregatedHours::default();
    for &hours in weekly_hours.values() {
        aggregated.regular_hours += hours.min(WEEKLY_OVERTIME_THRESHOLD);
        aggregated.overtime_hours += (hours - WEEKLY_OVERTIME_THRESHOLD).max(Decimal::ZERO);
    }

    aggregated
}
