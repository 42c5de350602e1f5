//! Deduction definition model and related types.
//!
//! Deduction definitions describe recurring withholdings such as health
//! premiums or retirement contributions. The engine computes per-paycheck
//! amounts from them; the definitions themselves are owned by an external
//! collaborator.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a deduction amount is calculated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMethod {
    /// A fixed dollar amount per occurrence.
    Fixed,
    /// A percentage of gross pay.
    Percentage,
}

/// Whether a deduction is taken before or after tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionType {
    /// Subtracted before tax computation.
    PreTax,
    /// Subtracted after tax computation.
    PostTax,
}

/// How often the declared amount recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionFrequency {
    /// The amount applies to every paycheck as-is.
    PerPaycheck,
    /// The amount is monthly and is divided across paychecks.
    Monthly,
    /// The amount is annual and is divided across paychecks.
    Annual,
}

/// A deduction definition as consumed by the deduction engine.
///
/// Invariant: exactly one of `default_amount` / `default_percentage` is
/// meaningful, determined by `method`. Definitions where the required value
/// is missing are skipped by the totals calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionDefinition {
    /// Unique identifier for the deduction.
    pub id: String,
    /// Human-readable name (e.g., "401k", "Health Premium").
    pub name: String,
    /// How the amount is calculated.
    pub method: CalculationMethod,
    /// Pre-tax or post-tax treatment.
    pub deduction_type: DeductionType,
    /// Fixed dollar amount; meaningful when `method` is `Fixed`.
    #[serde(default)]
    pub default_amount: Option<Decimal>,
    /// Percentage of gross pay; meaningful when `method` is `Percentage`.
    #[serde(default)]
    pub default_percentage: Option<Decimal>,
    /// How often the declared amount recurs.
    pub frequency: DeductionFrequency,
    /// Declared annual cap. Not enforced by the engine; see DESIGN.md.
    #[serde(default)]
    pub max_annual_amount: Option<Decimal>,
    /// First date the deduction is active (inclusive).
    pub start_date: NaiveDate,
    /// Last date the deduction is active (inclusive); `None` means open-ended.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl DeductionDefinition {
    /// Returns true if the deduction is active on the given date.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        date >= self.start_date && self.end_date.is_none_or(|end| date <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_deduction(end_date: Option<NaiveDate>) -> DeductionDefinition {
        DeductionDefinition {
            id: "ded_001".to_string(),
            name: "401k".to_string(),
            method: CalculationMethod::Percentage,
            deduction_type: DeductionType::PreTax,
            default_amount: None,
            default_percentage: Some(Decimal::from(5)),
            frequency: DeductionFrequency::PerPaycheck,
            max_annual_amount: None,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date,
        }
    }

    #[test]
    fn test_is_active_within_open_ended_range() {
        let deduction = create_test_deduction(None);
        assert!(deduction.is_active_on(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()));
        assert!(deduction.is_active_on(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()));
    }

    #[test]
    fn test_is_not_active_before_start() {
        let deduction = create_test_deduction(None);
        assert!(!deduction.is_active_on(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()));
    }

    #[test]
    fn test_is_not_active_after_end() {
        let deduction = create_test_deduction(NaiveDate::from_ymd_opt(2024, 6, 30));
        assert!(!deduction.is_active_on(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()));
        assert!(deduction.is_active_on(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()));
    }

    #[test]
    fn test_deserialize_fixed_deduction() {
        let json = r#"{
            "id": "ded_002",
            "name": "Health Premium",
            "method": "fixed",
            "deduction_type": "post_tax",
            "default_amount": "100.00",
            "frequency": "monthly",
            "start_date": "2024-01-01"
        }"#;
        let deduction: DeductionDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(deduction.method, CalculationMethod::Fixed);
        assert_eq!(deduction.deduction_type, DeductionType::PostTax);
        assert_eq!(deduction.default_amount, Some(Decimal::new(10000, 2)));
        assert!(deduction.default_percentage.is_none());
        assert_eq!(deduction.frequency, DeductionFrequency::Monthly);
        assert!(deduction.end_date.is_none());
        assert!(deduction.max_annual_amount.is_none());
    }

    #[test]
    fn test_deserialize_percentage_deduction_with_cap() {
        let json = r#"{
            "id": "ded_003",
            "name": "401k",
            "method": "percentage",
            "deduction_type": "pre_tax",
            "default_percentage": "6",
            "frequency": "per_paycheck",
            "max_annual_amount": "23000",
            "start_date": "2024-01-01",
            "end_date": "2024-12-31"
        }"#;
        let deduction: DeductionDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(deduction.default_percentage, Some(Decimal::from(6)));
        assert_eq!(deduction.max_annual_amount, Some(Decimal::from(23000)));
        assert_eq!(
            deduction.end_date,
            NaiveDate::from_ymd_opt(2024, 12, 31)
        );
    }

    #[test]
    fn test_frequency_serialization() {
        assert_eq!(
            serde_json::to_string(&DeductionFrequency::PerPaycheck).unwrap(),
            "\"per_paycheck\""
        );
        assert_eq!(
            serde_json::to_string(&DeductionType::PreTax).unwrap(),
            "\"pre_tax\""
        );
    }
}
