//! FICA (Social Security and Medicare) withholding calculation.
//!
//! Social Security applies only to the portion of income below the annual
//! wage base, measured against year-to-date earnings. Medicare applies to
//! all income, with an additional surtax on exactly the portion of
//! combined earnings exceeding the additional-Medicare threshold.

use rust_decimal::Decimal;

use crate::config::TaxTables;
use crate::error::{EngineError, EngineResult};

use super::round_to_cents;

/// The two FICA components, rounded to cents independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FicaWithholding {
    /// Social Security (OASDI) tax.
    pub social_security: Decimal,
    /// Medicare tax, including any additional surtax.
    pub medicare: Decimal,
}

/// Calculates FICA withholding for a payment.
///
/// # Arguments
///
/// * `income` - Gross income for this payment; must be non-negative
/// * `ytd_earnings` - Earnings already paid this year, before this payment
/// * `tables` - The tax table set to compute against
///
/// # Returns
///
/// A [`FicaWithholding`] with each component rounded to cents, or
/// `InvalidInput` if either amount is negative.
///
/// # Examples
///
/// ```no_run
/// use payroll_engine::calculation::fica;
/// use payroll_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/us2024").unwrap();
/// let withheld = fica(Decimal::from(170000), Decimal::ZERO, loader.tables()).unwrap();
/// // Social Security caps at the wage base: 160200 * 0.062
/// assert_eq!(withheld.social_security, Decimal::new(993240, 2));
/// ```
pub fn fica(
    income: Decimal,
    ytd_earnings: Decimal,
    tables: &TaxTables,
) -> EngineResult<FicaWithholding> {
    if income < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "income".to_string(),
            message: "must not be negative".to_string(),
        });
    }
    if ytd_earnings < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "ytd_earnings".to_string(),
            message: "must not be negative".to_string(),
        });
    }

    let rates = tables.fica();

    // Social Security applies to income up to the remaining wage base room.
    let wage_base_room = (rates.social_security_wage_base - ytd_earnings).max(Decimal::ZERO);
    let ss_taxable = income.min(wage_base_room);
    let social_security = round_to_cents(ss_taxable * rates.social_security_rate);

    // The surtax applies only to the portion of this payment that pushes
    // combined earnings past the threshold, never the whole wage.
    let over_threshold = (ytd_earnings + income - rates.additional_medicare_threshold)
        .max(Decimal::ZERO)
        .min(income);
    let medicare = round_to_cents(
        income * rates.medicare_rate + over_threshold * rates.additional_medicare_rate,
    );

    Ok(FicaWithholding {
        social_security,
        medicare,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        FederalTables, FicaTables, StateTables, TaxTableMetadata, TaxTables,
    };
    use chrono::NaiveDate;
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_tables() -> TaxTables {
        let metadata = TaxTableMetadata {
            jurisdiction: "US".to_string(),
            tax_year: 2024,
            version: "2024.1".to_string(),
            source_url: "https://example.com".to_string(),
            valid_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            valid_until: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        };

        let federal = FederalTables {
            allowance_value: dec("4300"),
            single: vec![],
            married: vec![],
            head: vec![],
        };

        let state = StateTables {
            no_income_tax: vec![],
            flat_rates: HashMap::new(),
        };

        let fica = FicaTables {
            social_security_rate: dec("0.062"),
            social_security_wage_base: dec("160200"),
            medicare_rate: dec("0.0145"),
            additional_medicare_rate: dec("0.009"),
            additional_medicare_threshold: dec("200000"),
        };

        TaxTables::new(metadata, federal, state, fica)
    }

    #[test]
    fn test_social_security_below_wage_base() {
        let tables = create_test_tables();
        let withheld = fica(dec("2000"), Decimal::ZERO, &tables).unwrap();
        assert_eq!(withheld.social_security, dec("124.00"));
    }

    #[test]
    fn test_social_security_caps_at_wage_base() {
        let tables = create_test_tables();
        let withheld = fica(dec("170000"), Decimal::ZERO, &tables).unwrap();
        // min(170000, 160200) * 0.062
        assert_eq!(withheld.social_security, dec("9932.40"));
    }

    #[test]
    fn test_social_security_respects_ytd_room() {
        let tables = create_test_tables();
        // Only 200 of wage base room remains.
        let withheld = fica(dec("5000"), dec("160000"), &tables).unwrap();
        assert_eq!(withheld.social_security, dec("12.40"));
    }

    #[test]
    fn test_social_security_zero_once_base_exhausted() {
        let tables = create_test_tables();
        let withheld = fica(dec("5000"), dec("200000"), &tables).unwrap();
        assert_eq!(withheld.social_security, Decimal::ZERO);
    }

    #[test]
    fn test_medicare_base_rate() {
        let tables = create_test_tables();
        let withheld = fica(dec("2000"), Decimal::ZERO, &tables).unwrap();
        assert_eq!(withheld.medicare, dec("29.00"));
    }

    #[test]
    fn test_medicare_surtax_applies_only_to_excess() {
        let tables = create_test_tables();
        // 195000 ytd + 10000 crosses 200000 by 5000: surtax on the 5000 only.
        let withheld = fica(dec("10000"), dec("195000"), &tables).unwrap();
        // 10000 * 0.0145 + 5000 * 0.009 = 145 + 45
        assert_eq!(withheld.medicare, dec("190.00"));
    }

    #[test]
    fn test_medicare_surtax_caps_at_full_income() {
        let tables = create_test_tables();
        // Already past the threshold: the whole payment is surtaxed.
        let withheld = fica(dec("10000"), dec("250000"), &tables).unwrap();
        // 10000 * 0.0145 + 10000 * 0.009
        assert_eq!(withheld.medicare, dec("235.00"));
    }

    #[test]
    fn test_no_surtax_below_threshold() {
        let tables = create_test_tables();
        let withheld = fica(dec("10000"), dec("100000"), &tables).unwrap();
        assert_eq!(withheld.medicare, dec("145.00"));
    }

    #[test]
    fn test_negative_income_returns_invalid_input() {
        let tables = create_test_tables();
        let result = fica(dec("-1"), Decimal::ZERO, &tables);
        assert!(matches!(
            result.unwrap_err(),
            EngineError::InvalidInput { .. }
        ));
    }

    #[test]
    fn test_negative_ytd_returns_invalid_input() {
        let tables = create_test_tables();
        let result = fica(dec("1000"), dec("-1"), &tables);
        match result.unwrap_err() {
            EngineError::InvalidInput { field, .. } => assert_eq!(field, "ytd_earnings"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_components_rounded_independently() {
        let tables = create_test_tables();
        // 1025 * 0.062 = 63.55; 1025 * 0.0145 = 14.8625 -> 14.86
        let withheld = fica(dec("1025"), Decimal::ZERO, &tables).unwrap();
        assert_eq!(withheld.social_security, dec("63.55"));
        assert_eq!(withheld.medicare, dec("14.86"));
    }
}
