//! Configuration types for tax rate tables.
//!
//! This module contains the strongly-typed tax table structures that are
//! deserialized from YAML configuration files. The aggregate [`TaxTables`]
//! is an explicitly versioned, immutable object injected into the tax
//! calculators; callers check its validity window before use rather than
//! relying on any process-wide state.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::FilingStatus;

/// Metadata identifying a tax table set and its validity window.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxTableMetadata {
    /// The jurisdiction these tables cover (e.g., "US").
    pub jurisdiction: String,
    /// The tax year the tables were published for.
    pub tax_year: i32,
    /// The version of the table set.
    pub version: String,
    /// URL to the official source documentation.
    pub source_url: String,
    /// First date the tables are valid (inclusive).
    pub valid_from: NaiveDate,
    /// Last date the tables are valid (inclusive).
    pub valid_until: NaiveDate,
}

/// One progressive tax bracket.
///
/// `base` is the precomputed cumulative tax owed on all income below
/// `floor`, so the tax for income inside a bracket is
/// `base + (income - floor) * rate`. The top bracket is unbounded; a
/// bracket's ceiling is implied by the next bracket's floor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxBracket {
    /// The lower bound of the bracket (inclusive).
    pub floor: Decimal,
    /// The marginal rate applied to income above the floor.
    pub rate: Decimal,
    /// Cumulative tax owed on all income below the floor.
    pub base: Decimal,
}

/// Federal withholding tables: allowance value plus one progressive
/// bracket table per filing status.
#[derive(Debug, Clone, Deserialize)]
pub struct FederalTables {
    /// Annual dollar value of one withholding allowance.
    pub allowance_value: Decimal,
    /// Brackets for single filers, sorted by floor ascending.
    pub single: Vec<TaxBracket>,
    /// Brackets for married-filing-jointly filers.
    pub married: Vec<TaxBracket>,
    /// Brackets for head-of-household filers.
    pub head: Vec<TaxBracket>,
}

impl FederalTables {
    /// Returns the bracket table for the given filing status.
    pub fn brackets_for(&self, filing_status: FilingStatus) -> &[TaxBracket] {
        match filing_status {
            FilingStatus::Single => &self.single,
            FilingStatus::Married => &self.married,
            FilingStatus::Head => &self.head,
        }
    }
}

/// State income tax tables.
///
/// States with statutory zero income tax are listed explicitly; every
/// other supported state carries a single representative flat rate. This
/// is a deliberate simplification over true progressive state schedules.
#[derive(Debug, Clone, Deserialize)]
pub struct StateTables {
    /// Two-letter codes of states with no income tax.
    pub no_income_tax: Vec<String>,
    /// Flat representative rate per remaining state code.
    pub flat_rates: HashMap<String, Decimal>,
}

impl StateTables {
    /// Returns true if the state levies no income tax.
    pub fn is_zero_tax(&self, code: &str) -> bool {
        self.no_income_tax.iter().any(|s| s == code)
    }

    /// Returns the flat rate for a state, if configured.
    pub fn flat_rate(&self, code: &str) -> Option<Decimal> {
        self.flat_rates.get(code).copied()
    }
}

/// FICA (Social Security and Medicare) rates and thresholds.
#[derive(Debug, Clone, Deserialize)]
pub struct FicaTables {
    /// Social Security (OASDI) rate.
    pub social_security_rate: Decimal,
    /// Annual wage base above which Social Security no longer applies.
    pub social_security_wage_base: Decimal,
    /// Base Medicare rate, no wage cap.
    pub medicare_rate: Decimal,
    /// Additional Medicare rate on earnings above the threshold.
    pub additional_medicare_rate: Decimal,
    /// Annual earnings threshold for the additional Medicare rate.
    pub additional_medicare_threshold: Decimal,
}

/// The complete tax table set loaded from YAML files.
///
/// Immutable once constructed. Callers are expected to call
/// [`TaxTables::is_valid_for`] for the relevant pay date before computing
/// taxes with a table set.
#[derive(Debug, Clone)]
pub struct TaxTables {
    /// Table set metadata and validity window.
    metadata: TaxTableMetadata,
    /// Federal withholding tables.
    federal: FederalTables,
    /// State income tax tables.
    state: StateTables,
    /// FICA rates and thresholds.
    fica: FicaTables,
}

impl TaxTables {
    /// Creates a new TaxTables from its component parts.
    ///
    /// Bracket tables are sorted by floor ascending so lookups can rely
    /// on ordering regardless of file order.
    pub fn new(
        metadata: TaxTableMetadata,
        federal: FederalTables,
        state: StateTables,
        fica: FicaTables,
    ) -> Self {
        let mut federal = federal;
        federal.single.sort_by(|a, b| a.floor.cmp(&b.floor));
        federal.married.sort_by(|a, b| a.floor.cmp(&b.floor));
        federal.head.sort_by(|a, b| a.floor.cmp(&b.floor));
        Self {
            metadata,
            federal,
            state,
            fica,
        }
    }

    /// Returns the table set metadata.
    pub fn metadata(&self) -> &TaxTableMetadata {
        &self.metadata
    }

    /// Returns the federal withholding tables.
    pub fn federal(&self) -> &FederalTables {
        &self.federal
    }

    /// Returns the state tax tables.
    pub fn state(&self) -> &StateTables {
        &self.state
    }

    /// Returns the FICA rates and thresholds.
    pub fn fica(&self) -> &FicaTables {
        &self.fica
    }

    /// Returns true if this table set is valid for the given date.
    pub fn is_valid_for(&self, date: NaiveDate) -> bool {
        date >= self.metadata.valid_from && date <= self.metadata.valid_until
    }
}
