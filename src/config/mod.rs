//! Tax rate table loading and management.
//!
//! This module provides functionality to load tax rate tables from YAML
//! files: federal brackets by filing status, state flat rates, FICA rates
//! and thresholds, and the validity window of the table set.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/us2024").unwrap();
//! println!("Loaded {} tables", loader.tables().metadata().tax_year);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    FederalTables, FicaTables, StateTables, TaxBracket, TaxTableMetadata, TaxTables,
};
