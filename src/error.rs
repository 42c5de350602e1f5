//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll computation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. Note that
/// a failed disbursement attempt is deliberately *not* an error: the router
/// returns a structured [`DisbursementResult`](crate::models::DisbursementResult)
/// so a payroll run can keep processing remaining employees.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "income".to_string(),
///     message: "must not be negative".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input for 'income': must not be negative");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An input value was rejected before calculation.
    ///
    /// Negative income, malformed state codes, and inconsistent deduction
    /// definitions all fail fast with this variant; they are never silently
    /// coerced.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No tax rate was found for a well-formed state code.
    #[error("No tax rate found for state: {code}")]
    StateNotFound {
        /// The two-letter state code that was not found.
        code: String,
    },

    /// The loaded tax tables are not valid for the requested date.
    #[error("Tax tables are not valid for date {date}")]
    TablesNotValid {
        /// The date for which the tables were requested.
        date: NaiveDate,
    },

    /// A collaborator read failed (employee directory, time entries,
    /// deductions, wallet balance, or transaction record).
    #[error("Required data unavailable from {resource}: {message}")]
    DataUnavailable {
        /// The collaborator that failed.
        resource: String,
        /// A description of the failure.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::InvalidInput {
            field: "state_code".to_string(),
            message: "must be exactly two letters".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input for 'state_code': must be exactly two letters"
        );
    }

    #[test]
    fn test_state_not_found_displays_code() {
        let error = EngineError::StateNotFound {
            code: "ZZ".to_string(),
        };
        assert_eq!(error.to_string(), "No tax rate found for state: ZZ");
    }

    #[test]
    fn test_tables_not_valid_displays_date() {
        let error = EngineError::TablesNotValid {
            date: NaiveDate::from_ymd_opt(2031, 1, 1).unwrap(),
        };
        assert_eq!(error.to_string(), "Tax tables are not valid for date 2031-01-01");
    }

    #[test]
    fn test_data_unavailable_displays_resource() {
        let error = EngineError::DataUnavailable {
            resource: "wallet_balance".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Required data unavailable from wallet_balance: connection refused"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_data_unavailable() -> EngineResult<()> {
            Err(EngineError::DataUnavailable {
                resource: "employee_directory".to_string(),
                message: "timeout".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_data_unavailable()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
