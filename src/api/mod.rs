//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoint for calculating a paycheck
//! from an employee, pay period, time entries, and deductions.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::ApiError;
pub use state::AppState;
