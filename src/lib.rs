//! Payroll Computation and Disbursement Engine
//!
//! This crate provides the pure calculation core of a payroll system: turning
//! employee time and salary records into gross pay, tax withholding, deductions,
//! and net pay, plus the routing logic that disburses net pay over a wallet
//! transfer or the ACH rail.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod disbursement;
pub mod error;
pub mod models;
pub mod run;
