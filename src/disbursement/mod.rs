//! Disbursement routing and settlement status resolution.
//!
//! The router selects between an internal wallet transfer and an external
//! ACH submission based on available funds, and reports every outcome as a
//! [`DisbursementResult`](crate::models::DisbursementResult) value rather
//! than an error. The status resolver normalizes raw rail status strings
//! into the engine's three-state settlement vocabulary.
//!
//! External rails are reached through the [`WalletGateway`], [`AchGateway`]
//! and [`TransactionReader`] traits so the routing and mapping logic can be
//! tested against in-memory fakes.

mod router;
mod status;

pub use router::{AchGateway, AchSubmission, DisbursementRouter, WalletGateway};
pub use status::{StatusResolver, TransactionReader};
