//! Disbursement result and status models.
//!
//! A [`DisbursementResult`] is produced once per disbursement attempt and
//! never mutated afterward; a retry produces a new result. A
//! [`DisbursementStatus`] is derived on every poll and not stored by the
//! engine.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The rail used to move funds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisbursementMethod {
    /// Atomic internal wallet-to-wallet transfer.
    Wallet,
    /// External ACH bank transfer.
    Ach,
}

/// The outcome of a single disbursement attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisbursementResult {
    /// Whether the funds were handed off successfully.
    pub success: bool,
    /// The rail selected; `None` when the attempt failed before routing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<DisbursementMethod>,
    /// Transaction id returned by the transfer primitive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Raw status reported by the ACH rail (e.g., "approved").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Failure description when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DisbursementResult {
    /// Builds a successful wallet-transfer result.
    pub fn wallet(transaction_id: impl Into<String>) -> Self {
        Self {
            success: true,
            method: Some(DisbursementMethod::Wallet),
            transaction_id: Some(transaction_id.into()),
            status: None,
            error: None,
        }
    }

    /// Builds a successful ACH-submission result.
    pub fn ach(transaction_id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            success: true,
            method: Some(DisbursementMethod::Ach),
            transaction_id: Some(transaction_id.into()),
            status: Some(status.into()),
            error: None,
        }
    }

    /// Builds a failure result. No transfer was completed.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            method: None,
            transaction_id: None,
            status: None,
            error: Some(error.into()),
        }
    }
}

/// Normalized settlement state of a disbursement transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementState {
    /// The transaction has not reached a terminal state yet.
    Pending,
    /// The transaction settled successfully.
    Completed,
    /// The transaction was declined, errored, or is unrecognized.
    Failed,
}

/// The normalized status of a disbursement, derived on each poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisbursementStatus {
    /// The three-state normalized outcome.
    pub status: SettlementState,
    /// Raw details payload for client display and debugging.
    pub details: serde_json::Value,
}

/// A wallet balance snapshot returned by the wallet collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    /// The available balance.
    pub amount: Decimal,
    /// ISO currency code.
    pub currency: String,
    /// When the balance was observed.
    pub as_of: DateTime<Utc>,
}

/// A raw transaction record returned by the transaction-status collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// The transaction id.
    pub transaction_id: String,
    /// Raw status vocabulary of the external rail.
    pub status: String,
    /// The transaction amount.
    pub amount: Decimal,
    /// ISO currency code.
    pub currency: String,
    /// When the transaction was created.
    pub created_at: DateTime<Utc>,
}
