//! Settlement status normalization.

use serde_json::json;
use tracing::warn;

use crate::error::EngineResult;
use crate::models::{DisbursementStatus, SettlementState, TransactionRecord};

/// Access to transaction records on the external rail.
#[allow(async_fn_in_trait)]
pub trait TransactionReader {
    /// Fetches the raw transaction record for an id.
    async fn transaction(&self, transaction_id: &str) -> EngineResult<TransactionRecord>;
}

/// Maps raw rail status strings onto the three-state settlement vocabulary.
///
/// `"approved"` is the only success status; `"pending"` and `"processing"`
/// are in flight; anything else, including statuses this engine has never
/// seen, is failed. Unknown-as-failed keeps a new rail status from being
/// reported as money in flight when it may never settle.
#[derive(Debug, Clone)]
pub struct StatusResolver<T> {
    reader: T,
}

impl<T: TransactionReader> StatusResolver<T> {
    /// Creates a resolver over the given transaction reader.
    pub fn new(reader: T) -> Self {
        Self { reader }
    }

    /// Resolves the current settlement status of a transaction.
    ///
    /// The status is derived fresh on every call and not stored. A failed
    /// record fetch resolves to `Failed` with the error in the details
    /// payload rather than propagating.
    pub async fn resolve(&self, transaction_id: &str) -> DisbursementStatus {
        let record = match self.reader.transaction(transaction_id).await {
            Ok(record) => record,
            Err(e) => {
                warn!(transaction_id, error = %e, "transaction record fetch failed");
                return DisbursementStatus {
                    status: SettlementState::Failed,
                    details: json!({ "error": e.to_string() }),
                };
            }
        };

        let status = match record.status.as_str() {
            "approved" => SettlementState::Completed,
            "pending" | "processing" => SettlementState::Pending,
            _ => SettlementState::Failed,
        };

        DisbursementStatus {
            status,
            details: serde_json::to_value(&record).unwrap_or(serde_json::Value::Null),
        }
    }
}
