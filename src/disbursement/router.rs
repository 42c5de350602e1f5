//! Funding-source selection and transfer hand-off.

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::error::EngineResult;
use crate::models::{DisbursementResult, WalletBalance};

/// Access to the internal wallet rail.
#[allow(async_fn_in_trait)]
pub trait WalletGateway {
    /// Fetches the employer wallet balance available for payroll.
    async fn balance(&self) -> EngineResult<WalletBalance>;

    /// Executes an atomic wallet-to-wallet transfer and returns the
    /// transaction id.
    async fn transfer(&self, employee_id: &str, amount: Decimal) -> EngineResult<String>;
}

/// The rail's acknowledgement of an ACH submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchSubmission {
    /// Transaction id assigned by the rail.
    pub transaction_id: String,
    /// Raw status string (e.g., "approved", "pending").
    pub status: String,
}

/// Access to the external ACH rail.
#[allow(async_fn_in_trait)]
pub trait AchGateway {
    /// Submits an ACH transfer for asynchronous settlement.
    async fn submit(&self, employee_id: &str, amount: Decimal) -> EngineResult<AchSubmission>;
}

/// Routes a net-pay amount to the wallet or ACH rail.
///
/// The wallet rail is preferred whenever the employer wallet balance
/// covers the amount; otherwise the payment falls back to ACH. Routing
/// never returns an error: every attempt, including a failed balance
/// fetch or a rejected transfer, produces a [`DisbursementResult`] so a
/// payroll run can record the outcome and continue.
#[derive(Debug, Clone)]
pub struct DisbursementRouter<W, A> {
    wallet: W,
    ach: A,
}

impl<W: WalletGateway, A: AchGateway> DisbursementRouter<W, A> {
    /// Creates a router over the given rail gateways.
    pub fn new(wallet: W, ach: A) -> Self {
        Self { wallet, ach }
    }

    /// Disburses `amount` to `employee_id` over the selected rail.
    ///
    /// A non-positive amount fails before any rail is contacted; zero and
    /// negative net pay are never disbursed.
    pub async fn disburse(&self, employee_id: &str, amount: Decimal) -> DisbursementResult {
        if amount <= Decimal::ZERO {
            warn!(employee_id, %amount, "refusing non-positive disbursement");
            return DisbursementResult::failure(format!(
                "disbursement amount must be positive, got {}",
                amount
            ));
        }

        let balance = match self.wallet.balance().await {
            Ok(balance) => balance,
            Err(e) => {
                warn!(employee_id, error = %e, "wallet balance fetch failed");
                return DisbursementResult::failure(format!(
                    "wallet balance unavailable: {}",
                    e
                ));
            }
        };

        if balance.amount >= amount {
            match self.wallet.transfer(employee_id, amount).await {
                Ok(transaction_id) => {
                    info!(employee_id, %amount, %transaction_id, "wallet transfer completed");
                    DisbursementResult::wallet(transaction_id)
                }
                Err(e) => {
                    warn!(employee_id, %amount, error = %e, "wallet transfer failed");
                    DisbursementResult::failure(format!("wallet transfer failed: {}", e))
                }
            }
        } else {
            match self.ach.submit(employee_id, amount).await {
                Ok(submission) => {
                    info!(
                        employee_id,
                        %amount,
                        transaction_id = %submission.transaction_id,
                        status = %submission.status,
                        "ach transfer submitted"
                    );
                    DisbursementResult::ach(submission.transaction_id, submission.status)
                }
                Err(e) => {
                    warn!(employee_id, %amount, error = %e, "ach submission failed");
                    DisbursementResult::failure(format!("ach submission failed: {}", e))
                }
            }
        }
    }
}
