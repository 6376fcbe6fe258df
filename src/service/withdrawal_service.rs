use crate::domain::api::{err, internal, ApiError};
use crate::domain::events::WithdrawalRequestedEvent;
use crate::domain::money::{is_plausible_vpa, FeeQuote, WithdrawalPolicy};
use crate::domain::withdrawal::{SubmitWithdrawalRequest, WithdrawalReceipt, WithdrawalStatus};
use crate::repo::outbox_repo::OutboxRepo;
use crate::repo::wallets_repo::WalletsRepo;
use crate::repo::withdrawals_repo::{WithdrawalRecordInput, WithdrawalsRepo};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct WithdrawalService {
    pub pool: PgPool,
    pub wallets_repo: WalletsRepo,
    pub withdrawals_repo: WithdrawalsRepo,
    pub policy: WithdrawalPolicy,
}

impl WithdrawalService {
    /// Records a withdrawal request net of platform fee. The wallet balance
    /// is untouched here; the payout processor debits it when the request
    /// leaves PENDING.
    pub async fn submit(
        &self,
        req: SubmitWithdrawalRequest,
    ) -> Result<WithdrawalReceipt, ApiError> {
        if self.policy.is_below_minimum(req.amount) {
            return Err((
                axum::http::StatusCode::BAD_REQUEST,
                err(
                    "INVALID_AMOUNT",
                    &format!("minimum withdrawal is ₹{}", self.policy.min_amount),
                ),
            ));
        }

        let wallet = self
            .wallets_repo
            .find_by_user(req.user_id)
            .await
            .map_err(internal)?
            .ok_or_else(|| {
                (
                    axum::http::StatusCode::NOT_FOUND,
                    err("WALLET_NOT_FOUND", "no wallet exists for this user"),
                )
            })?;

        if req.amount > wallet.balance {
            return Err((
                axum::http::StatusCode::BAD_REQUEST,
                err("INSUFFICIENT_BALANCE", "amount exceeds wallet balance"),
            ));
        }

        if !is_plausible_vpa(&req.upi) {
            return Err((
                axum::http::StatusCode::BAD_REQUEST,
                err("INVALID_UPI_FORMAT", "UPI id must contain '@'"),
            ));
        }

        let quote = self.policy.quote(req.amount);
        let request_id = Uuid::new_v4();
        let created_at = chrono::Utc::now();

        let record = WithdrawalRecordInput {
            request_id,
            user_id: req.user_id,
            amount: req.amount,
            fee: quote.fee,
            payout_amount: quote.payout_amount,
            upi: req.upi.clone(),
            created_at,
        };

        let event = WithdrawalRequestedEvent {
            request_id,
            user_id: req.user_id,
            amount: req.amount,
            fee: quote.fee,
            payout_amount: quote.payout_amount,
            upi: req.upi.clone(),
            timestamp: created_at,
        };

        let mut tx = self.pool.begin().await.map_err(|e| internal(e.into()))?;
        WithdrawalsRepo::insert_request_tx(&mut tx, &record)
            .await
            .map_err(internal)?;
        OutboxRepo::insert_tx(
            &mut tx,
            request_id,
            "wallet.withdrawal_requested",
            serde_json::to_value(event).map_err(|e| internal(e.into()))?,
        )
        .await
        .map_err(internal)?;
        tx.commit().await.map_err(|e| internal(e.into()))?;

        Ok(WithdrawalReceipt {
            request_id,
            user_id: req.user_id,
            amount: req.amount,
            fee: quote.fee,
            payout_amount: quote.payout_amount,
            upi: req.upi,
            status: WithdrawalStatus::Pending,
            created_at,
        })
    }

    /// Side-effect-free fee disclosure so callers can confirm before
    /// committing to a request.
    pub fn quote(&self, amount: Decimal) -> Result<FeeQuote, ApiError> {
        if self.policy.is_below_minimum(amount) {
            return Err((
                axum::http::StatusCode::BAD_REQUEST,
                err(
                    "INVALID_AMOUNT",
                    &format!("minimum withdrawal is ₹{}", self.policy.min_amount),
                ),
            ));
        }
        Ok(self.policy.quote(amount))
    }
}
