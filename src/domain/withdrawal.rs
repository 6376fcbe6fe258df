use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WithdrawalStatus {
    Pending,
    Approved,
    Paid,
    Rejected,
}

impl WithdrawalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WithdrawalStatus::Pending => "PENDING",
            WithdrawalStatus::Approved => "APPROVED",
            WithdrawalStatus::Paid => "PAID",
            WithdrawalStatus::Rejected => "REJECTED",
        }
    }

    pub fn parse(s: &str) -> WithdrawalStatus {
        match s {
            "APPROVED" => WithdrawalStatus::Approved,
            "PAID" => WithdrawalStatus::Paid,
            "REJECTED" => WithdrawalStatus::Rejected,
            _ => WithdrawalStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitWithdrawalRequest {
    pub user_id: Uuid,
    pub amount: Decimal,
    pub upi: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalReceipt {
    pub request_id: Uuid,
    pub user_id: Uuid,
    pub amount: Decimal,
    pub fee: Decimal,
    pub payout_amount: Decimal,
    pub upi: String,
    pub status: WithdrawalStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitWithdrawalResponse {
    pub success: bool,
    pub request: WithdrawalReceipt,
}

#[cfg(test)]
mod tests {
    use super::WithdrawalStatus;

    #[test]
    fn status_round_trips() {
        for s in ["PENDING", "APPROVED", "PAID", "REJECTED"] {
            assert_eq!(WithdrawalStatus::parse(s).as_str(), s);
        }
        assert_eq!(WithdrawalStatus::parse("garbage"), WithdrawalStatus::Pending);
    }
}
