use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalRequestedEvent {
    pub request_id: Uuid,
    pub user_id: Uuid,
    pub amount: Decimal,
    pub fee: Decimal,
    pub payout_amount: Decimal,
    pub upi: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GigCompletedEvent {
    pub gig_id: Uuid,
    pub worker_id: Option<Uuid>,
    pub price: Decimal,
    pub rating: f64,
    pub timestamp: DateTime<Utc>,
}
