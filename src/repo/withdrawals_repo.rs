use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Row, Transaction};
use uuid::Uuid;

pub struct WithdrawalRecordInput {
    pub request_id: Uuid,
    pub user_id: Uuid,
    pub amount: Decimal,
    pub fee: Decimal,
    pub payout_amount: Decimal,
    pub upi: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct WithdrawalsRepo {
    pub pool: PgPool,
}

#[derive(Debug, Clone)]
pub struct StoredWithdrawal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: Decimal,
    pub fee: Decimal,
    pub payout_amount: Decimal,
    pub upi: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl WithdrawalsRepo {
    pub async fn insert_request_tx(
        tx: &mut Transaction<'_, Postgres>,
        data: &WithdrawalRecordInput,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO withdrawal_requests (id, user_id, amount, fee, payout_amount, upi, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, 'PENDING', $7)
            "#,
        )
        .bind(data.request_id)
        .bind(data.user_id)
        .bind(data.amount)
        .bind(data.fee)
        .bind(data.payout_amount)
        .bind(data.upi.clone())
        .bind(data.created_at)
        .execute(tx.as_mut())
        .await?;

        Ok(())
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<StoredWithdrawal>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, amount, fee, payout_amount, upi, status, created_at
            FROM withdrawal_requests
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(to_stored).collect())
    }

    pub async fn list_pending(&self, limit: i64) -> Result<Vec<StoredWithdrawal>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, amount, fee, payout_amount, upi, status, created_at
            FROM withdrawal_requests
            WHERE status = 'PENDING'
            ORDER BY created_at ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(to_stored).collect())
    }
}

fn to_stored(r: sqlx::postgres::PgRow) -> StoredWithdrawal {
    StoredWithdrawal {
        id: r.get("id"),
        user_id: r.get("user_id"),
        amount: r.get("amount"),
        fee: r.get("fee"),
        payout_amount: r.get("payout_amount"),
        upi: r.get("upi"),
        status: r.get("status"),
        created_at: r.get("created_at"),
    }
}
