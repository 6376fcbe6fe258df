use anyhow::Result;
use rust_decimal::Decimal;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Clone)]
pub struct WalletsRepo {
    pub pool: PgPool,
}

#[derive(Debug, Clone)]
pub struct StoredWallet {
    pub user_id: Uuid,
    pub balance: Decimal,
    pub frozen_amount: Decimal,
}

impl WalletsRepo {
    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<StoredWallet>> {
        let row = sqlx::query(
            "SELECT user_id, balance, frozen_amount FROM wallets WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| StoredWallet {
            user_id: r.get("user_id"),
            balance: r.get("balance"),
            frozen_amount: r.get("frozen_amount"),
        }))
    }
}
