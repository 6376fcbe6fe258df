use anyhow::Result;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Row, Transaction};
use uuid::Uuid;

#[derive(Clone)]
pub struct UsersRepo {
    pub pool: PgPool,
}

/// Raw aggregate columns as stored; NULLs mean the worker has no history
/// yet and defaults apply at fold time.
#[derive(Debug, Clone)]
pub struct WorkerAggregates {
    pub rating: Option<f64>,
    pub rating_count: Option<i32>,
    pub total_earned: Option<Decimal>,
}

impl UsersRepo {
    /// Locks the worker row for the remainder of the settlement transaction.
    pub async fn lock_worker_aggregates_tx(
        tx: &mut Transaction<'_, Postgres>,
        worker_id: Uuid,
    ) -> Result<Option<WorkerAggregates>> {
        let row = sqlx::query(
            "SELECT rating, rating_count, total_earned FROM users WHERE id = $1 FOR UPDATE",
        )
        .bind(worker_id)
        .fetch_optional(tx.as_mut())
        .await?;

        Ok(row.map(|r| WorkerAggregates {
            rating: r.get("rating"),
            rating_count: r.get("rating_count"),
            total_earned: r.get("total_earned"),
        }))
    }

    pub async fn update_worker_aggregates_tx(
        tx: &mut Transaction<'_, Postgres>,
        worker_id: Uuid,
        rating: f64,
        rating_count: i32,
        total_earned: Decimal,
    ) -> Result<()> {
        sqlx::query(
            "UPDATE users SET rating = $2, rating_count = $3, total_earned = $4 WHERE id = $1",
        )
        .bind(worker_id)
        .bind(rating)
        .bind(rating_count)
        .bind(total_earned)
        .execute(tx.as_mut())
        .await?;

        Ok(())
    }
}
