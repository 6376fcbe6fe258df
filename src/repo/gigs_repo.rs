use crate::domain::gig::GigStatus;
use anyhow::Result;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Row, Transaction};
use uuid::Uuid;

#[derive(Clone)]
pub struct GigsRepo {
    pub pool: PgPool,
}

#[derive(Debug, Clone)]
pub struct StoredGig {
    pub id: Uuid,
    pub assigned_worker_id: Option<Uuid>,
    pub price: Decimal,
    pub status: GigStatus,
}

impl GigsRepo {
    pub async fn find_by_id(&self, gig_id: Uuid) -> Result<Option<StoredGig>> {
        let row = sqlx::query(
            "SELECT id, assigned_worker_id, price, status FROM gigs WHERE id = $1",
        )
        .bind(gig_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| StoredGig {
            id: r.get("id"),
            assigned_worker_id: r.get("assigned_worker_id"),
            price: r.get("price"),
            status: GigStatus::parse(r.get::<String, _>("status").as_str()),
        }))
    }

    /// Conditional transition into COMPLETED. Returns false when the gig is
    /// already completed, so a concurrent or repeated settlement becomes a
    /// detectable no-op instead of a double credit.
    pub async fn complete_gig_tx(
        tx: &mut Transaction<'_, Postgres>,
        gig_id: Uuid,
        rating: f64,
        review: Option<&str>,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE gigs
            SET status = 'COMPLETED', rating = $2, review = $3, completed_at = now()
            WHERE id = $1 AND status <> 'COMPLETED'
            "#,
        )
        .bind(gig_id)
        .bind(rating)
        .bind(review)
        .execute(tx.as_mut())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
