use crate::domain::api::{err, internal, ApiError};
use crate::domain::events::GigCompletedEvent;
use crate::domain::gig::CompleteGigRequest;
use crate::domain::rating::fold_rating;
use crate::identity::AuthUser;
use crate::repo::gigs_repo::GigsRepo;
use crate::repo::outbox_repo::OutboxRepo;
use crate::repo::users_repo::UsersRepo;
use rust_decimal::Decimal;
use sqlx::PgPool;

#[derive(Clone)]
pub struct SettlementService {
    pub pool: PgPool,
    pub gigs_repo: GigsRepo,
}

impl SettlementService {
    /// Finalizes a gig and folds its rating and price into the assigned
    /// worker's aggregates. Both writes share one transaction: a settlement
    /// either lands whole or not at all.
    pub async fn complete(
        &self,
        req: CompleteGigRequest,
        caller: Option<AuthUser>,
    ) -> Result<(), ApiError> {
        let _caller = caller.ok_or_else(|| {
            (
                axum::http::StatusCode::UNAUTHORIZED,
                err("UNAUTHORIZED", "no authenticated user"),
            )
        })?;

        let gig = self
            .gigs_repo
            .find_by_id(req.gig_id)
            .await
            .map_err(internal)?
            .ok_or_else(|| {
                (
                    axum::http::StatusCode::NOT_FOUND,
                    err("GIG_NOT_FOUND", "gig not found"),
                )
            })?;

        let mut tx = self.pool.begin().await.map_err(|e| internal(e.into()))?;

        let transitioned =
            GigsRepo::complete_gig_tx(&mut tx, req.gig_id, req.rating, req.review.as_deref())
                .await
                .map_err(internal)?;
        if !transitioned {
            tx.rollback().await.map_err(|e| internal(e.into()))?;
            return Err((
                axum::http::StatusCode::CONFLICT,
                err("GIG_ALREADY_COMPLETED", "gig is already completed"),
            ));
        }

        if let Some(worker_id) = gig.assigned_worker_id {
            // A vanished worker row degrades to a plain completion, same as
            // an unassigned gig.
            if let Some(aggregates) = UsersRepo::lock_worker_aggregates_tx(&mut tx, worker_id)
                .await
                .map_err(internal)?
            {
                let stats = fold_rating(aggregates.rating, aggregates.rating_count, req.rating);
                let total_earned =
                    aggregates.total_earned.unwrap_or(Decimal::ZERO) + gig.price;
                UsersRepo::update_worker_aggregates_tx(
                    &mut tx,
                    worker_id,
                    stats.rating,
                    stats.rating_count,
                    total_earned,
                )
                .await
                .map_err(internal)?;
            }
        }

        let event = GigCompletedEvent {
            gig_id: req.gig_id,
            worker_id: gig.assigned_worker_id,
            price: gig.price,
            rating: req.rating,
            timestamp: chrono::Utc::now(),
        };
        OutboxRepo::insert_tx(
            &mut tx,
            req.gig_id,
            "gig.completed",
            serde_json::to_value(event).map_err(|e| internal(e.into()))?,
        )
        .await
        .map_err(internal)?;

        tx.commit().await.map_err(|e| internal(e.into()))?;
        Ok(())
    }
}
