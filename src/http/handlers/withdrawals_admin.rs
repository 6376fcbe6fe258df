use crate::AppState;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PendingParams {
    pub limit: Option<i64>,
}

/// Feed for the external payout processor. Status transitions happen on
/// that side; this endpoint only reads.
pub async fn list_pending(
    State(state): State<AppState>,
    Query(params): Query<PendingParams>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(100).clamp(1, 1000);
    match state.withdrawals_repo.list_pending(limit).await {
        Ok(items) => {
            let resp: Vec<serde_json::Value> = items
                .into_iter()
                .map(|w| {
                    serde_json::json!({
                        "requestId": w.id,
                        "userId": w.user_id,
                        "amount": w.amount,
                        "fee": w.fee,
                        "payoutAmount": w.payout_amount,
                        "upi": w.upi,
                        "createdAt": w.created_at,
                    })
                })
                .collect();
            (axum::http::StatusCode::OK, Json(resp)).into_response()
        }
        Err(e) => (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}
