use crate::domain::withdrawal::{
    SubmitWithdrawalRequest, SubmitWithdrawalResponse, WithdrawalStatus,
};
use crate::AppState;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub async fn submit_withdrawal(
    State(state): State<AppState>,
    Json(req): Json<SubmitWithdrawalRequest>,
) -> impl IntoResponse {
    match state.withdrawal_service.submit(req).await {
        Ok(receipt) => (
            axum::http::StatusCode::OK,
            Json(SubmitWithdrawalResponse {
                success: true,
                request: receipt,
            }),
        )
            .into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct QuoteParams {
    pub amount: Decimal,
}

pub async fn withdrawal_quote(
    State(state): State<AppState>,
    Query(params): Query<QuoteParams>,
) -> impl IntoResponse {
    match state.withdrawal_service.quote(params.amount) {
        Ok(quote) => (axum::http::StatusCode::OK, Json(quote)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletView {
    pub user_id: Uuid,
    pub balance: Decimal,
    pub frozen_amount: Decimal,
}

pub async fn get_wallet(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let caller = match state.identity.resolve(&headers).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                axum::http::StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({"error": "unauthorized"})),
            )
                .into_response()
        }
        Err(e) => {
            return (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": e.to_string()})),
            )
                .into_response()
        }
    };

    match state.wallets_repo.find_by_user(caller.id).await {
        Ok(Some(wallet)) => (
            axum::http::StatusCode::OK,
            Json(WalletView {
                user_id: wallet.user_id,
                balance: wallet.balance,
                frozen_amount: wallet.frozen_amount,
            }),
        )
            .into_response(),
        Ok(None) => (
            axum::http::StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "wallet not found"})),
        )
            .into_response(),
        Err(e) => (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalView {
    pub request_id: Uuid,
    pub amount: Decimal,
    pub fee: Decimal,
    pub payout_amount: Decimal,
    pub upi: String,
    pub status: WithdrawalStatus,
    pub created_at: DateTime<Utc>,
}

pub async fn list_withdrawals(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let caller = match state.identity.resolve(&headers).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                axum::http::StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({"error": "unauthorized"})),
            )
                .into_response()
        }
        Err(e) => {
            return (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": e.to_string()})),
            )
                .into_response()
        }
    };

    match state.withdrawals_repo.list_for_user(caller.id).await {
        Ok(items) => {
            let resp: Vec<WithdrawalView> = items
                .into_iter()
                .map(|w| WithdrawalView {
                    request_id: w.id,
                    amount: w.amount,
                    fee: w.fee,
                    payout_amount: w.payout_amount,
                    upi: w.upi,
                    status: WithdrawalStatus::parse(&w.status),
                    created_at: w.created_at,
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
