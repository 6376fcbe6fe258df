use crate::domain::gig::CompleteGigRequest;
use crate::AppState;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;

pub async fn complete_gig(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CompleteGigRequest>,
) -> impl IntoResponse {
    let caller = match state.identity.resolve(&headers).await {
        Ok(caller) => caller,
        Err(e) => {
            return (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": e.to_string()})),
            )
                .into_response()
        }
    };

    match state.settlement_service.complete(req, caller).await {
        Ok(()) => (
            axum::http::StatusCode::OK,
            Json(serde_json::json!({"success": true})),
        )
            .into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}
