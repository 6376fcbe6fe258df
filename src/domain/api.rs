use axum::http::StatusCode;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub code: String,
    pub error: String,
}

pub type ApiError = (StatusCode, ErrorEnvelope);

pub fn err(code: &str, message: &str) -> ErrorEnvelope {
    ErrorEnvelope {
        success: false,
        code: code.to_string(),
        error: message.to_string(),
    }
}

pub fn internal(e: anyhow::Error) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        err("INTERNAL_ERROR", &e.to_string()),
    )
}
