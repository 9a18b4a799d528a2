use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("completion call failed: {0}")]
    Completion(#[from] rig::completion::PromptError),
}

/// Upstream completion failures are not part of the response contract: the
/// caller gets a bare 500 while the cause goes to the log. Only parse
/// failures get a structured body, and those never reach this path.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Internal server error" })),
        )
            .into_response()
    }
}
