use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant returns control to an interactive state — no failure here
/// tears down the session or the process.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Interviewer logic failure: {0}")]
    InterviewerLogic(String),

    #[error("Evaluation failure: {0}")]
    Evaluation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::InterviewerLogic(msg) => {
                tracing::error!("Interviewer logic failure: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "INTERVIEWER_LOGIC_FAILURE",
                    "The interviewer could not produce a valid turn. Send your answer again to retry.".to_string(),
                )
            }
            AppError::Evaluation(msg) => {
                tracing::error!("Evaluation failure: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "EVALUATION_FAILURE",
                    "The evaluation engine encountered an error. The session is still active — you may retry."
                        .to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
