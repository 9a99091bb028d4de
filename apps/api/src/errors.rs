use std::any::Any;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Error enhancing content: {0}")]
    Enhancement(String),

    #[error("Error saving resume: {0}")]
    Save(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            AppError::Enhancement(msg) => {
                tracing::error!("Enhancement failed: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "ENHANCEMENT_ERROR")
            }
            AppError::Save(msg) => {
                tracing::error!("Save failed: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "SAVE_ERROR")
            }
        };

        // 500 messages carry the underlying error text.
        let message = match &self {
            AppError::NotFound(msg) | AppError::Validation(msg) => msg.clone(),
            AppError::Enhancement(_) | AppError::Save(_) => self.to_string(),
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

/// Extracts a readable message from a caught panic payload.
pub fn panic_message(payload: Box<dyn Any + Send + 'static>) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    }
}

/// Router fallback for paths with no route.
pub async fn not_found() -> AppError {
    AppError::NotFound("The requested route does not exist".to_string())
}
