use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Routing provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Dataset I/O error: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("Dataset CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed dataset: {0}")]
    MalformedDataset(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidInput(ref e) => (StatusCode::BAD_REQUEST, e.clone()),
            AppError::ProviderUnavailable(ref e) => {
                tracing::error!("Routing provider error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Routing service error".to_string(),
                )
            }
            AppError::Persistence(ref e) => {
                tracing::error!("Dataset I/O error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Dataset storage error".to_string(),
                )
            }
            AppError::Csv(ref e) => {
                tracing::error!("Dataset CSV error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Dataset storage error".to_string(),
                )
            }
            AppError::MalformedDataset(ref e) => {
                tracing::warn!("Malformed dataset: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.clone())
            }
            AppError::NotFound(ref e) => (StatusCode::NOT_FOUND, e.clone()),
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
