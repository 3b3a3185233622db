use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use registry::ValidationError;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload")]
    MalformedPayload,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] redis::RedisError),

    #[error("Corrupt record: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Environment misconfigured: {0}")]
    Config(String),

    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedPayload | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_)
            | AppError::Serialization(_)
            | AppError::Config(_)
            | AppError::Io(_) => {
                error!("{self}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(self.to_string())).into_response()
    }
}
