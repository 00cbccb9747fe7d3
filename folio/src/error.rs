use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Database error: {0}")]
    Database(#[from] libsql::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Assistant error: {0}")]
    Assistant(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for FolioError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            FolioError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            FolioError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            FolioError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            FolioError::Database(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            FolioError::Assistant(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            FolioError::Export(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            FolioError::Json(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            FolioError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            FolioError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
