use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::render::RenderError;

/// One structural problem found while decoding a request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// Location of the offending value, starting with `"body"`.
    pub loc: Vec<Value>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unprocessable entity: {0:?}")]
    UnprocessableEntity(Vec<FieldError>),

    /// Body could not be read (too large, aborted).
    #[error("Request rejected: {message}")]
    PayloadRejected { status: StatusCode, message: String },

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

const INTERNAL_DETAIL: &str = "Internal Server Error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!(msg)),
            AppError::UnprocessableEntity(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, json!(errors))
            }
            AppError::PayloadRejected { status, message } => (status, json!(message)),
            AppError::Render(e) => {
                tracing::error!("Render error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, json!(INTERNAL_DETAIL))
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, json!(INTERNAL_DETAIL))
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, json!(INTERNAL_DETAIL))
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
