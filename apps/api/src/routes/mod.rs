pub mod documents;
pub mod health;
pub mod openapi;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/openapi.json", get(openapi::openapi_handler))
        .route("/generate-docx", post(documents::handle_generate_docx))
        .route("/download/:filename", get(documents::handle_download))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}
