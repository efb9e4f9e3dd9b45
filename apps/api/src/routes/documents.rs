//! Axum route handlers for generating and downloading profile documents.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extract::ValidatedJson;
use crate::models::{GenerateDocxResponse, ProfileRequest};
use crate::render::{render_profile, DOCX_MIME_TYPE};
use crate::storage::{document_file_name, is_valid_file_name};
use crate::state::AppState;

pub const NOT_FOUND_DETAIL: &str = "File not found.";

/// POST /generate-docx
///
/// Renders the profile, stores it under a name derived from the client name
/// (replacing any earlier document for the same client), and returns the
/// download path.
pub async fn handle_generate_docx(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ProfileRequest>,
) -> Result<Json<GenerateDocxResponse>, AppError> {
    let file_name = document_file_name(&request.client_name);
    info!("Generating {file_name}");

    // CPU-bound document build — keep it off the async executor.
    let bytes = tokio::task::spawn_blocking(move || {
        render_profile(&request.client_name, &request.profile_sections)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in render: {e}")))??;

    state.store.put(&file_name, bytes).await?;
    info!("Saved {file_name}");

    Ok(Json(GenerateDocxResponse {
        download_url: format!("/download/{file_name}"),
    }))
}

/// GET /download/:filename
///
/// Returns the stored document as an attachment.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !is_valid_file_name(&file_name) {
        warn!("Rejected download name {file_name:?}");
        return Err(AppError::NotFound(NOT_FOUND_DETAIL.to_string()));
    }

    let bytes = state.store.get(&file_name).await?.ok_or_else(|| {
        warn!("Download requested for missing {file_name}");
        AppError::NotFound(NOT_FOUND_DETAIL.to_string())
    })?;

    info!("Serving {file_name} ({} bytes)", bytes.len());

    Ok((
        [
            (header::CONTENT_TYPE, DOCX_MIME_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&file_name)),
        ],
        bytes,
    ))
}

/// Builds an attachment disposition, switching to the RFC 5987 `filename*`
/// form when the name cannot go in a quoted ASCII string.
fn content_disposition(file_name: &str) -> String {
    if file_name.is_ascii() && !file_name.contains(['"', '\\']) {
        return format!("attachment; filename=\"{file_name}\"");
    }
    let encoded: String = file_name
        .bytes()
        .map(|b| {
            if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
                (b as char).to_string()
            } else {
                format!("%{b:02X}")
            }
        })
        .collect();
    format!("attachment; filename*=utf-8''{encoded}")
}
