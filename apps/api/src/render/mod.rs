// Document rendering: ProfileRequest -> .docx bytes.
// Rendering is CPU-bound and synchronous; callers run it inside tokio::task::spawn_blocking.

pub mod document;
pub mod sections;
pub mod style;

use thiserror::Error;

pub use document::render_profile;

pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("row {row} of '{section}' has {cells} cells but the table has {columns} columns")]
    RowWidth {
        section: &'static str,
        row: usize,
        cells: usize,
        columns: usize,
    },

    #[error("failed to package document: {0}")]
    Package(String),
}
