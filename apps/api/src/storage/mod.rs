// Document storage: the handle both the generate and download handlers share.
// Injected through AppState; never a module-level path.

pub mod filesystem;
pub mod naming;

use async_trait::async_trait;
use bytes::Bytes;

pub use filesystem::LocalDocumentStore;
pub use naming::{document_file_name, is_valid_file_name};

/// Storage backend for rendered documents, keyed by file name.
///
/// Callers pass names that already satisfy [`is_valid_file_name`].
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Stores `bytes` under `file_name`, replacing any previous document.
    async fn put(&self, file_name: &str, bytes: Bytes) -> std::io::Result<()>;

    /// Returns the stored document, or `None` if nothing exists under `file_name`.
    async fn get(&self, file_name: &str) -> std::io::Result<Option<Bytes>>;
}
