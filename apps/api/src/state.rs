use std::sync::Arc;

use crate::storage::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Where rendered documents are written and read back from.
    pub store: Arc<dyn DocumentStore>,
}
