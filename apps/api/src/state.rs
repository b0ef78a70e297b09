use std::sync::Arc;

use crate::analysis::pipeline::Analyzer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable after startup; every request runs its own analysis through it.
    pub analyzer: Arc<Analyzer>,
    /// Upper bound on request bodies, applied to the upload route.
    pub max_upload_bytes: usize,
}
