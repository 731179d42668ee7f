use std::sync::Arc;

use crate::config::Config;
use crate::jobs::catalog::JobCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The memoized job catalog. `Arc` so the populate-once cache is shared
    /// across every cloned state.
    pub catalog: Arc<JobCatalog>,
    pub config: Config,
}
