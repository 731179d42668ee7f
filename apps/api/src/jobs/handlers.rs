use axum::{extract::State, Json};

use crate::jobs::model::JobRecord;
use crate::state::AppState;

/// GET /api/v1/jobs
/// The full merged catalog. First request triggers the aggregation
/// pipeline; later requests serve the cache.
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<JobRecord>> {
    let catalog = state.catalog.get().await;
    Json(catalog.as_ref().clone())
}
