pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{career, jobs, matching, resume, trends, verify};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/jobs", get(jobs::handlers::handle_list_jobs))
        .route("/api/v1/career", post(career::handle_career_paths))
        .route("/api/v1/dashboard", get(trends::handle_dashboard))
        .route("/api/v1/trends", get(trends::handle_trends))
        .route("/api/v1/resume", post(matching::handle_match_resume))
        .route("/api/v1/verify-job", post(verify::handle_verify_job))
        .route(
            "/api/v1/resume/upload",
            post(resume::handlers::handle_upload_resume),
        )
        .with_state(state)
}
