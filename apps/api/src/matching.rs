//! Skill-based matching between a user's skill set and the job catalog.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::AppError;
use crate::jobs::model::JobRecord;
use crate::skills::capitalize;
use crate::state::AppState;

/// Scored matching returns at most this many jobs.
const MAX_SCORED_RESULTS: usize = 10;

/// Jobs sharing at least one skill with the query set, case-insensitively.
/// Records come back unmodified, in catalog order.
pub fn filter_by_skills(catalog: &[JobRecord], skills: &[String]) -> Vec<JobRecord> {
    let wanted: HashSet<String> = skills.iter().map(|s| s.to_lowercase()).collect();
    catalog
        .iter()
        .filter(|job| job.skills.iter().any(|s| wanted.contains(&s.to_lowercase())))
        .cloned()
        .collect()
}

/// A catalog record annotated with the overlap against the query skills.
#[derive(Debug, Clone, Serialize)]
pub struct MatchedJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub matched_skills: Vec<String>,
    pub match_score: usize,
    pub salary: String,
    pub link: String,
}

/// Scored matching: annotate every overlapping job with its matched-skill
/// subset and count, sort by descending count, keep the top 10.
pub fn score_jobs(catalog: &[JobRecord], skills: &[String]) -> Vec<MatchedJob> {
    let wanted: HashSet<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    let mut scored: Vec<MatchedJob> = catalog
        .iter()
        .filter_map(|job| {
            let matched: Vec<String> = job
                .skills
                .iter()
                .map(|s| s.to_lowercase())
                .filter(|s| wanted.contains(s))
                .map(|s| capitalize(&s))
                .collect();
            if matched.is_empty() {
                return None;
            }
            Some(MatchedJob {
                title: job.title.clone(),
                company: job.company.clone(),
                location: job.location.clone(),
                match_score: matched.len(),
                matched_skills: matched,
                salary: job.salary.clone(),
                link: job.link.clone(),
            })
        })
        .collect();

    // Stable sort: ties keep catalog order.
    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored.truncate(MAX_SCORED_RESULTS);
    scored
}

#[derive(Debug, Deserialize)]
pub struct ResumeMatchRequest {
    pub skills: Vec<String>,
}

/// POST /api/v1/resume
/// Intersection match of the supplied skills against the catalog.
pub async fn handle_match_resume(
    State(state): State<AppState>,
    Json(req): Json<ResumeMatchRequest>,
) -> Result<Json<Vec<JobRecord>>, AppError> {
    if req.skills.is_empty() {
        return Err(AppError::Validation(
            "Please provide at least one skill".to_string(),
        ));
    }
    let catalog = state.catalog.get().await;
    Ok(Json(filter_by_skills(&catalog, &req.skills)))
}
