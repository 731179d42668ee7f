use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::matching::{score_jobs, MatchedJob};
use crate::resume::extract::extract_text;
use crate::skills::extract_resume_skills;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ResumeUploadResponse {
    pub extracted_skills: Vec<String>,
    pub matching_jobs: Vec<MatchedJob>,
}

/// POST /api/v1/resume/upload
/// Multipart upload with a `file` field: extract text, detect skills,
/// return the top scored catalog matches.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeUploadResponse>, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(AppError::Validation(
                "File name is empty. Please select a valid file.".to_string(),
            ));
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        upload = Some((filename, bytes.to_vec()));
        break;
    }

    let (filename, bytes) = upload.ok_or_else(|| {
        AppError::Validation("No file uploaded. Send a file with field name 'file'.".to_string())
    })?;

    let text = extract_text(&filename, &bytes)?;
    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Could not extract any text from the file. Please check the file content.".to_string(),
        ));
    }

    let skills = extract_resume_skills(&text);
    info!(file = %filename, skills = skills.len(), "resume processed");

    let catalog = state.catalog.get().await;
    let matching_jobs = score_jobs(&catalog, &skills);

    Ok(Json(ResumeUploadResponse {
        extracted_skills: skills,
        matching_jobs,
    }))
}
