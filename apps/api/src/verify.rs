//! Job-offer legitimacy heuristic: offers sent from generic mail domains
//! are flagged as suspicious.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

const GENERIC_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifyResult {
    pub status: &'static str,
}

pub fn verify_email(email: &str) -> VerifyResult {
    let lowered = email.to_lowercase();
    let status = if GENERIC_DOMAINS.iter().any(|d| lowered.contains(d)) {
        "Suspicious"
    } else {
        "Safe"
    };
    VerifyResult { status }
}

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub email: String,
}

/// POST /api/v1/verify-job
pub async fn handle_verify_job(
    Json(req): Json<VerifyRequest>,
) -> Result<Json<VerifyResult>, AppError> {
    if req.email.trim().is_empty() {
        return Err(AppError::Validation(
            "Please provide an 'email' in the JSON body".to_string(),
        ));
    }
    Ok(Json(verify_email(&req.email)))
}
