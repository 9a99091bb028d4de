//! Axum route handlers for the resume API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::resume::{ResumeProfile, SaveResumeResponse};
use crate::state::AppState;
use crate::validation::AppJson;

/// POST /save-resume
///
/// Stores the submitted profile and mirrors it to disk. A failed mirror
/// write is logged by the store and still reported as a successful save.
pub async fn handle_save_resume(
    State(state): State<AppState>,
    AppJson(profile): AppJson<ResumeProfile>,
) -> Result<Json<SaveResumeResponse>, AppError> {
    let stored = state.store.save(profile).await;

    Ok(Json(SaveResumeResponse {
        message: "Resume saved successfully".to_string(),
        resume_id: stored.id,
        timestamp: stored.timestamp,
    }))
}
