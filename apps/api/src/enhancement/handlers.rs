//! Axum route handlers for the enhancement API.

use axum::{extract::State, Json};
use tracing::debug;

use crate::enhancement::enhance;
use crate::errors::AppError;
use crate::models::resume::{EnhanceRequest, EnhanceResponse};
use crate::state::AppState;
use crate::validation::AppJson;

/// POST /ai-enhance
pub async fn handle_enhance(
    State(state): State<AppState>,
    AppJson(request): AppJson<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let rule_set = state.config.enhancement_rules;
    debug!(
        section = %request.section,
        %rule_set,
        chars = request.content.chars().count(),
        "Enhancing section"
    );

    let enhanced_content = enhance(rule_set, &request.section, &request.content);

    Ok(Json(EnhanceResponse { enhanced_content }))
}
