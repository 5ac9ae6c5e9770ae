//! Text comparison endpoint

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::error::{ApiError, Result};
use crate::models::{CompareRequest, CompareResponse};
use crate::AppState;

/// POST /api/compare
/// Aligns a submission against its reference text
pub async fn compare(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CompareRequest>, JsonRejection>,
) -> Result<Json<CompareResponse>> {
    let Json(payload) = payload?;

    check_length("user_text", &payload.user_text, state.max_text_chars)?;
    check_length("reference_text", &payload.reference_text, state.max_text_chars)?;

    let options = payload.options();
    let elements = redpen_core::compare(
        &state.aligner,
        &payload.user_text,
        &payload.reference_text,
        options,
    );

    let response = CompareResponse::new(elements);
    tracing::debug!(
        elements = response.elements.len(),
        issues = response.issues,
        highlighting = options.highlighting,
        "Compared submission"
    );

    Ok(Json(response))
}

fn check_length(field: &str, text: &str, limit: usize) -> Result<()> {
    let len = text.chars().count();
    if len > limit {
        return Err(ApiError::TooLarge(format!(
            "{} has {} characters, limit is {}",
            field, len, limit
        )));
    }
    Ok(())
}
