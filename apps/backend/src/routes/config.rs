//! Configuration endpoint

use axum::{extract::State, Json};

use crate::models::ConfigResponse;
use crate::AppState;

/// GET /api/config
/// Returns the active aligner policy
pub async fn show(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse::new(state.aligner.config(), state.max_text_chars))
}
