//! Stats block refresh

use super::HX_RESWAP;
use crate::{components::stats::stats_panel, state::AppState};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::warn;

/// Re-render the stats block; on failure keep whatever is on screen
pub async fn stats_fragment(State(state): State<Arc<AppState>>) -> Response {
    match state.api_client.get_stats().await {
        Ok(stats) => stats_panel(Some(&stats)).into_response(),
        Err(e) => {
            warn!(error = %e, "Failed to load stats");
            (StatusCode::NO_CONTENT, [(HX_RESWAP, "none")]).into_response()
        }
    }
}
