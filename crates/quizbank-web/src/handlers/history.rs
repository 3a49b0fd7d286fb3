//! Upload history: listing, undo and score editing

use super::{Triggers, alert_response};
use crate::{
    components::history::{history_panel, score_form},
    state::AppState,
};
use axum::{
    Form,
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use maud::Markup;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Body of the score editor
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreForm {
    /// New score; empty clears it
    #[serde(default)]
    pub score: String,
}

pub(crate) async fn render_history(state: &AppState) -> Markup {
    let records = state.api_client.get_history().await;
    if let Err(e) = &records {
        warn!(error = %e, "Failed to load history");
    }
    history_panel(&records)
}

/// History panel
pub async fn history_fragment(State(state): State<Arc<AppState>>) -> Markup {
    render_history(&state).await
}

/// Delete an upload record and everything it changed
///
/// Success answers with an empty body, which removes the entry from the page.
pub async fn delete_history(
    State(state): State<Arc<AppState>>,
    Path(log_id): Path<i64>,
) -> Response {
    match state.api_client.delete_history(log_id).await {
        Ok(summary) => {
            info!(
                log_id,
                reverted_added = summary.reverted_added,
                reverted_updated = summary.reverted_updated,
                "Upload reverted"
            );
            (
                Triggers::new().stats_changed().alert(summary.message()),
                Html(""),
            )
                .into_response()
        }
        Err(e) => {
            error!(log_id, error = %e, "Failed to delete upload record");
            alert_response(format!("Failed to delete the upload record: {e}"))
        }
    }
}

/// Change or clear the score of an upload record
pub async fn update_score(
    State(state): State<Arc<AppState>>,
    Path(log_id): Path<i64>,
    Form(form): Form<ScoreForm>,
) -> Response {
    match state.api_client.update_upload_score(log_id, form.score.trim()).await {
        Ok(score) => {
            info!(log_id, score, "Upload score updated");
            score_form(log_id, score, true).into_response()
        }
        Err(e) => {
            error!(log_id, error = %e, "Failed to update upload score");
            alert_response(format!("Failed to update the score: {e}"))
        }
    }
}
