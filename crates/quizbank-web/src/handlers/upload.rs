//! Paste-HTML upload

use super::Triggers;
use crate::{
    components::upload::{UploadOutcome, upload_section},
    state::AppState,
};
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use quizbank_core::Error;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Fields of the upload form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadForm {
    /// Pasted page source
    #[serde(default)]
    pub html: String,
    /// Optional score, passed through as entered
    #[serde(default)]
    pub score: String,
}

/// Submit pasted HTML and re-render the upload card with the result
///
/// Blank input is rejected here without contacting the backend.
pub async fn upload(State(state): State<Arc<AppState>>, Form(form): Form<UploadForm>) -> Response {
    let html = form.html.trim();
    let score = form.score.trim();

    if html.is_empty() {
        let error = Error::validation("html", "Please paste the HTML content first");
        let outcome = UploadOutcome::Failure(error.to_string());
        return upload_section(&form.html, &form.score, Some(&outcome)).into_response();
    }

    match state.api_client.upload_html(html, score).await {
        Ok(summary) => {
            info!(
                extracted = summary.extracted,
                added = summary.added,
                updated = summary.updated,
                "Upload processed"
            );
            let outcome = UploadOutcome::Success(summary);
            (
                Triggers::new().stats_changed(),
                upload_section("", "", Some(&outcome)),
            )
                .into_response()
        }
        Err(e) => {
            warn!(error = %e, "Upload failed");
            let outcome = UploadOutcome::Failure(e.to_string());
            upload_section(&form.html, &form.score, Some(&outcome)).into_response()
        }
    }
}
