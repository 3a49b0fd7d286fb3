//! Full page and tab switching

use super::{history::render_history, questions::render_questions};
use crate::{
    components::tabs::{Tab, tabs},
    cursor::{Cursor, CursorParams},
    pages::{admin::admin_page, not_found::not_found},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::Markup;
use std::sync::Arc;
use tracing::warn;

/// Admin page with stats and the first page of questions already rendered
pub async fn index(State(state): State<Arc<AppState>>) -> Markup {
    let cursor = Cursor::default();
    let (stats, questions) = tokio::join!(
        state.api_client.get_stats(),
        state.api_client.get_questions(&cursor)
    );

    let stats = stats
        .inspect_err(|e| warn!(error = %e, "Failed to load stats"))
        .ok();
    if let Err(e) = &questions {
        warn!(error = %e, "Failed to load questions");
    }

    admin_page(&state.config.panel, stats.as_ref(), &cursor, &questions)
}

/// Activate a tab and load its content
///
/// The search term in the query is kept; the question list restarts at page 1.
pub async fn switch_tab(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(params): Query<CursorParams>,
) -> Response {
    let tab: Tab = match name.parse() {
        Ok(tab) => tab,
        Err(e) => {
            warn!(tab = %name, "Unknown tab requested");
            return (StatusCode::NOT_FOUND, not_found(&e.to_string())).into_response();
        }
    };

    let cursor = Cursor::first_page(&Cursor::from(params).search);
    let content = match tab {
        Tab::Questions => render_questions(&state, &cursor).await,
        Tab::History => render_history(&state).await,
    };

    tabs(tab, &cursor.search, &content).into_response()
}

/// Liveness probe
pub async fn health_check() -> &'static str {
    "OK"
}
