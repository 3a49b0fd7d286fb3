//! Question list loading, answer confirmation and deletion

use super::{Triggers, alert_response};
use crate::{
    components::questions::questions_panel,
    cursor::{Cursor, CursorParams},
    state::AppState,
};
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use maud::Markup;
use quizbank_core::OptionKey;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Body of the confirm-correct action
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorrectForm {
    /// Option being confirmed (a-d)
    #[serde(default)]
    pub option: String,
    /// Page the list was on
    #[serde(default)]
    pub page: Option<String>,
    /// Search the list was filtered by
    #[serde(default)]
    pub search: Option<String>,
}

impl CorrectForm {
    fn cursor(&self) -> Cursor {
        Cursor::from(CursorParams {
            page: self.page.clone(),
            search: self.search.clone(),
        })
    }
}

/// Load the list panel for `cursor`; failures become an inline message
pub(crate) async fn render_questions(state: &AppState, cursor: &Cursor) -> Markup {
    let page = state.api_client.get_questions(cursor).await;
    if let Err(e) = &page {
        warn!(error = %e, page = cursor.page, search = %cursor.search, "Failed to load questions");
    }
    questions_panel(cursor, &page)
}

/// List panel for a page and search term from the query string
pub async fn questions_fragment(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CursorParams>,
) -> Markup {
    let cursor = Cursor::from(params);
    render_questions(&state, &cursor).await
}

/// Mark an option as the correct answer, then reload the current page
pub async fn confirm_correct(
    State(state): State<Arc<AppState>>,
    Path(question_id): Path<i64>,
    Form(form): Form<CorrectForm>,
) -> Response {
    let option: OptionKey = match form.option.parse() {
        Ok(option) => option,
        Err(e) => return alert_response(format!("Failed to set the correct option: {e}")),
    };

    match state.api_client.set_correct_option(question_id, option).await {
        Ok(()) => {
            info!(question_id, option = %option, "Correct option confirmed");
            let cursor = form.cursor();
            (
                Triggers::new().stats_changed(),
                render_questions(&state, &cursor).await,
            )
                .into_response()
        }
        Err(e) => {
            error!(question_id, error = %e, "Failed to set correct option");
            alert_response(format!("Failed to set the correct option: {e}"))
        }
    }
}

/// Delete a question, then reload the current page
pub async fn delete_question(
    State(state): State<Arc<AppState>>,
    Path(question_id): Path<i64>,
    Query(params): Query<CursorParams>,
) -> Response {
    match state.api_client.delete_question(question_id).await {
        Ok(()) => {
            info!(question_id, "Question deleted");
            let cursor = Cursor::from(params);
            (
                Triggers::new().stats_changed(),
                render_questions(&state, &cursor).await,
            )
                .into_response()
        }
        Err(e) => {
            error!(question_id, error = %e, "Failed to delete question");
            alert_response(format!("Failed to delete the question: {e}"))
        }
    }
}
