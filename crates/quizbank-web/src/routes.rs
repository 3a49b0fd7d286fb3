//! Route definitions for the web interface

use crate::{
    handlers::{export, history, pages, questions, stats, upload},
    state::AppState,
    statics,
};
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

/// Build the complete web application router
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Page routes
        .route("/", get(pages::index))
        .route("/export", get(export::export))
        // Fragment routes
        .route("/panel/tabs/:name", get(pages::switch_tab))
        .route("/panel/stats", get(stats::stats_fragment))
        .route("/panel/upload", post(upload::upload))
        .route("/panel/questions", get(questions::questions_fragment))
        .route("/panel/questions/:id", delete(questions::delete_question))
        .route("/panel/questions/:id/correct", post(questions::confirm_correct))
        .route("/panel/history", get(history::history_fragment))
        .route("/panel/history/:id", delete(history::delete_history))
        .route("/panel/history/:id/score", put(history::update_score))
        // Embedded assets
        .route("/static/:file", get(statics::static_file))
        // Health check
        .route("/health", get(pages::health_check))
}
