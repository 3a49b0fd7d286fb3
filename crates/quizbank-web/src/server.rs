//! Web server setup and configuration

use crate::{routes::build_routes, state::AppState};
use axum::Router;
use quizbank_core::{Config, Result};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

/// Build the complete web application with all routes and state
///
/// # Errors
///
/// Returns an error if the application state cannot be created.
pub fn build_app(config: Config) -> Result<Router> {
    let state = Arc::new(AppState::new(config)?);

    Ok(build_routes()
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
