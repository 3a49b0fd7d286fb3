//! Download of the whole question bank

use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{error, info};

/// File name offered to the browser
pub const EXPORT_FILE_NAME: &str = "questions-export.json";

/// Serve the backend export as a JSON attachment
pub async fn export(State(state): State<Arc<AppState>>) -> Response {
    match state.api_client.export().await {
        Ok(body) => {
            info!(
                total = body.get("total").and_then(serde_json::Value::as_u64),
                "Exported question bank"
            );
            (
                [(
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
                )],
                Json(body),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Export failed");
            (StatusCode::BAD_GATEWAY, format!("Export failed: {e}")).into_response()
        }
    }
}
