//! Stylesheet and script embedded in the binary

use crate::pages::not_found::not_found;
use axum::{
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

const ADMIN_CSS: &str = include_str!("../static/admin.css");
const ADMIN_JS: &str = include_str!("../static/admin.js");
const STATIC_CACHE_CONTROL: &str = "max-age=3600, must-revalidate";

/// Serve one of the embedded assets by file name
pub async fn static_file(Path(file): Path<String>) -> Response {
    let (body, content_type) = match file.as_str() {
        "admin.css" => (ADMIN_CSS, "text/css; charset=utf-8"),
        "admin.js" => (ADMIN_JS, "text/javascript; charset=utf-8"),
        _ => {
            return (
                StatusCode::NOT_FOUND,
                not_found(&format!("No static file named {file:?}")),
            )
                .into_response();
        }
    };

    (
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, STATIC_CACHE_CONTROL),
        ],
        body,
    )
        .into_response()
}
