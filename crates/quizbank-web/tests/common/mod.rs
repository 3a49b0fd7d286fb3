//! Common test utilities for the panel integration tests

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use quizbank_core::Config;
use serde_json::{Value, json};
use std::sync::Once;
use tower::ServiceExt;
use wiremock::MockServer;

static INIT: Once = Once::new();

/// Initialize test logging once per test binary
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("quizbank_web=debug,tower_http=debug")
            .try_init();
    });
}

/// Panel router talking to `backend`
pub fn test_app(backend: &MockServer) -> Router {
    init_test_logging();
    let mut config = Config::default();
    config.backend.base_url = backend.uri();
    quizbank_web::build_app(config).expect("app builds")
}

/// Response pieces the assertions look at
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Decoded `HX-Trigger` header, if any
    pub fn triggers(&self) -> Option<Value> {
        self.headers
            .get("hx-trigger")
            .map(|v| serde_json::from_str(v.to_str().unwrap()).unwrap())
    }

    /// Message of the alert event, if any
    pub fn alert(&self) -> Option<String> {
        self.triggers()
            .and_then(|t| t["quizbank:alert"]["message"].as_str().map(ToString::to_string))
    }

    /// Whether the response asks htmx to skip the swap
    pub fn reswap_none(&self) -> bool {
        self.headers.get("hx-reswap").is_some_and(|v| v == "none")
    }
}

/// Drive one request through the router
pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

/// Bodiless request
pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("hx-request", "true")
        .body(Body::empty())
        .unwrap()
}

/// Form-encoded request, as htmx sends for POST and PUT
pub fn form(method: Method, uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    Request::builder()
        .method(method)
        .uri(uri)
        .header("hx-request", "true")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

/// Question as the backend lists it
pub fn question_json(id: i64, text: &str, counts: [u64; 4], correct: Option<&str>) -> Value {
    json!({
        "id": id,
        "question": text,
        "option_a": "Hero",
        "option_b": "Engineer",
        "option_c": "Sentry",
        "option_d": "Drone",
        "count_a": counts[0],
        "count_b": counts[1],
        "count_c": counts[2],
        "count_d": counts[3],
        "max_score_a": 91.0,
        "max_score_b": null,
        "max_score_c": null,
        "max_score_d": null,
        "correct_option": correct,
    })
}

/// Page of questions as the backend returns it
pub fn page_json(questions: Vec<Value>, total: u64, page: u32, pages: u32) -> Value {
    json!({
        "questions": questions,
        "total": total,
        "page": page,
        "pages": pages,
    })
}
