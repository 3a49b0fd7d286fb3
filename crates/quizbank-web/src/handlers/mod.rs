//! Request handlers for the panel routes
//!
//! Loads answer with HTML fragments that htmx swaps into the page. Mutations
//! that fail answer with an alert event and `HX-Reswap: none` so the page
//! stays as it was.

pub mod export;
pub mod history;
pub mod pages;
pub mod questions;
pub mod stats;
pub mod upload;

use crate::components::stats::STATS_CHANGED;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, IntoResponseParts, Response, ResponseParts};
use serde_json::{Map, Value, json};
use std::convert::Infallible;

/// Event the page script turns into `window.alert`
pub const ALERT_EVENT: &str = "quizbank:alert";

/// Response header carrying client-side events
pub const HX_TRIGGER: &str = "hx-trigger";

/// Response header overriding the swap strategy
pub const HX_RESWAP: &str = "hx-reswap";

/// Events raised in the browser through the `HX-Trigger` header
#[derive(Debug, Clone, Default)]
pub struct Triggers {
    events: Map<String, Value>,
}

impl Triggers {
    /// No events
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the stats block reload
    #[must_use]
    pub fn stats_changed(mut self) -> Self {
        self.events.insert(STATS_CHANGED.to_string(), Value::Null);
        self
    }

    /// Show a blocking alert with `message`
    #[must_use]
    pub fn alert(mut self, message: impl Into<String>) -> Self {
        self.events
            .insert(ALERT_EVENT.to_string(), json!({ "message": message.into() }));
        self
    }

    /// Header value, or `None` when there is nothing to trigger
    #[must_use]
    pub fn header_value(&self) -> Option<HeaderValue> {
        if self.events.is_empty() {
            return None;
        }
        let encoded = ascii_json(&Value::Object(self.events.clone()));
        HeaderValue::from_str(&encoded).ok()
    }
}

impl IntoResponseParts for Triggers {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        if let Some(value) = self.header_value() {
            res.headers_mut()
                .insert(HeaderName::from_static(HX_TRIGGER), value);
        }
        Ok(res)
    }
}

/// Serialize JSON using only printable ASCII so it fits in a header
///
/// Everything else is written as `\uXXXX` escapes (UTF-16 surrogate pairs
/// above the BMP), which JSON parsers read back as the original text.
#[must_use]
pub fn ascii_json(value: &Value) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len());
    let mut units = [0u16; 2];
    for c in raw.chars() {
        if c.is_ascii() && !c.is_ascii_control() {
            out.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }
    out
}

/// Failed mutation: leave the page untouched and show `message`
pub fn alert_response(message: impl Into<String>) -> Response {
    (
        StatusCode::OK,
        [(HX_RESWAP, "none")],
        Triggers::new().alert(message),
        (),
    )
        .into_response()
}
