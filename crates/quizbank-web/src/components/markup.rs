//! Escaping helpers for free text coming from the backend

use maud::{Markup, PreEscaped, html};

/// Escape `text` for insertion into HTML and turn newlines into `<br>`
#[must_use]
pub fn escape_html(text: &str) -> String {
    html! { (text) }.into_string().replace('\n', "<br>")
}

/// Free text rendered with its line breaks preserved
#[must_use]
pub fn multiline(text: &str) -> Markup {
    PreEscaped(escape_html(text))
}
