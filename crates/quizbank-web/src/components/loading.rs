//! Loading component for displaying loading states

use maud::{Markup, html};

/// Loading spinner, visible only while htmx has a request in flight for the
/// element that names `id` in its `hx-indicator`
#[must_use]
pub fn loading(id: &str) -> Markup {
    html! {
        div id=(id) class="loading htmx-indicator" {
            div.spinner {}
            p { "Loading..." }
        }
    }
}
