//! 404 Not Found fragment

use maud::{Markup, html};

/// Body for requests naming something the panel does not have
#[must_use]
pub fn not_found(what: &str) -> Markup {
    html! {
        div class="not-found" {
            h2 { "Not Found" }
            p { (what) }
            a href="/" class="btn btn-primary" { "Return to the panel" }
        }
    }
}
