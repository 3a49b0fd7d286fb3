//! Pagination position and search filter of the question list
//!
//! The cursor travels with every request instead of living in shared state:
//! handlers decode it from the query string (or form body), pass it to the
//! loader, and every pager button and card action re-encodes it.

use serde::Deserialize;

/// Questions requested per page
pub const PAGE_SIZE: u32 = 10;

/// Current page and search term of the question list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    /// Page number (1-based)
    pub page: u32,
    /// Trimmed search term; empty means no filtering
    pub search: String,
}

/// Raw cursor fields as they arrive from the browser
///
/// Both fields are optional strings so that a malformed page number falls
/// back to the first page instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CursorParams {
    /// Requested page
    #[serde(default)]
    pub page: Option<String>,
    /// Requested search term
    #[serde(default)]
    pub search: Option<String>,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::first_page("")
    }
}

impl Cursor {
    /// First page for a search term (trimmed)
    #[must_use]
    pub fn first_page(search: &str) -> Self {
        Self {
            page: 1,
            search: search.trim().to_string(),
        }
    }

    /// Same search on another page
    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            search: self.search.clone(),
        }
    }

    /// Whether a search filter is active
    #[must_use]
    pub fn has_search(&self) -> bool {
        !self.search.is_empty()
    }

    /// Panel URL that loads `page` with the current search
    #[must_use]
    pub fn panel_url(&self, page: u32) -> String {
        let mut url = format!("/panel/questions?page={}", page.max(1));
        if self.has_search() {
            url.push_str("&search=");
            url.push_str(&urlencoding::encode(&self.search));
        }
        url
    }

    /// `hx-vals` payload carrying this cursor, plus extra fields
    #[must_use]
    pub fn hx_vals(&self, extra: &[(&str, &str)]) -> String {
        let mut vals = serde_json::Map::new();
        for (key, value) in extra {
            vals.insert((*key).to_string(), serde_json::Value::from(*value));
        }
        vals.insert("page".to_string(), serde_json::Value::from(self.page.to_string()));
        vals.insert(
            "search".to_string(),
            serde_json::Value::from(self.search.clone()),
        );
        serde_json::Value::Object(vals).to_string()
    }
}

impl From<CursorParams> for Cursor {
    fn from(params: CursorParams) -> Self {
        let page = params
            .page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(1)
            .max(1);
        let search = params.search.as_deref().unwrap_or_default().trim().to_string();
        Self { page, search }
    }
}
