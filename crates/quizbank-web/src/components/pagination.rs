//! Pagination component for navigating through the question list

use crate::cursor::Cursor;
use maud::{Markup, html};

/// Number of pages shown on each side of the current one
const WINDOW_RADIUS: u32 = 2;

/// One slot of the pager between the previous and next controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// Button jumping to a page
    Page {
        /// Target page (1-based)
        number: u32,
        /// Whether this is the page being shown
        active: bool,
    },
    /// Gap marker between non-contiguous page buttons
    Ellipsis,
}

/// Layout of the pager for one position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// Page being shown
    pub current: u32,
    /// Number of pages
    pub total_pages: u32,
    /// Slots in display order
    pub items: Vec<PageItem>,
}

impl PageWindow {
    /// Compute the pager, or `None` when there is at most one page
    ///
    /// `current` is clamped into `1..=total_pages`.
    #[must_use]
    pub fn new(current: u32, total_pages: u32) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }
        let current = current.clamp(1, total_pages);

        let start = current.saturating_sub(WINDOW_RADIUS).max(1);
        let end = current.saturating_add(WINDOW_RADIUS).min(total_pages);
        let page = |number| PageItem::Page {
            number,
            active: number == current,
        };

        let mut items = Vec::new();
        if start > 1 {
            items.push(page(1));
            if start > 2 {
                items.push(PageItem::Ellipsis);
            }
        }
        items.extend((start..=end).map(page));
        if end < total_pages {
            if end < total_pages - 1 {
                items.push(PageItem::Ellipsis);
            }
            items.push(page(total_pages));
        }

        Some(Self {
            current,
            total_pages,
            items,
        })
    }

    /// Whether the previous control is disabled
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.current <= 1
    }

    /// Whether the next control is disabled
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.current >= self.total_pages
    }
}

/// Button that reloads the list panel at `page`
fn page_button(cursor: &Cursor, page: u32, class: &str, disabled: bool, label: &str) -> Markup {
    html! {
        button type="button" class=(class)
               hx-get=(cursor.panel_url(page))
               hx-target="#questions-panel"
               hx-swap="outerHTML"
               hx-indicator="#questions-loading"
               disabled[disabled] {
            (label)
        }
    }
}

/// Pager for a page of results; renders nothing for a single page
#[must_use]
pub fn pagination(cursor: &Cursor, total: u64, current: u32, total_pages: u32) -> Markup {
    let Some(window) = PageWindow::new(current, total_pages) else {
        return html! {};
    };

    html! {
        div class="pagination" {
            span class="pagination-info" { (total) " questions" }
            (page_button(cursor, window.current.saturating_sub(1), "page-btn", window.is_first(), "Previous"))
            @for item in &window.items {
                @match item {
                    PageItem::Page { number, active } => {
                        (page_button(
                            cursor,
                            *number,
                            if *active { "page-btn active" } else { "page-btn" },
                            false,
                            &number.to_string(),
                        ))
                    }
                    PageItem::Ellipsis => {
                        span class="page-ellipsis" { "..." }
                    }
                }
            }
            (page_button(cursor, window.current.saturating_add(1).min(total_pages), "page-btn", window.is_last(), "Next"))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn layout(current: u32, total_pages: u32) -> Vec<String> {
        PageWindow::new(current, total_pages)
            .map(|w| {
                w.items
                    .iter()
                    .map(|item| match item {
                        PageItem::Page { number, active: true } => format!("[{number}]"),
                        PageItem::Page { number, .. } => number.to_string(),
                        PageItem::Ellipsis => "...".to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    #[rstest]
    #[case(5, 10, "1 ... 3 4 [5] 6 7 ... 10")]
    #[case(1, 3, "[1] 2 3")]
    #[case(1, 10, "[1] 2 3 ... 10")]
    #[case(4, 10, "1 2 3 [4] 5 6 ... 10")]
    #[case(10, 10, "1 ... 8 9 [10]")]
    #[case(7, 10, "1 ... 5 6 [7] 8 9 10")]
    #[case(6, 10, "1 ... 4 5 [6] 7 8 ... 10")]
    #[case(2, 2, "1 [2]")]
    #[case(12, 10, "1 ... 8 9 [10]")]
    #[case(0, 4, "[1] 2 3 4")]
    fn test_window_layout(#[case] current: u32, #[case] total_pages: u32, #[case] expected: &str) {
        assert_eq!(layout(current, total_pages).join(" "), expected);
    }

    #[rstest]
    #[case(1, 1)]
    #[case(1, 0)]
    fn test_single_page_renders_nothing(#[case] current: u32, #[case] total_pages: u32) {
        assert!(PageWindow::new(current, total_pages).is_none());
        assert_eq!(
            pagination(&Cursor::default(), 3, current, total_pages).into_string(),
            ""
        );
    }

    #[test]
    fn test_edge_controls() {
        let first = PageWindow::new(1, 3).unwrap();
        assert!(first.is_first());
        assert!(!first.is_last());

        let last = PageWindow::new(3, 3).unwrap();
        assert!(!last.is_first());
        assert!(last.is_last());
    }

    #[test]
    fn test_rendered_pager_keeps_search() {
        let cursor = Cursor::first_page("sentry").with_page(5);
        let html = pagination(&cursor, 97, 5, 10).into_string();

        assert!(html.contains(r#"hx-get="/panel/questions?page=10&amp;search=sentry""#));
        assert!(html.contains(r#"hx-get="/panel/questions?page=4&amp;search=sentry""#));
        assert!(html.contains(r#"class="page-btn active""#));
        assert_eq!(html.matches("page-ellipsis").count(), 2);
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_page_past_the_end_is_clamped() {
        let html = pagination(&Cursor::default(), 100, 12, 10).into_string();

        assert!(html.contains(r#"class="page-btn active""#));
        assert!(html.contains(r#"hx-get="/panel/questions?page=9""#));
        assert!(!html.contains("page=11"));
        assert!(!html.contains("page=12"));
        assert_eq!(html.matches("disabled").count(), 1);
    }

    #[test]
    fn test_first_page_disables_previous() {
        let html = pagination(&Cursor::default(), 25, 1, 3).into_string();

        assert_eq!(html.matches("disabled").count(), 1);
        assert!(!html.contains("page=0"));
        assert!(!html.contains("page-ellipsis"));
    }
}
