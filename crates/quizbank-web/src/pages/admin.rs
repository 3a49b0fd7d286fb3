//! The admin page shell

use crate::components::{
    questions::questions_panel,
    stats::stats_panel,
    tabs::{Tab, tabs},
    upload::upload_section,
};
use crate::cursor::Cursor;
use maud::{DOCTYPE, Markup, html};
use quizbank_core::config::PanelConfig;
use quizbank_core::{QuestionPage, StatsSnapshot};

fn head(panel: &PanelConfig) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            title { (panel.title) }
            link rel="stylesheet" href="/static/admin.css";
            script src=(panel.htmx_src) {}
            script src="/static/admin.js" defer {}
        }
    }
}

fn header(panel: &PanelConfig) -> Markup {
    html! {
        header class="header" {
            h1 { (panel.title) }
            a href="/export" class="btn btn-secondary" download="questions-export.json" {
                "Export questions"
            }
        }
    }
}

/// Complete page: header, stats, upload form and the questions tab
#[must_use]
pub fn admin_page(
    panel: &PanelConfig,
    stats: Option<&StatsSnapshot>,
    cursor: &Cursor,
    questions: &quizbank_core::Result<QuestionPage>,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(panel))
            body {
                div class="container" {
                    (header(panel))
                    (stats_panel(stats))
                    (upload_section("", "", None))
                    (tabs(Tab::Questions, &cursor.search, &questions_panel(cursor, questions)))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_contains_every_region() {
        let panel = PanelConfig::default();
        let page = QuestionPage {
            questions: vec![],
            total: 0,
            page: 1,
            pages: 0,
        };
        let html = admin_page(&panel, None, &Cursor::default(), &Ok(page)).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Question Bank Admin</title>"));
        assert!(html.contains(r#"src="https://unpkg.com/htmx.org@2.0.3""#));
        assert!(html.contains(r#"id="stats""#));
        assert!(html.contains(r#"id="upload-section""#));
        assert!(html.contains(r#"id="questions-panel""#));
        assert!(html.contains(r#"href="/export""#));
    }
}
