//! Upload history with per-entry undo and score editing

use maud::{Markup, html};
use quizbank_core::UploadRecord;

/// Whole history tab body
#[must_use]
pub fn history_panel(records: &quizbank_core::Result<Vec<UploadRecord>>) -> Markup {
    html! {
        section id="history-panel" class="history-panel" {
            div id="historyList" class="history-list" {
                @match records {
                    Ok(records) if records.is_empty() => {
                        div class="empty-state" { "No upload history" }
                    }
                    Ok(records) => {
                        @for record in records {
                            (history_item(record))
                        }
                    }
                    Err(e) => {
                        div class="load-error" { "Failed to load history: " (e) }
                    }
                }
            }
        }
    }
}

/// One upload log entry
#[must_use]
pub fn history_item(record: &UploadRecord) -> Markup {
    html! {
        div class="history-item" id=(format!("history-{}", record.id)) {
            div class="history-info" {
                span class="history-time" { (record.uploaded_at_display()) }
                span class="history-added" { "Added " (record.questions_added) }
                span class="history-updated" { "Updated " (record.questions_updated) }
            }
            (score_form(record.id, record.score, false))
            button type="button" class="btn btn-danger btn-sm"
                   hx-delete=(format!("/panel/history/{}", record.id))
                   hx-confirm="Delete this upload record? Questions it added will be removed and its answer counts reverted. This cannot be undone."
                   hx-target="closest .history-item"
                   hx-swap="outerHTML" {
                "Delete"
            }
        }
    }
}

/// Inline editor for the score of an upload; an empty value clears it
#[must_use]
pub fn score_form(log_id: i64, score: Option<f64>, saved: bool) -> Markup {
    let value = score.map(|s| s.to_string()).unwrap_or_default();

    html! {
        form class="score-form"
             hx-put=(format!("/panel/history/{log_id}/score"))
             hx-target="this"
             hx-swap="outerHTML" {
            label {
                "Score "
                input type="text" name="score" size="6" value=(value) placeholder="none";
            }
            button type="submit" class="btn btn-secondary btn-sm" { "Save" }
            @if saved {
                span class="score-saved" { "Saved" }
            }
        }
    }
}
