//! Question list with per-option answer distribution

use crate::components::{loading::loading, markup::multiline, pagination::pagination};
use crate::cursor::Cursor;
use maud::{Markup, html};
use quizbank_core::types::OptionStat;
use quizbank_core::{Question, QuestionPage};

/// Search bar, list and pager; the unit every list action swaps
#[must_use]
pub fn questions_panel(cursor: &Cursor, page: &quizbank_core::Result<QuestionPage>) -> Markup {
    html! {
        section id="questions-panel" class="questions-panel" {
            (search_bar(cursor))
            input type="hidden" id="activeSearch" name="search" value=(cursor.search);
            (loading("questions-loading"))
            div id="questionList" class="question-list" {
                @match page {
                    Ok(page) if page.questions.is_empty() => {
                        div class="empty-state" { "No questions yet" }
                    }
                    Ok(page) => {
                        @for question in &page.questions {
                            (question_card(question, cursor))
                        }
                    }
                    Err(e) => {
                        div class="load-error" { "Failed to load questions: " (e) }
                    }
                }
            }
            @if let Ok(page) = page {
                (pagination(cursor, page.total, page.page, page.pages))
            }
        }
    }
}

fn search_bar(cursor: &Cursor) -> Markup {
    html! {
        form class="search-bar"
             hx-get="/panel/questions"
             hx-target="#questions-panel"
             hx-swap="outerHTML"
             hx-indicator="#questions-loading" {
            input type="hidden" name="page" value="1";
            input type="search" id="searchInput" name="search"
                  placeholder="Search question text..." value=(cursor.search);
            button type="submit" class="btn" { "Search" }
            button type="button" class="btn btn-secondary"
                   hx-get="/panel/questions?page=1"
                   hx-target="#questions-panel"
                   hx-swap="outerHTML"
                   hx-indicator="#questions-loading" {
                "Clear"
            }
        }
    }
}

/// Card for one question; actions carry the cursor so the list reloads in place
#[must_use]
pub fn question_card(question: &Question, cursor: &Cursor) -> Markup {
    let total = question.total_responses();

    html! {
        div class="question-card" data-question-id=(question.id) {
            div class="question-header" {
                span class="question-id" { "#" (question.id) }
                span class="question-total" { (total) " responses" }
                button type="button" class="btn btn-danger btn-sm"
                       hx-delete=(format!("/panel/questions/{}", question.id))
                       hx-vals=(cursor.hx_vals(&[]))
                       hx-confirm="Delete this question? This cannot be undone."
                       hx-target="#questions-panel"
                       hx-swap="outerHTML" {
                    "Delete"
                }
            }
            div class="question-text" { (multiline(&question.question)) }
            div class="options" {
                @for option in question.options() {
                    (option_row(question, &option, total, cursor))
                }
            }
        }
    }
}

fn option_row(question: &Question, option: &OptionStat<'_>, total: u64, cursor: &Cursor) -> Markup {
    let pct = quizbank_core::types::percentage(option.count, total);
    let confirmed = question.is_confirmed(option.key);
    let row_class = if confirmed {
        "option-row confirmed"
    } else {
        "option-row"
    };

    html! {
        div class=(row_class) data-option=(option.key.as_str()) {
            span class="option-label" { (option.key.label()) }
            span class="option-text" { (multiline(option.text)) }
            span class="option-count" { (option.count) }
            div class="option-bar" {
                div class="option-bar-fill" style=(format!("width: {pct}%")) {}
            }
            span class="option-percent" { (pct) "%" }
            @if let Some(score) = option.top_score() {
                span class="option-top-score" { "Highest score: " (score) }
            }
            @if confirmed {
                span class="badge-confirmed" { "Confirmed correct" }
            } @else {
                button type="button" class="btn btn-confirm btn-sm"
                       hx-post=(format!("/panel/questions/{}/correct", question.id))
                       hx-vals=(cursor.hx_vals(&[("option", option.key.as_str())]))
                       hx-confirm=(format!(
                           "Mark option {} as the only correct answer? Any previous choice is replaced.",
                           option.key.label()
                       ))
                       hx-target="#questions-panel"
                       hx-swap="outerHTML" {
                    "Confirm correct"
                }
            }
        }
    }
}
