//! Paste-HTML upload form and its result panel

use maud::{Markup, html};
use quizbank_core::UploadSummary;

/// What the last submission produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Backend extracted and stored the questions
    Success(UploadSummary),
    /// Local validation, backend or transport failure
    Failure(String),
}

/// Upload card; on success the caller passes empty inputs so the form clears
#[must_use]
pub fn upload_section(html_input: &str, score: &str, outcome: Option<&UploadOutcome>) -> Markup {
    html! {
        section id="upload-section" class="card upload-section" {
            h2 { "Upload exam HTML" }
            form hx-post="/panel/upload"
                 hx-target="#upload-section"
                 hx-swap="outerHTML"
                 hx-disabled-elt="find button[type='submit']" {
                textarea id="htmlInput" name="html" rows="8"
                         placeholder="Paste the HTML of a finished exam page here" {
                    (html_input)
                }
                div class="upload-controls" {
                    input type="text" id="scoreInput" name="score" value=(score)
                          placeholder="Score (optional)";
                    button type="submit" id="uploadBtn" class="btn btn-primary" {
                        span class="label-idle" { "Upload and extract" }
                        span class="label-busy" { "Processing..." }
                    }
                }
            }
            @if let Some(outcome) = outcome {
                (result_panel(outcome))
            }
        }
    }
}

fn result_panel(outcome: &UploadOutcome) -> Markup {
    match outcome {
        UploadOutcome::Success(summary) => html! {
            div id="uploadResult" class="result success" {
                strong { "Upload succeeded" }
                ul {
                    li { "Extracted: " (summary.extracted) }
                    li { "Added: " (summary.added) }
                    li { "Updated: " (summary.updated) }
                }
            }
        },
        UploadOutcome::Failure(message) => html! {
            div id="uploadResult" class="result error" {
                strong { "Upload failed: " }
                (message)
            }
        },
    }
}
