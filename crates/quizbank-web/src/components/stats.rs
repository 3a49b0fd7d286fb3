//! Aggregate counters shown above the tabs

use maud::{Markup, html};
use quizbank_core::StatsSnapshot;

/// Event name that makes the stats block reload itself
pub const STATS_CHANGED: &str = "stats-changed";

/// Stats block with three fixed slots
///
/// `None` renders placeholders; used when the first load of the page could not
/// reach the backend.
#[must_use]
pub fn stats_panel(stats: Option<&StatsSnapshot>) -> Markup {
    let value = |pick: fn(&StatsSnapshot) -> u64| {
        stats.map_or_else(|| "-".to_string(), |s| pick(s).to_string())
    };

    html! {
        div id="stats" class="stats"
            hx-get="/panel/stats"
            hx-trigger=(format!("{STATS_CHANGED} from:body"))
            hx-swap="outerHTML" {
            div.stat-card {
                div id="totalQuestions" class="stat-value" { (value(|s| s.total_questions)) }
                div.stat-label { "Questions" }
            }
            div.stat-card {
                div id="totalAnswers" class="stat-value" { (value(|s| s.total_answers)) }
                div.stat-label { "Recorded answers" }
            }
            div.stat-card {
                div id="totalUploads" class="stat-value" { (value(|s| s.total_uploads)) }
                div.stat-label { "Uploads" }
            }
        }
    }
}
