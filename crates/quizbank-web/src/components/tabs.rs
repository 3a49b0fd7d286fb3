//! Questions / History tab switcher

use maud::{Markup, html};
use quizbank_core::Error;
use serde_json::json;
use std::fmt;
use std::str::FromStr;

/// The two views of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Question list
    Questions,
    /// Upload history
    History,
}

impl Tab {
    /// All tabs in display order
    pub const ALL: [Self; 2] = [Self::Questions, Self::History];

    /// Path segment naming the tab
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Questions => "questions",
            Self::History => "history",
        }
    }

    /// Button caption
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Questions => "Questions",
            Self::History => "History",
        }
    }

    /// DOM id of the panel
    #[must_use]
    pub const fn panel_id(self) -> &'static str {
        match self {
            Self::Questions => "questionsTab",
            Self::History => "historyTab",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "questions" => Ok(Self::Questions),
            "history" => Ok(Self::History),
            other => Err(Error::NotFound {
                resource: format!("tab {other:?}"),
            }),
        }
    }
}

/// Tab bar and the active panel; only the active panel carries content
///
/// The committed search term rides along on every tab request. While the
/// question list is shown it is read from the list's `#activeSearch` field,
/// which each list reload re-renders; otherwise the bar carries `search`.
#[must_use]
pub fn tabs(active: Tab, search: &str, content: &Markup) -> Markup {
    let include = (active == Tab::Questions).then_some("#activeSearch");
    let vals = (active != Tab::Questions).then(|| json!({ "search": search }).to_string());

    html! {
        div id="tabs" class="tabs-container" {
            nav class="tabs" {
                @for tab in Tab::ALL {
                    button type="button"
                           class=(if tab == active { "tab active" } else { "tab" })
                           hx-get=(format!("/panel/tabs/{tab}"))
                           hx-include=[include]
                           hx-vals=[vals.as_deref()]
                           hx-target="#tabs"
                           hx-swap="outerHTML" {
                        (tab.title())
                    }
                }
            }
            @for tab in Tab::ALL {
                div id=(tab.panel_id())
                    class=(if tab == active { "tab-content active" } else { "tab-content" }) {
                    @if tab == active {
                        (content)
                    }
                }
            }
        }
    }
}
