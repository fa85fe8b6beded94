//! Suggestion popup for one clicked spelling issue
//!
//! The view owns the single active anchor; this component only renders the
//! menu and reports the chosen action back through its handlers.

use analyzer_types::LanguageIssue;
use dioxus::prelude::*;

use super::logic::visible_suggestions;

#[component]
pub fn SuggestionPopup(
    issue: LanguageIssue,
    left: f64,
    top: f64,
    on_apply: EventHandler<String>,
    on_ignore: EventHandler<()>,
) -> Element {
    let suggestions: Vec<String> = visible_suggestions(&issue).to_vec();

    rsx! {
        div {
            class: "spell-popup",
            style: "left: {left}px; top: {top}px;",
            // Clicks inside the menu must not reach the document-level
            // close handler.
            onclick: move |e| e.stop_propagation(),

            if suggestions.is_empty() {
                div { class: "spell-popup-empty", "No suggestions" }
            }
            for suggestion in suggestions {
                button {
                    key: "{suggestion}",
                    class: "spell-popup-row",
                    onclick: {
                        let suggestion = suggestion.clone();
                        move |_| on_apply.call(suggestion.clone())
                    },
                    "{suggestion}"
                }
            }

            div { class: "spell-popup-divider" }

            button {
                class: "spell-popup-row spell-popup-ignore",
                onclick: move |_| on_ignore.call(()),
                "Ignore"
            }
        }
    }
}
