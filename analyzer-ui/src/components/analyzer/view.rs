//! Main AnalyzerView component

use analyzer_types::{AnalysisReport, LanguageIssue};
use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use crate::api::{predict, spell_check, PredictError};

use super::logic::*;
use super::popup::SuggestionPopup;
use super::styles::ANALYZER_STYLES;
use super::types::*;

/// The popup sits immediately below the clicked span, left-aligned with its
/// bounding box, in page coordinates. Falls back to the click position when
/// the DOM element is not reachable through the event.
fn popup_position(event: &MouseEvent) -> (f64, f64) {
    let data = event.data();
    if let Some(native) = data.downcast::<web_sys::MouseEvent>() {
        if let Some(element) = native
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        {
            let rect = element.get_bounding_client_rect();
            let scroll_x = web_sys::window()
                .and_then(|w| w.scroll_x().ok())
                .unwrap_or(0.0);
            let scroll_y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            return (rect.left() + scroll_x, rect.bottom() + scroll_y);
        }
    }

    let point = event.page_coordinates();
    (point.x, point.y)
}

#[component]
pub fn AnalyzerView() -> Element {
    let mut editor_text = use_signal(String::new);
    // Snapshot the highlights refer to; only submit and apply-suggestion
    // move it.
    let mut analyzed_text = use_signal(String::new);
    let mut analysis = use_signal(|| AnalysisState::Idle);
    let mut spell_issues = use_signal(Vec::<LanguageIssue>::new);
    let mut highlighted = use_signal(Vec::<LanguageIssue>::new);
    let mut overview = use_signal(OverviewCounts::default);
    let mut overview_visible = use_signal(|| false);
    let mut active_popup = use_signal(|| None::<PopupAnchor>);

    let run_analysis = use_callback(move |_: ()| {
        let text = editor_text.to_string();
        active_popup.set(None);
        if text.is_empty() {
            analysis.set(AnalysisState::EmptyInput);
            return;
        }
        analysis.set(AnalysisState::Loading);

        // Requests are not queued or cancelled; a second submission simply
        // races the first and the last response to arrive wins.
        spawn(async move {
            match predict(&text).await {
                Ok(report) => {
                    spell_issues.set(spelling_subset(&report.language_issues));
                    highlighted.set(report.language_issues.clone());
                    overview.set(overview_counts(&text, &report.language_issues));
                    overview_visible.set(true);
                    analyzed_text.set(text);
                    analysis.set(AnalysisState::Ready(report));
                }
                Err(PredictError::Server(message)) => {
                    analysis.set(AnalysisState::Rejected(message));
                }
                Err(PredictError::Transport(detail)) => {
                    dioxus_logger::tracing::error!("Prediction request failed: {detail}");
                    analysis.set(AnalysisState::Unreachable);
                }
            }
        });
    });

    let run_spell_check = use_callback(move |_: ()| {
        let text = editor_text.to_string();
        active_popup.set(None);
        if text.is_empty() {
            analysis.set(AnalysisState::EmptyInput);
            return;
        }

        spawn(async move {
            match spell_check(&text).await {
                Ok(issues) => {
                    spell_issues.set(spelling_subset(&issues));
                    overview.set(overview_counts(&text, &issues));
                    overview_visible.set(true);
                    highlighted.set(issues);
                    analyzed_text.set(text);
                }
                Err(PredictError::Server(message)) => {
                    analysis.set(AnalysisState::Rejected(message));
                }
                Err(PredictError::Transport(detail)) => {
                    dioxus_logger::tracing::error!("Spell check request failed: {detail}");
                    analysis.set(AnalysisState::Unreachable);
                }
            }
        });
    });

    let apply_suggestion = use_callback(move |suggestion: String| {
        let Some(anchor) = active_popup() else {
            return;
        };
        let Some(issue) = spell_issues
            .read()
            .iter()
            .find(|i| i.id == anchor.issue_id)
            .cloned()
        else {
            active_popup.set(None);
            return;
        };

        let current = analyzed_text.to_string();
        let updated = replace_span(&current, issue.start_index, issue.length, &suggestion);
        let delta = span_delta(issue.length, &suggestion);

        editor_text.set(updated.clone());
        analyzed_text.set(updated);

        // Shift the remaining spans before the next highlight pass reads
        // them.
        let mut remaining = spell_issues.read().clone();
        retire_issue_and_shift(&mut remaining, &issue.id, issue.start_index, delta);
        spell_issues.set(remaining.clone());
        highlighted.set(remaining);
        active_popup.set(None);
    });

    let open_popup = use_callback(move |(issue_id, event): (String, MouseEvent)| {
        // Marked spans without a surviving subset entry are ignored.
        let known = spell_issues.read().iter().any(|i| i.id == issue_id);
        if !known {
            return;
        }
        let (left, top) = popup_position(&event);
        active_popup.set(Some(PopupAnchor {
            issue_id,
            left,
            top,
        }));
    });

    let onkeydown = use_callback(move |e: KeyboardEvent| {
        if e.key() == Key::Escape {
            active_popup.set(None);
        }
    });

    let state = analysis();
    let counts = overview();
    let text_snapshot = analyzed_text.to_string();
    let segments = highlight_segments(&text_snapshot, &highlighted.read());

    let result_section = match &state {
        AnalysisState::Idle => rsx! {
            p { class: "result-hint", "Paste or type a paragraph, then press Analyze." }
        },
        AnalysisState::Loading => rsx! {
            div { class: "result-loading",
                span { class: "spinner", "◐" }
                span { "Analyzing your text..." }
            }
        },
        AnalysisState::EmptyInput => rsx! {
            div { class: "result-error", "Please enter some text before analyzing." }
        },
        AnalysisState::Rejected(message) => rsx! {
            div { class: "result-error", "{message}" }
        },
        AnalysisState::Unreachable => rsx! {
            div { class: "result-error",
                "Could not reach the analysis service. Please try again."
            }
        },
        AnalysisState::Ready(report) => rsx! {
            ReportCard { report: report.clone() }
        },
    };

    let review_spans = segments.into_iter().map(|segment| match segment {
        HighlightSegment::Plain(text) => rsx! {
            span { "{text}" }
        },
        HighlightSegment::Marked { issue_id, text } => {
            let click_id = issue_id.clone();
            rsx! {
                span {
                    class: "spelling-error",
                    "data-issue-id": "{issue_id}",
                    onclick: move |e: MouseEvent| {
                        e.stop_propagation();
                        open_popup.call((click_id.clone(), e));
                    },
                    "{text}"
                }
            }
        }
    });

    rsx! {
        style { {ANALYZER_STYLES} }

        div {
            class: "analyzer-container",
            tabindex: "0",
            onkeydown,
            // Any click that no inner handler claimed closes the popup.
            onclick: move |_| active_popup.set(None),

            header { class: "analyzer-header",
                h1 { "Text Quality Analyzer" }
                p { class: "analyzer-tagline",
                    "Grade prediction, writing style, and language issues for any paragraph."
                }
            }

            section { class: "editor-area",
                textarea {
                    class: "analyzer-textarea",
                    placeholder: "Type or paste your text here...",
                    value: "{editor_text}",
                    oninput: move |e: FormEvent| editor_text.set(e.value()),
                }
                div { class: "analyzer-actions",
                    button {
                        class: "analyze-button",
                        disabled: matches!(state, AnalysisState::Loading),
                        onclick: move |_| run_analysis.call(()),
                        "Analyze"
                    }
                    button {
                        class: "spellcheck-button",
                        onclick: move |_| run_spell_check.call(()),
                        "Quick spell check"
                    }
                }
            }

            section { class: "result-area", {result_section} }

            if overview_visible() {
                section { class: "overview-panel",
                    h2 { class: "panel-title", "Writing overview" }
                    div { class: "overview-stats",
                        div { class: "overview-stat",
                            span { class: "overview-value", "{counts.words}" }
                            span { class: "overview-label", "Words" }
                        }
                        div { class: "overview-stat",
                            span { class: "overview-value", "{counts.spelling}" }
                            span { class: "overview-label", "Spelling" }
                        }
                        div { class: "overview-stat",
                            span { class: "overview-value", "{counts.grammar}" }
                            span { class: "overview-label", "Grammar" }
                        }
                    }
                }
            }

            if !text_snapshot.is_empty() {
                section { class: "review-panel",
                    h2 { class: "panel-title", "Analyzed text" }
                    p { class: "review-hint", "Click a highlighted word for suggestions." }
                    div { class: "review-body", {review_spans} }
                }
            }

            if let Some(anchor) = active_popup() {
                {
                    let issue = spell_issues
                        .read()
                        .iter()
                        .find(|i| i.id == anchor.issue_id)
                        .cloned();
                    rsx! {
                        if let Some(issue) = issue {
                            SuggestionPopup {
                                issue,
                                left: anchor.left,
                                top: anchor.top,
                                on_apply: move |suggestion: String| apply_suggestion.call(suggestion),
                                on_ignore: move |_| active_popup.set(None),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ReportCard(report: AnalysisReport) -> Element {
    let confidence = confidence_label(report.confidence);
    let style = style_label(report.writing_style.as_deref()).to_string();

    rsx! {
        div { class: "result-card",
            div { class: "grade-line",
                span { class: "grade-label", "Predicted grade" }
                span { class: "grade-value", "{report.predicted_grade}" }
            }
            div { class: "confidence-line", "Confidence: {confidence}" }
            if !report.is_confident {
                div { class: "low-confidence-warning",
                    "The model is not fully confident in this grade. Treat it as a rough estimate."
                }
            }
        }

        div { class: "style-line", "Writing style: {style}" }

        if report.language_issues.is_empty() {
            p { class: "issues-empty", "No language issues detected. Great job!" }
        } else {
            div { class: "issues-list",
                for (idx, issue) in report.language_issues.iter().enumerate() {
                    IssueEntry {
                        key: "{issue.id}",
                        ordinal: idx + 1,
                        issue: issue.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn IssueEntry(ordinal: usize, issue: LanguageIssue) -> Element {
    let message = issue_message(&issue).to_string();
    let severity = issue_severity(&issue).to_string();

    rsx! {
        div { class: "issue-entry",
            div { class: "issue-entry-header",
                span { class: "issue-ordinal", "{ordinal}." }
                span { class: "issue-kind", "{issue.kind}" }
                span { class: "severity-badge severity--{severity}", "{severity}" }
            }
            p { class: "issue-message", "{message}" }
            if let Some(word) = issue.word.as_deref() {
                p { class: "issue-word", "Word: \"{word}\"" }
            }
            if let Some(context) = issue.context.as_deref() {
                p { class: "issue-context", "In: \"{context}\"" }
            }
        }
    }
}
