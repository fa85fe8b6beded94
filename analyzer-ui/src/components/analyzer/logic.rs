//! Analyzer pure logic functions — no RSX, no signals
//!
//! All offsets are character offsets, matching what the prediction service
//! produces.

use analyzer_types::LanguageIssue;

use super::types::{HighlightSegment, OverviewCounts};

/// Splits `text` into plain and marked segments, one marked segment per
/// spelling issue, sorted by `start_index` (stable, so equal starts keep
/// response order). Concatenating the segments reproduces `text` exactly.
///
/// The service guarantees non-overlapping, in-range spans; spans that break
/// that anyway are clamped or skipped rather than garble the output.
pub fn highlight_segments(text: &str, issues: &[LanguageIssue]) -> Vec<HighlightSegment> {
    let chars: Vec<char> = text.chars().collect();

    let mut spelling: Vec<&LanguageIssue> = issues.iter().filter(|i| i.is_spelling()).collect();
    spelling.sort_by_key(|i| i.start_index);

    let mut segments = Vec::new();
    let mut cursor = 0usize;

    for issue in spelling {
        let start = issue.start_index.min(chars.len());
        let end = issue.end_index().min(chars.len());
        if start < cursor || start >= end {
            continue;
        }
        if start > cursor {
            segments.push(HighlightSegment::Plain(chars[cursor..start].iter().collect()));
        }
        segments.push(HighlightSegment::Marked {
            issue_id: issue.id.clone(),
            text: chars[start..end].iter().collect(),
        });
        cursor = end;
    }

    if cursor < chars.len() {
        segments.push(HighlightSegment::Plain(chars[cursor..].iter().collect()));
    }

    segments
}

/// Whitespace-separated token count; an empty or all-whitespace editor is 0
/// words, never 1.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Suggestion-bearing issues count as spelling, the rest as grammar/style.
pub fn overview_counts(text: &str, issues: &[LanguageIssue]) -> OverviewCounts {
    let spelling = issues.iter().filter(|i| i.has_suggestions()).count();
    OverviewCounts {
        words: word_count(text),
        spelling,
        grammar: issues.len() - spelling,
    }
}

/// The subset the popup can act on: issues with at least one suggestion.
pub fn spelling_subset(issues: &[LanguageIssue]) -> Vec<LanguageIssue> {
    issues
        .iter()
        .filter(|i| i.has_suggestions())
        .cloned()
        .collect()
}

/// Substitutes the character range `[start, start + len)` with
/// `replacement`. Out-of-range spans are clamped to the text.
pub fn replace_span(text: &str, start: usize, len: usize, replacement: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let start = start.min(chars.len());
    let end = (start + len).min(chars.len());
    chars.splice(start..end, replacement.chars());
    chars.into_iter().collect()
}

/// Signed length change a replacement introduces at an issue's span.
pub fn span_delta(issue_length: usize, replacement: &str) -> isize {
    replacement.chars().count() as isize - issue_length as isize
}

/// Drops the applied issue and shifts the span of every issue strictly
/// after it by `delta`, so remaining highlights stay anchored to the
/// mutated text.
pub fn retire_issue_and_shift(
    issues: &mut Vec<LanguageIssue>,
    applied_id: &str,
    applied_start: usize,
    delta: isize,
) {
    issues.retain(|issue| issue.id != applied_id);
    for issue in issues.iter_mut() {
        if issue.start_index > applied_start {
            issue.start_index = issue.start_index.saturating_add_signed(delta);
        }
    }
}

/// The popup shows at most the first three suggestions.
pub fn visible_suggestions(issue: &LanguageIssue) -> &[String] {
    let cut = issue.suggestions.len().min(3);
    &issue.suggestions[..cut]
}

pub fn confidence_label(confidence: f64) -> String {
    format!("{confidence}%")
}

pub fn style_label(writing_style: Option<&str>) -> &str {
    writing_style.unwrap_or("unknown")
}

pub fn issue_message(issue: &LanguageIssue) -> &str {
    issue
        .message
        .as_deref()
        .unwrap_or("Language issue detected.")
}

pub fn issue_severity(issue: &LanguageIssue) -> &str {
    issue.severity.as_deref().unwrap_or("medium")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(id: &str, kind: &str, start: usize, len: usize, suggestions: &[&str]) -> LanguageIssue {
        LanguageIssue {
            id: id.to_string(),
            kind: kind.to_string(),
            message: None,
            word: None,
            severity: None,
            context: None,
            start_index: start,
            length: len,
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn joined(segments: &[HighlightSegment]) -> String {
        segments.iter().map(|s| s.text()).collect()
    }

    #[test]
    fn segments_reconstruct_the_original_text() {
        let text = "I will recieve the pacage tomorrow";
        let issues = vec![
            // Deliberately unsorted.
            issue("2", "spelling", 19, 6, &["package"]),
            issue("1", "spelling", 7, 7, &["receive"]),
        ];

        let segments = highlight_segments(text, &issues);
        assert_eq!(joined(&segments), text);

        let marked: Vec<&HighlightSegment> = segments
            .iter()
            .filter(|s| matches!(s, HighlightSegment::Marked { .. }))
            .collect();
        assert_eq!(marked.len(), 2);
        assert_eq!(marked[0].text(), "recieve");
        assert_eq!(marked[1].text(), "pacage");
    }

    #[test]
    fn no_issues_yields_one_plain_segment() {
        let segments = highlight_segments("all good here", &[]);
        assert_eq!(
            segments,
            vec![HighlightSegment::Plain("all good here".to_string())]
        );
    }

    #[test]
    fn non_spelling_issues_are_not_marked() {
        let text = "He go to school";
        let issues = vec![issue("g1", "tense_mismatch", 3, 2, &[])];
        let segments = highlight_segments(text, &issues);
        assert_eq!(segments, vec![HighlightSegment::Plain(text.to_string())]);
    }

    #[test]
    fn overlapping_and_out_of_range_spans_do_not_garble_output() {
        let text = "short text";
        let issues = vec![
            issue("a", "spelling", 0, 5, &["x"]),
            // Overlaps the first span.
            issue("b", "spelling", 3, 4, &["y"]),
            // Runs past the end of the text.
            issue("c", "spelling", 6, 50, &["z"]),
        ];

        let segments = highlight_segments(text, &issues);
        assert_eq!(joined(&segments), text);
        assert!(segments
            .iter()
            .any(|s| matches!(s, HighlightSegment::Marked { issue_id, .. } if issue_id == "a")));
        assert!(!segments
            .iter()
            .any(|s| matches!(s, HighlightSegment::Marked { issue_id, .. } if issue_id == "b")));
    }

    #[test]
    fn marked_segment_at_text_end_has_no_trailing_plain() {
        let text = "I will recieve";
        let issues = vec![issue("1", "spelling", 7, 7, &["receive"])];
        let segments = highlight_segments(text, &issues);
        assert_eq!(
            segments,
            vec![
                HighlightSegment::Plain("I will ".to_string()),
                HighlightSegment::Marked {
                    issue_id: "1".to_string(),
                    text: "recieve".to_string()
                },
            ]
        );
    }

    #[test]
    fn word_count_of_whitespace_is_zero() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn word_count_collapses_runs_of_whitespace() {
        assert_eq!(word_count("a  b   c"), 3);
        assert_eq!(word_count("  leading and trailing  "), 3);
    }

    #[test]
    fn overview_counts_split_on_suggestions() {
        let issues = vec![
            issue("1", "spelling", 0, 3, &["the"]),
            issue("2", "spelling", 5, 4, &[]),
            issue("3", "tense_mismatch", 12, 2, &[]),
        ];
        let counts = overview_counts("teh is wrong go", &issues);
        assert_eq!(counts.words, 4);
        assert_eq!(counts.spelling, 1);
        assert_eq!(counts.grammar, 2);
    }

    #[test]
    fn spelling_subset_keeps_only_suggestion_bearing_issues() {
        let issues = vec![
            issue("1", "spelling", 0, 3, &["the"]),
            issue("2", "spelling", 5, 4, &[]),
        ];
        let subset = spelling_subset(&issues);
        assert_eq!(subset.len(), 1);
        assert_eq!(subset[0].id, "1");
    }

    #[test]
    fn replace_span_swaps_the_exact_range() {
        assert_eq!(replace_span("I will recieve it", 7, 7, "receive"), "I will receive it");
        // Shorter replacement.
        assert_eq!(replace_span("aaa bbbb ccc", 4, 4, "bb"), "aaa bb ccc");
        // Longer replacement at the very end.
        assert_eq!(replace_span("go hom", 3, 3, "homeward"), "go homeward");
    }

    #[test]
    fn replace_span_counts_characters_not_bytes() {
        assert_eq!(replace_span("héllo wörld", 6, 5, "world"), "héllo world");
    }

    #[test]
    fn applying_a_suggestion_shifts_later_issues_by_the_exact_delta() {
        let text = "I recieve the pacage";
        let mut issues = vec![
            issue("1", "spelling", 2, 7, &["receive"]),
            issue("2", "spelling", 14, 6, &["package"]),
        ];

        // Apply "recieve" -> "recieved" (delta +1).
        let replacement = "recieved";
        let applied = issues[0].clone();
        let updated = replace_span(text, applied.start_index, applied.length, replacement);
        let delta = span_delta(applied.length, replacement);
        assert_eq!(delta, 1);

        retire_issue_and_shift(&mut issues, &applied.id, applied.start_index, delta);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].start_index, 15);

        // The surviving span still points at its word in the mutated text.
        let chars: Vec<char> = updated.chars().collect();
        let span: String = chars[issues[0].start_index..issues[0].end_index()]
            .iter()
            .collect();
        assert_eq!(span, "pacage");
    }

    #[test]
    fn negative_delta_pulls_later_issues_back() {
        let mut issues = vec![
            issue("1", "spelling", 0, 6, &["go"]),
            issue("2", "spelling", 10, 3, &["cat"]),
        ];
        retire_issue_and_shift(&mut issues, "1", 0, -4);
        assert_eq!(issues[0].start_index, 6);
    }

    #[test]
    fn issues_at_or_before_the_applied_span_are_not_shifted() {
        let mut issues = vec![
            issue("1", "spelling", 5, 3, &["one"]),
            issue("2", "spelling", 2, 2, &["two"]),
            issue("3", "spelling", 5, 4, &["tie"]),
        ];
        retire_issue_and_shift(&mut issues, "1", 5, 10);
        assert_eq!(issues[0].start_index, 2);
        // Equal start is not strictly greater, so it stays.
        assert_eq!(issues[1].start_index, 5);
    }

    #[test]
    fn popup_shows_at_most_three_suggestions() {
        let many = issue("1", "spelling", 0, 3, &["a", "b", "c", "d", "e"]);
        let expected: Vec<String> = vec!["a".into(), "b".into(), "c".into()];
        assert_eq!(visible_suggestions(&many), expected.as_slice());

        let few = issue("2", "spelling", 0, 3, &["only"]);
        assert_eq!(visible_suggestions(&few), few.suggestions.as_slice());
    }

    #[test]
    fn render_defaults_match_the_service_conventions() {
        let bare = issue("1", "spelling", 0, 3, &[]);
        assert_eq!(issue_message(&bare), "Language issue detected.");
        assert_eq!(issue_severity(&bare), "medium");
        assert_eq!(style_label(None), "unknown");
        assert_eq!(style_label(Some("Formal")), "Formal");
    }

    #[test]
    fn confidence_renders_as_a_percentage() {
        assert_eq!(confidence_label(82.0), "82%");
        assert_eq!(confidence_label(67.25), "67.25%");
    }
}
