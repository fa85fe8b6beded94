//! Analyzer data types

use analyzer_types::AnalysisReport;

/// Where the current analysis cycle stands.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisState {
    /// Nothing submitted yet
    Idle,
    /// Request in flight
    Loading,
    /// Submitted with an empty editor; no request was made
    EmptyInput,
    /// The service reported a failure of its own
    Rejected(String),
    /// Transport failure or a body that did not parse
    Unreachable,
    /// Last analysis rendered successfully
    Ready(AnalysisReport),
}

/// One piece of the analyzed text after the highlight pass.
#[derive(Debug, Clone, PartialEq)]
pub enum HighlightSegment {
    Plain(String),
    Marked { issue_id: String, text: String },
}

impl HighlightSegment {
    pub fn text(&self) -> &str {
        match self {
            HighlightSegment::Plain(text) => text,
            HighlightSegment::Marked { text, .. } => text,
        }
    }
}

/// Anchor for the single active suggestion popup.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupAnchor {
    pub issue_id: String,
    pub left: f64,
    pub top: f64,
}

/// Counters for the writing overview panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverviewCounts {
    pub words: usize,
    pub spelling: usize,
    pub grammar: usize,
}
