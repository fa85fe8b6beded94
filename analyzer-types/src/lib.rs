//! Wire types for the text-quality prediction service.
//!
//! The service has revised its issue schema over time (`issue_type` vs
//! `type`, `reason` vs `message`, `error_word` vs `word`, numeric vs string
//! ids). All of that tolerance lives here, at the boundary: the raw structs
//! accept every shape the service has shipped, and the UI only ever sees the
//! normalized [`LanguageIssue`] / [`AnalysisReport`] forms.

use serde::{Deserialize, Serialize};

// ============================================================================
// Requests
// ============================================================================

/// Body for `POST /predict` and `POST /api/spell-check`.
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest {
    pub text: String,
}

// ============================================================================
// Raw responses
// ============================================================================

/// Raw `/predict` response. Success and error payloads share one shape;
/// the `error` flag discriminates.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictEnvelope {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub predicted_grade: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub is_confident: Option<bool>,
    #[serde(default)]
    pub writing_style: Option<String>,
    #[serde(default)]
    pub language_issues: Vec<RawIssue>,
}

/// Raw `/api/spell-check` response. `error` is a plain string here, not a
/// flag.
#[derive(Debug, Clone, Deserialize)]
pub struct SpellCheckEnvelope {
    #[serde(default)]
    pub issues: Vec<RawIssue>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One detected issue as the service emits it, across schema revisions.
#[derive(Debug, Clone, Deserialize)]
pub struct RawIssue {
    #[serde(default, deserialize_with = "issue_id_compat")]
    pub issue_id: Option<String>,
    #[serde(default)]
    pub issue_type: Option<String>,
    #[serde(default, rename = "type")]
    pub type_label: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub error_word: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub start_index: Option<usize>,
    #[serde(default)]
    pub length: Option<usize>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Older responses number issues, newer ones use strings. Accept both.
fn issue_id_compat<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Num(i64),
        Text(String),
    }

    let raw = Option::<IdRepr>::deserialize(deserializer)?;
    Ok(raw.map(|id| match id {
        IdRepr::Num(n) => n.to_string(),
        IdRepr::Text(s) => s,
    }))
}

// ============================================================================
// Normalized types
// ============================================================================

/// One detected problem in the analyzed text, with a character span and
/// optional replacement suggestions.
///
/// `start_index` and `length` are character offsets into the text that was
/// analyzed; `start_index + length` never exceeds the text length at the
/// time the issue was produced.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageIssue {
    pub id: String,
    pub kind: String,
    pub message: Option<String>,
    pub word: Option<String>,
    pub severity: Option<String>,
    pub context: Option<String>,
    pub start_index: usize,
    pub length: usize,
    pub suggestions: Vec<String>,
}

impl LanguageIssue {
    pub fn is_spelling(&self) -> bool {
        self.kind == "spelling"
    }

    /// Suggestion-bearing issues are the spelling-like subset; the rest
    /// count as grammar/style.
    pub fn has_suggestions(&self) -> bool {
        !self.suggestions.is_empty()
    }

    pub fn end_index(&self) -> usize {
        self.start_index + self.length
    }
}

impl From<RawIssue> for LanguageIssue {
    fn from(raw: RawIssue) -> Self {
        // Either category field is authoritative for "spelling"; otherwise
        // issue_type wins over the newer type label.
        let kind = if raw.issue_type.as_deref() == Some("spelling")
            || raw.type_label.as_deref() == Some("spelling")
        {
            "spelling".to_string()
        } else {
            raw.issue_type
                .or(raw.type_label)
                .unwrap_or_else(|| "unknown".to_string())
        };

        let start_index = raw.start_index.unwrap_or(0);
        let length = raw.length.unwrap_or(0);
        let id = raw
            .issue_id
            .unwrap_or_else(|| format!("span-{start_index}-{length}"));

        Self {
            id,
            kind,
            message: raw.message.or(raw.reason),
            word: raw.word.or(raw.error_word).or(raw.token),
            severity: raw.severity,
            context: raw.context,
            start_index,
            length,
            suggestions: raw.suggestions,
        }
    }
}

/// Validated success payload of `/predict`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub predicted_grade: String,
    /// Percentage, as sent by the service.
    pub confidence: f64,
    pub is_confident: bool,
    pub writing_style: Option<String>,
    pub language_issues: Vec<LanguageIssue>,
}

/// What a parsed `/predict` body turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictOutcome {
    Report(AnalysisReport),
    ServerError(String),
}

impl PredictEnvelope {
    /// Splits the envelope into a report or a service-reported error.
    /// A non-error payload missing required fields is an `Err`, which the
    /// HTTP layer treats the same as a body that did not parse.
    pub fn into_outcome(self) -> Result<PredictOutcome, String> {
        if self.error {
            return Ok(PredictOutcome::ServerError(
                self.message
                    .unwrap_or_else(|| "Analysis failed.".to_string()),
            ));
        }

        let predicted_grade = self
            .predicted_grade
            .ok_or_else(|| "response missing predicted_grade".to_string())?;
        let confidence = self
            .confidence
            .ok_or_else(|| "response missing confidence".to_string())?;
        let is_confident = self
            .is_confident
            .ok_or_else(|| "response missing is_confident".to_string())?;

        Ok(PredictOutcome::Report(AnalysisReport {
            predicted_grade,
            confidence,
            is_confident,
            writing_style: self.writing_style,
            language_issues: self
                .language_issues
                .into_iter()
                .map(LanguageIssue::from)
                .collect(),
        }))
    }
}

// ============================================================================
// Tests
// ============================================================================
