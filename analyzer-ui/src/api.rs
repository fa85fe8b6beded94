use analyzer_types::{
    AnalysisReport, LanguageIssue, PredictEnvelope, PredictOutcome, PredictRequest,
    SpellCheckEnvelope,
};
use gloo_net::http::Request;
use std::sync::OnceLock;

/// Get the API base URL based on current environment
/// - In development (localhost): use the prediction service's dev port
/// - In production: use same origin (the service serves the static bundle)
fn get_api_base() -> String {
    // Get the current hostname from the browser
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:10000".to_string()
    } else {
        // In production, use same origin
        "".to_string()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

/// How a prediction request can fail, from the UI's point of view.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    /// The service accepted the request but reported a failure of its own.
    /// The message is meant for the user verbatim.
    Server(String),
    /// Transport failure, or a body that could not be made sense of.
    /// The detail is for logs only.
    Transport(String),
}

/// One round trip to `POST /predict` with `{ "text": ... }`.
///
/// The body is parsed before the HTTP status is considered: the service
/// reports structured errors with an `error` flag on 4xx as well as 2xx.
/// Anything that does not parse as the envelope is a transport failure.
pub async fn predict(text: &str) -> Result<AnalysisReport, PredictError> {
    let url = format!("{}/predict", api_base());

    let response = Request::post(&url)
        .json(&PredictRequest {
            text: text.to_string(),
        })
        .map_err(|e| PredictError::Transport(format!("Failed to serialize request: {e}")))?
        .send()
        .await
        .map_err(|e| PredictError::Transport(format!("Request failed: {e}")))?;

    let envelope: PredictEnvelope = response
        .json()
        .await
        .map_err(|e| PredictError::Transport(format!("Failed to parse JSON: {e}")))?;

    match envelope.into_outcome() {
        Ok(PredictOutcome::Report(report)) => Ok(report),
        Ok(PredictOutcome::ServerError(message)) => Err(PredictError::Server(message)),
        Err(detail) => Err(PredictError::Transport(detail)),
    }
}

/// Spelling-only pass over `POST /api/spell-check`. Issues come back in the
/// same raw shape as `/predict` and are normalized the same way.
pub async fn spell_check(text: &str) -> Result<Vec<LanguageIssue>, PredictError> {
    let url = format!("{}/api/spell-check", api_base());

    let response = Request::post(&url)
        .json(&PredictRequest {
            text: text.to_string(),
        })
        .map_err(|e| PredictError::Transport(format!("Failed to serialize request: {e}")))?
        .send()
        .await
        .map_err(|e| PredictError::Transport(format!("Request failed: {e}")))?;

    let envelope: SpellCheckEnvelope = response
        .json()
        .await
        .map_err(|e| PredictError::Transport(format!("Failed to parse JSON: {e}")))?;

    if let Some(message) = envelope.error {
        return Err(PredictError::Server(message));
    }

    Ok(envelope
        .issues
        .into_iter()
        .map(LanguageIssue::from)
        .collect())
}
