//! Analyzer styles

pub const ANALYZER_STYLES: &str = r#"
:root {
    --window-bg: #12141a;
    --panel-bg: #1a1d26;
    --hover-bg: #232733;
    --border-color: #2d3240;
    --text-primary: #e6e8ee;
    --text-secondary: #9aa1b2;
    --text-muted: #6b7280;
    --accent-bg: #6366f1;
    --accent-text: #ffffff;
    --danger-bg: #ef4444;
    --warning-bg: #f59e0b;
    --success-bg: #22c55e;
}

/* ── Layout ── */
.analyzer-container {
    max-width: 880px;
    margin: 0 auto;
    padding: 1.5rem 1rem 4rem;
    min-height: 100vh;
    background: var(--window-bg);
    color: var(--text-primary);
    font-family: system-ui, -apple-system, sans-serif;
    outline: none;
}

.analyzer-header h1 {
    margin: 0 0 0.25rem;
    font-size: 1.5rem;
}

.analyzer-tagline {
    margin: 0 0 1.25rem;
    color: var(--text-secondary);
    font-size: 0.9rem;
}

/* ── Editor ── */
.editor-area {
    margin-bottom: 1.25rem;
}

.analyzer-textarea {
    width: 100%;
    min-height: 9rem;
    padding: 0.75rem;
    box-sizing: border-box;
    background: var(--panel-bg);
    color: var(--text-primary);
    border: 1px solid var(--border-color);
    border-radius: 0.5rem;
    font-size: 0.95rem;
    line-height: 1.5;
    resize: vertical;
}

.analyzer-textarea:focus {
    outline: none;
    border-color: var(--accent-bg);
}

.analyzer-actions {
    display: flex;
    gap: 0.5rem;
    margin-top: 0.6rem;
}

.analyze-button {
    background: var(--accent-bg);
    color: var(--accent-text);
    border: none;
    border-radius: 0.4rem;
    padding: 0.5rem 1.25rem;
    font-size: 0.9rem;
    cursor: pointer;
}

.analyze-button:disabled {
    opacity: 0.6;
    cursor: default;
}

.spellcheck-button {
    background: transparent;
    color: var(--text-primary);
    border: 1px solid var(--border-color);
    border-radius: 0.4rem;
    padding: 0.5rem 1rem;
    font-size: 0.9rem;
    cursor: pointer;
}

.spellcheck-button:hover {
    background: var(--hover-bg);
}

/* ── Result area ── */
.result-hint {
    color: var(--text-secondary);
    font-size: 0.9rem;
}

.result-loading {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    color: var(--text-secondary);
    font-size: 0.9rem;
}

.spinner {
    animation: spin 1s linear infinite;
    display: inline-block;
}

@keyframes spin {
    to { transform: rotate(360deg); }
}

.result-error {
    padding: 0.75rem 1rem;
    background: color-mix(in srgb, var(--danger-bg) 14%, transparent);
    color: var(--danger-bg);
    border: 1px solid var(--danger-bg);
    border-radius: 0.5rem;
    font-size: 0.9rem;
}

.result-card {
    padding: 1rem;
    background: var(--panel-bg);
    border: 1px solid var(--border-color);
    border-radius: 0.5rem;
    margin-bottom: 0.75rem;
}

.grade-line {
    display: flex;
    align-items: baseline;
    gap: 0.6rem;
}

.grade-label {
    color: var(--text-secondary);
    font-size: 0.85rem;
}

.grade-value {
    font-size: 1.75rem;
    font-weight: 700;
    color: var(--success-bg);
}

.confidence-line {
    margin-top: 0.25rem;
    color: var(--text-secondary);
    font-size: 0.9rem;
}

.low-confidence-warning {
    margin-top: 0.6rem;
    padding: 0.5rem 0.75rem;
    background: color-mix(in srgb, var(--warning-bg) 12%, transparent);
    color: var(--warning-bg);
    border-radius: 0.4rem;
    font-size: 0.85rem;
}

.style-line {
    margin-bottom: 0.75rem;
    font-size: 0.9rem;
    color: var(--text-secondary);
}

/* ── Issue list ── */
.issues-empty {
    color: var(--success-bg);
    font-size: 0.9rem;
}

.issues-list {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.issue-entry {
    padding: 0.6rem 0.8rem;
    background: var(--panel-bg);
    border: 1px solid var(--border-color);
    border-radius: 0.5rem;
}

.issue-entry-header {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 0.3rem;
}

.issue-ordinal {
    color: var(--text-muted);
    font-size: 0.85rem;
}

.issue-kind {
    font-size: 0.8rem;
    font-weight: 600;
    text-transform: capitalize;
}

.severity-badge {
    margin-left: auto;
    font-size: 0.7rem;
    padding: 0.1rem 0.45rem;
    border-radius: 0.25rem;
    text-transform: uppercase;
}

.severity--low {
    background: color-mix(in srgb, var(--text-muted) 18%, transparent);
    color: var(--text-secondary);
}

.severity--medium {
    background: color-mix(in srgb, var(--warning-bg) 18%, transparent);
    color: var(--warning-bg);
}

.severity--high {
    background: color-mix(in srgb, var(--danger-bg) 18%, transparent);
    color: var(--danger-bg);
}

.issue-message {
    margin: 0;
    font-size: 0.88rem;
}

.issue-word,
.issue-context {
    margin: 0.25rem 0 0;
    font-size: 0.8rem;
    color: var(--text-secondary);
}

/* ── Writing overview ── */
.panel-title {
    margin: 0 0 0.5rem;
    font-size: 1rem;
}

.overview-panel {
    margin-top: 1.25rem;
    padding: 0.9rem 1rem;
    background: var(--panel-bg);
    border: 1px solid var(--border-color);
    border-radius: 0.5rem;
}

.overview-stats {
    display: flex;
    gap: 1.5rem;
}

.overview-stat {
    display: flex;
    flex-direction: column;
}

.overview-value {
    font-size: 1.4rem;
    font-weight: 700;
}

.overview-label {
    font-size: 0.75rem;
    color: var(--text-secondary);
    text-transform: uppercase;
}

/* ── Review panel ── */
.review-panel {
    margin-top: 1.25rem;
    padding: 0.9rem 1rem;
    background: var(--panel-bg);
    border: 1px solid var(--border-color);
    border-radius: 0.5rem;
}

.review-hint {
    margin: 0 0 0.6rem;
    font-size: 0.8rem;
    color: var(--text-muted);
}

.review-body {
    white-space: pre-wrap;
    font-size: 0.95rem;
    line-height: 1.6;
}

.spelling-error {
    background: color-mix(in srgb, var(--danger-bg) 18%, transparent);
    border-bottom: 2px solid var(--danger-bg);
    border-radius: 0.15rem;
    cursor: pointer;
}

.spelling-error:hover {
    background: color-mix(in srgb, var(--danger-bg) 30%, transparent);
}

/* ── Suggestion popup ── */
.spell-popup {
    position: absolute;
    z-index: 100;
    min-width: 10rem;
    background: var(--panel-bg);
    border: 1px solid var(--border-color);
    border-radius: 0.4rem;
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.45);
    padding: 0.25rem;
    display: flex;
    flex-direction: column;
}

.spell-popup-row {
    background: transparent;
    border: none;
    color: var(--text-primary);
    text-align: left;
    padding: 0.4rem 0.6rem;
    font-size: 0.88rem;
    border-radius: 0.3rem;
    cursor: pointer;
}

.spell-popup-row:hover {
    background: var(--hover-bg);
}

.spell-popup-empty {
    padding: 0.4rem 0.6rem;
    font-size: 0.8rem;
    color: var(--text-muted);
}

.spell-popup-divider {
    height: 1px;
    margin: 0.25rem 0.3rem;
    background: var(--border-color);
}

.spell-popup-ignore {
    color: var(--text-secondary);
}
"#;
