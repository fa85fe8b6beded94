//! Text analyzer component
//!
//! One round trip per user action: editor text goes to the prediction
//! service, the response drives the result card, issue list, writing
//! overview, and the highlighted review panel. Clicking a highlighted word
//! opens the suggestion popup.

pub mod logic;
pub mod popup;
pub mod styles;
pub mod types;
pub mod view;

pub use view::AnalyzerView;
