pub mod analyzer;

pub use analyzer::AnalyzerView;
