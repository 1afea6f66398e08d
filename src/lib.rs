//! Textlens: live text statistics and offline keyword sentiment
//!
//! Metrics engine → report formatter, plus an async sentiment classifier
//! driven by a caller-owned analysis session.

pub mod core;
pub mod error;
pub mod types;

// =============================================================================
// METRICS
// =============================================================================

/// Placeholder for word fields when the text has no tokens
pub const NO_WORD_SENTINEL: &str = "N/A";

// =============================================================================
// SENTIMENT
// =============================================================================

/// Artificial classifier latency so callers can show a working state (milliseconds)
pub const DEFAULT_SENTIMENT_DELAY_MS: u64 = 800;

/// Confidence reported when no lexicon keyword matched
pub const BASE_CONFIDENCE: f64 = 0.5;

/// Upper bound on reported confidence
pub const CONFIDENCE_CAP: f64 = 0.99;

// =============================================================================
// REPORT
// =============================================================================

/// Field separator for exported reports
pub const DEFAULT_DELIMITER: char = ',';

/// Header row of every exported report
pub const REPORT_HEADER: [&str; 2] = ["Metric", "Value"];

/// Extension used for exported report files
pub const REPORT_EXTENSION: &str = "csv";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
