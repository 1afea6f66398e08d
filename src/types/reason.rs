//! Reason codes for sentiment outcomes and session transitions

use serde::{Deserialize, Serialize};

/// Reason codes for verdicts and status changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ReasonCode {
    // =========================================================================
    // S001: Verdict outcome
    // =========================================================================
    /// More positive than negative keywords
    S001_POSITIVE,
    /// More negative than positive keywords
    S001_NEGATIVE,
    /// Keywords matched but cancelled out
    S001_NEUTRAL_BALANCED,
    /// No lexicon keyword matched
    S001_NEUTRAL_NO_KEYWORDS,

    // =========================================================================
    // S002: Session state
    // =========================================================================
    S002_STATE_IDLE,
    S002_STATE_ANALYZING,
    S002_STATE_COMPLETED,
    S002_STATE_ERROR,

    // =========================================================================
    // S003: Failures
    // =========================================================================
    /// Classifier task faulted
    S003_CLASSIFY_FAILED,

    // =========================================================================
    // S004: Transitions
    // =========================================================================
    /// Source text changed, prior verdict dropped
    S004_TEXT_CHANGED,
    /// Request accepted, classifier running
    S004_ANALYSIS_STARTED,
    /// Classifier resumed with a verdict
    S004_ANALYSIS_FINISHED,
    /// Classifier resumed with a failure
    S004_ANALYSIS_FAILED,
    /// Request abandoned before the classifier resolved
    S004_ANALYSIS_ABORTED,
}

impl ReasonCode {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::S001_POSITIVE => "S001_POSITIVE",
            Self::S001_NEGATIVE => "S001_NEGATIVE",
            Self::S001_NEUTRAL_BALANCED => "S001_NEUTRAL_BALANCED",
            Self::S001_NEUTRAL_NO_KEYWORDS => "S001_NEUTRAL_NO_KEYWORDS",
            Self::S002_STATE_IDLE => "S002_STATE_IDLE",
            Self::S002_STATE_ANALYZING => "S002_STATE_ANALYZING",
            Self::S002_STATE_COMPLETED => "S002_STATE_COMPLETED",
            Self::S002_STATE_ERROR => "S002_STATE_ERROR",
            Self::S003_CLASSIFY_FAILED => "S003_CLASSIFY_FAILED",
            Self::S004_TEXT_CHANGED => "S004_TEXT_CHANGED",
            Self::S004_ANALYSIS_STARTED => "S004_ANALYSIS_STARTED",
            Self::S004_ANALYSIS_FINISHED => "S004_ANALYSIS_FINISHED",
            Self::S004_ANALYSIS_FAILED => "S004_ANALYSIS_FAILED",
            Self::S004_ANALYSIS_ABORTED => "S004_ANALYSIS_ABORTED",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::S001_POSITIVE => "Positive keywords dominate",
            Self::S001_NEGATIVE => "Negative keywords dominate",
            Self::S001_NEUTRAL_BALANCED => "Positive and negative keywords balance out",
            Self::S001_NEUTRAL_NO_KEYWORDS => "No sentiment keywords found",
            Self::S002_STATE_IDLE => "Waiting for a request",
            Self::S002_STATE_ANALYZING => "Analyzing sentiment",
            Self::S002_STATE_COMPLETED => "Verdict available",
            Self::S002_STATE_ERROR => "Analysis failed - retry available",
            Self::S003_CLASSIFY_FAILED => "Classifier task failed",
            Self::S004_TEXT_CHANGED => "Text changed - verdict cleared",
            Self::S004_ANALYSIS_STARTED => "Analysis started",
            Self::S004_ANALYSIS_FINISHED => "Analysis finished",
            Self::S004_ANALYSIS_FAILED => "Analysis failed",
            Self::S004_ANALYSIS_ABORTED => "Analysis abandoned",
        }
    }
}

impl Default for ReasonCode {
    fn default() -> Self {
        Self::S002_STATE_IDLE
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
