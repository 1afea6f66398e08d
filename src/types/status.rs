//! Analysis status owned by the caller of the sentiment classifier

use serde::{Deserialize, Serialize};

use crate::types::{ReasonCode, SentimentVerdict};

/// The four states of a sentiment request.
///
/// A completed status always carries its verdict and a failed one its reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "result", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisStatus {
    /// No verdict for the current text
    Idle,
    /// Classification outstanding, trigger disabled
    Analyzing,
    /// Verdict available for the current text
    Completed(SentimentVerdict),
    /// Classification failed, retry allowed
    Error(ReasonCode),
}

impl AnalysisStatus {
    /// Verdict, if completed
    pub fn verdict(&self) -> Option<&SentimentVerdict> {
        match self {
            AnalysisStatus::Completed(verdict) => Some(verdict),
            _ => None,
        }
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self, AnalysisStatus::Analyzing)
    }

    /// Reason code describing this state
    pub fn reason(&self) -> ReasonCode {
        match self {
            AnalysisStatus::Idle => ReasonCode::S002_STATE_IDLE,
            AnalysisStatus::Analyzing => ReasonCode::S002_STATE_ANALYZING,
            AnalysisStatus::Completed(_) => ReasonCode::S002_STATE_COMPLETED,
            AnalysisStatus::Error(_) => ReasonCode::S002_STATE_ERROR,
        }
    }

    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            AnalysisStatus::Idle => "\x1b[90m",         // Gray
            AnalysisStatus::Analyzing => "\x1b[33m",    // Yellow
            AnalysisStatus::Completed(_) => "\x1b[32m", // Green
            AnalysisStatus::Error(_) => "\x1b[31m",     // Red
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }
}

impl Default for AnalysisStatus {
    fn default() -> Self {
        AnalysisStatus::Idle
    }
}

impl std::fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AnalysisStatus::Idle => "IDLE",
            AnalysisStatus::Analyzing => "ANALYZING",
            AnalysisStatus::Completed(_) => "COMPLETED",
            AnalysisStatus::Error(_) => "ERROR",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let status = AnalysisStatus::default();
        assert_eq!(status, AnalysisStatus::Idle);
        assert!(status.verdict().is_none());
        assert_eq!(status.to_string(), "IDLE");
    }

    #[test]
    fn test_error_carries_reason() {
        let status = AnalysisStatus::Error(ReasonCode::S003_CLASSIFY_FAILED);
        assert_eq!(status.reason(), ReasonCode::S002_STATE_ERROR);
        assert!(!status.is_analyzing());
    }
}
