//! Sentiment verdict structures

use serde::{Deserialize, Serialize};

use crate::types::ReasonCode;

/// Overall polarity of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Label for a keyword score (positive hits minus negative hits)
    pub fn from_score(score: i64) -> Self {
        match score.signum() {
            1 => SentimentLabel::Positive,
            -1 => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        }
    }

    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "\x1b[32m", // Green
            SentimentLabel::Negative => "\x1b[31m", // Red
            SentimentLabel::Neutral => "\x1b[90m",  // Gray
        }
    }

    /// Get emoji for label
    pub fn emoji(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "🙂",
            SentimentLabel::Negative => "🙁",
            SentimentLabel::Neutral => "😐",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        };
        write!(f, "{}", name)
    }
}

/// Result of one sentiment classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentVerdict {
    pub label: SentimentLabel,
    /// 0.5 with no keyword hits, capped at 0.99
    pub confidence: f64,
    /// Human-readable keyword tally
    pub explanation: String,
    /// Positive lexicon hits
    pub positive_count: usize,
    /// Negative lexicon hits
    pub negative_count: usize,
    /// Why this label was chosen
    pub reason: ReasonCode,
}

impl SentimentVerdict {
    /// Positive hits minus negative hits
    pub fn score(&self) -> i64 {
        self.positive_count as i64 - self.negative_count as i64
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        format!(
            "{}{} {} ({:.0}% confidence) | {}\x1b[0m",
            self.label.color_code(),
            self.label.emoji(),
            self.label,
            self.confidence * 100.0,
            self.explanation
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "label={} | confidence={:.2} | score={} | positive={} | negative={} | reason={}",
            self.label,
            self.confidence,
            self.score(),
            self.positive_count,
            self.negative_count,
            self.reason.code()
        )
    }
}
