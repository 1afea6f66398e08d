//! Sentiment Classifier: bag-of-words polarity from fixed keyword sets
//!
//! No negation or context handling: "not good" counts as one positive hit.

use std::collections::HashSet;
use std::time::Duration;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::error::ClassifyError;
use crate::types::{ReasonCode, SentimentLabel, SentimentVerdict};
use crate::{BASE_CONFIDENCE, CONFIDENCE_CAP, DEFAULT_SENTIMENT_DELAY_MS};

lazy_static! {
    static ref RE_TOKEN: Regex = Regex::new(r"\b\w+\b").unwrap();

    // =========================================================================
    // Positive lexicon
    // =========================================================================
    static ref POSITIVE_WORDS: HashSet<&'static str> = [
        "good", "great", "excellent", "amazing", "wonderful", "fantastic",
        "awesome", "brilliant", "love", "loved", "like", "enjoy", "enjoyed",
        "happy", "glad", "best", "better", "perfect", "beautiful", "nice",
        "superb", "delighted", "pleased", "positive", "success", "win",
    ]
    .into_iter()
    .collect();

    // =========================================================================
    // Negative lexicon
    // =========================================================================
    static ref NEGATIVE_WORDS: HashSet<&'static str> = [
        "bad", "terrible", "awful", "horrible", "hate", "hated", "dislike",
        "sad", "angry", "upset", "worst", "worse", "poor", "ugly", "boring",
        "annoying", "disappointing", "disappointed", "negative", "fail",
        "failure", "broken", "wrong", "problem", "lose", "loss",
    ]
    .into_iter()
    .collect();
}

/// Runtime settings for the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Artificial latency before the verdict is produced
    pub delay: Duration,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_SENTIMENT_DELAY_MS),
        }
    }
}

impl ClassifierConfig {
    /// No artificial latency
    pub fn immediate() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay_ms(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }
}

/// Async keyword sentiment classifier
#[derive(Debug, Clone, Default)]
pub struct SentimentClassifier {
    config: ClassifierConfig,
}

impl SentimentClassifier {
    /// Create classifier with the default delay
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify `text` after the configured delay.
    ///
    /// Runs on its own task so the caller can keep handling events; resolves
    /// exactly once. Must be awaited inside a tokio runtime.
    pub async fn classify(&self, text: &str) -> Result<SentimentVerdict, ClassifyError> {
        let delay = self.config.delay;
        let text = text.to_owned();

        debug!(delay_ms = delay.as_millis() as u64, bytes = text.len(), "classifying");

        let handle = tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            score(&text)
        });

        let verdict = handle
            .await
            .map_err(|e| ClassifyError::TaskFailed(e.to_string()))?;

        debug!(
            label = %verdict.label,
            positive = verdict.positive_count,
            negative = verdict.negative_count,
            "classified"
        );
        Ok(verdict)
    }
}

/// Synchronous scoring behind `classify`
pub fn score(text: &str) -> SentimentVerdict {
    let lowered = text.to_lowercase();

    let mut positive_count: usize = 0;
    let mut negative_count: usize = 0;
    for token in RE_TOKEN.find_iter(&lowered).map(|m| m.as_str()) {
        if POSITIVE_WORDS.contains(token) {
            positive_count += 1;
        } else if NEGATIVE_WORDS.contains(token) {
            negative_count += 1;
        }
    }

    let score = positive_count as i64 - negative_count as i64;
    let label = SentimentLabel::from_score(score);
    let matched = positive_count + negative_count;

    let confidence = if matched == 0 {
        BASE_CONFIDENCE
    } else {
        let margin = score.unsigned_abs() as f64 / matched as f64;
        (BASE_CONFIDENCE + margin * 0.5).min(CONFIDENCE_CAP)
    };

    let reason = match label {
        SentimentLabel::Positive => ReasonCode::S001_POSITIVE,
        SentimentLabel::Negative => ReasonCode::S001_NEGATIVE,
        SentimentLabel::Neutral if matched == 0 => ReasonCode::S001_NEUTRAL_NO_KEYWORDS,
        SentimentLabel::Neutral => ReasonCode::S001_NEUTRAL_BALANCED,
    };

    SentimentVerdict {
        label,
        confidence,
        explanation: format!(
            "Found {} positive and {} negative keyword(s).",
            positive_count, negative_count
        ),
        positive_count,
        negative_count,
        reason,
    }
}

// =============================================================================
// TESTS
// =============================================================================
