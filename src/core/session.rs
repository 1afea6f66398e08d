//! Analysis Session: caller-side status around the sentiment classifier
//!
//! State transitions:
//! - IDLE | COMPLETED | ERROR → ANALYZING: `begin` on non-empty text
//! - ANALYZING → COMPLETED: classifier resolved with a verdict
//! - ANALYZING → ERROR: classifier failed
//! - ANALYZING → IDLE: request abandoned (`abort`, or `run_sentiment` dropped)
//! - any → IDLE: source text changed
//!
//! Every `begin` hands out a `RequestToken`. Only the token of the current
//! request can settle it, so a late result for replaced text is rejected.
//!
//! Metrics are recomputed on every text change and never touch the status.

use tracing::{debug, warn};

use crate::core::metrics::MetricsEngine;
use crate::core::sentiment::SentimentClassifier;
use crate::error::{ClassifyError, SessionError};
use crate::types::{AnalysisStatus, ReasonCode, SentimentVerdict, TextStatistics};

/// Identity of one sentiment request, returned by `begin`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// One document being edited, with its live stats and sentiment status
#[derive(Debug, Default)]
pub struct AnalysisSession {
    /// Current document text
    text: String,
    /// Stats for `text`
    stats: TextStatistics,
    /// Sentiment request status for `text`
    status: AnalysisStatus,
    /// Why the last transition happened
    last_reason: ReasonCode,
    /// Number of text updates
    update_count: u64,
    /// Bumped on every text change and every `begin`
    generation: u64,
}

impl AnalysisSession {
    /// Create empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the document text and return fresh stats.
    ///
    /// A changed text drops any verdict, error or outstanding request for the
    /// old text.
    pub fn set_text(&mut self, text: impl Into<String>) -> &TextStatistics {
        let text = text.into();
        self.update_count += 1;

        if text != self.text {
            self.stats = MetricsEngine.analyze(&text);
            self.text = text;
            self.generation += 1;

            if self.status != AnalysisStatus::Idle {
                debug!(from = %self.status, "text changed, status reset");
                self.status = AnalysisStatus::Idle;
                self.last_reason = ReasonCode::S004_TEXT_CHANGED;
            }
        }

        &self.stats
    }

    /// Append to the document (interactive editing)
    pub fn push_text(&mut self, more: &str) -> &TextStatistics {
        let mut text = self.text.clone();
        text.push_str(more);
        self.set_text(text)
    }

    /// Enter ANALYZING. Refused while a request is outstanding or text is empty.
    pub fn begin(&mut self) -> Result<RequestToken, SessionError> {
        if self.status.is_analyzing() {
            return Err(SessionError::AlreadyAnalyzing);
        }
        if self.text.trim().is_empty() {
            return Err(SessionError::EmptyText);
        }

        self.generation += 1;
        self.status = AnalysisStatus::Analyzing;
        self.last_reason = ReasonCode::S004_ANALYSIS_STARTED;
        Ok(RequestToken(self.generation))
    }

    /// Leave ANALYZING with the classifier outcome of request `token`
    pub fn finish(
        &mut self,
        token: RequestToken,
        result: Result<SentimentVerdict, ClassifyError>,
    ) -> Result<&AnalysisStatus, SessionError> {
        self.check_current(token)?;

        match result {
            Ok(verdict) => {
                self.status = AnalysisStatus::Completed(verdict);
                self.last_reason = ReasonCode::S004_ANALYSIS_FINISHED;
            }
            Err(e) => {
                warn!(error = %e, "sentiment analysis failed");
                self.status = AnalysisStatus::Error(e.reason());
                self.last_reason = ReasonCode::S004_ANALYSIS_FAILED;
            }
        }

        Ok(&self.status)
    }

    /// Give up on request `token` without a result; ANALYZING → IDLE
    pub fn abort(&mut self, token: RequestToken) -> Result<(), SessionError> {
        self.check_current(token)?;

        debug!("sentiment request abandoned");
        self.status = AnalysisStatus::Idle;
        self.last_reason = ReasonCode::S004_ANALYSIS_ABORTED;
        Ok(())
    }

    /// begin → classify → finish. Also the retry path from ERROR.
    ///
    /// Dropping the returned future before it resolves aborts the request.
    pub async fn run_sentiment(
        &mut self,
        classifier: &SentimentClassifier,
    ) -> Result<&AnalysisStatus, SessionError> {
        let token = self.begin()?;
        let text = self.text.clone();

        let pending = PendingRequest {
            session: Some(self),
            token,
        };
        let result = classifier.classify(&text).await;
        pending.settle(result)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn stats(&self) -> &TextStatistics {
        &self.stats
    }

    pub fn status(&self) -> &AnalysisStatus {
        &self.status
    }

    pub fn last_reason(&self) -> ReasonCode {
        self.last_reason
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Clear text, stats and status. Outstanding tokens stay invalid.
    pub fn reset(&mut self) {
        let generation = self.generation + 1;
        *self = Self::new();
        self.generation = generation;
    }

    fn check_current(&self, token: RequestToken) -> Result<(), SessionError> {
        if !self.status.is_analyzing() {
            return Err(SessionError::NotAnalyzing);
        }
        if token != RequestToken(self.generation) {
            return Err(SessionError::Stale);
        }
        Ok(())
    }
}

/// Outstanding `run_sentiment` request; aborts on drop unless settled
struct PendingRequest<'a> {
    session: Option<&'a mut AnalysisSession>,
    token: RequestToken,
}

impl<'a> PendingRequest<'a> {
    fn settle(
        mut self,
        result: Result<SentimentVerdict, ClassifyError>,
    ) -> Result<&'a AnalysisStatus, SessionError> {
        match self.session.take() {
            Some(session) => session.finish(self.token, result),
            None => Err(SessionError::NotAnalyzing),
        }
    }
}

impl Drop for PendingRequest<'_> {
    fn drop(&mut self) {
        if let Some(session) = self.session.take() {
            // Already settled elsewhere or superseded: nothing to undo
            let _ = session.abort(self.token);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sentiment::{score, ClassifierConfig};
    use crate::types::SentimentLabel;
    use std::time::Duration;

    fn immediate() -> SentimentClassifier {
        SentimentClassifier::with_config(ClassifierConfig::immediate())
    }

    #[test]
    fn test_initial_state() {
        let session = AnalysisSession::new();
        assert_eq!(session.status(), &AnalysisStatus::Idle);
        assert_eq!(session.stats(), &TextStatistics::empty());
        assert_eq!(session.last_reason(), ReasonCode::S002_STATE_IDLE);
    }

    #[test]
    fn test_set_text_updates_stats() {
        let mut session = AnalysisSession::new();
        assert_eq!(session.set_text("one two").word_count, 2);
        assert_eq!(session.push_text(" three").word_count, 3);
        assert_eq!(session.text(), "one two three");
        assert_eq!(session.update_count(), 2);
    }

    #[test]
    fn test_begin_refused_on_empty_text() {
        let mut session = AnalysisSession::new();
        session.set_text("   ");
        assert_eq!(session.begin(), Err(SessionError::EmptyText));
        assert_eq!(session.status(), &AnalysisStatus::Idle);
    }

    #[test]
    fn test_begin_refused_while_analyzing() {
        let mut session = AnalysisSession::new();
        session.set_text("good");
        session.begin().unwrap();
        assert_eq!(session.begin(), Err(SessionError::AlreadyAnalyzing));
    }

    #[test]
    fn test_finish_twice() {
        let mut session = AnalysisSession::new();
        session.set_text("good");
        let token = session.begin().unwrap();
        session.finish(token, Ok(score("good"))).unwrap();

        let result = session.finish(token, Ok(score("good")));
        assert_eq!(result.unwrap_err(), SessionError::NotAnalyzing);
    }

    #[test]
    fn test_failure_then_retry() {
        let mut session = AnalysisSession::new();
        session.set_text("great work");

        let token = session.begin().unwrap();
        let status = session
            .finish(token, Err(ClassifyError::TaskFailed("boom".to_string())))
            .unwrap();
        assert_eq!(status, &AnalysisStatus::Error(ReasonCode::S003_CLASSIFY_FAILED));
        assert_eq!(session.last_reason(), ReasonCode::S004_ANALYSIS_FAILED);

        let token = session.begin().unwrap();
        session.finish(token, Ok(score("great work"))).unwrap();
        assert_eq!(
            session.status().verdict().map(|v| v.label),
            Some(SentimentLabel::Positive)
        );
    }

    #[test]
    fn test_text_change_invalidates_verdict() {
        let mut session = AnalysisSession::new();
        session.set_text("good");
        let token = session.begin().unwrap();
        session.finish(token, Ok(score("good"))).unwrap();

        // Same text keeps the verdict
        session.set_text("good");
        assert!(session.status().verdict().is_some());

        session.set_text("good day");
        assert_eq!(session.status(), &AnalysisStatus::Idle);
        assert_eq!(session.last_reason(), ReasonCode::S004_TEXT_CHANGED);
    }

    #[test]
    fn test_text_change_while_analyzing() {
        let mut session = AnalysisSession::new();
        session.set_text("good");
        let token = session.begin().unwrap();

        session.set_text("bad bad bad");
        assert_eq!(session.status(), &AnalysisStatus::Idle);
        assert_eq!(session.last_reason(), ReasonCode::S004_TEXT_CHANGED);

        let result = session.finish(token, Ok(score("good")));
        assert_eq!(result.unwrap_err(), SessionError::NotAnalyzing);
        assert_eq!(session.status(), &AnalysisStatus::Idle);
    }

    #[test]
    fn test_late_result_for_old_text_rejected() {
        let mut session = AnalysisSession::new();
        session.set_text("good");
        let old = session.begin().unwrap();

        session.set_text("bad bad bad");
        let current = session.begin().unwrap();

        let result = session.finish(old, Ok(score("good")));
        assert_eq!(result.unwrap_err(), SessionError::Stale);
        assert_eq!(session.status(), &AnalysisStatus::Analyzing);

        session.finish(current, Ok(score("bad bad bad"))).unwrap();
        assert_eq!(
            session.status().verdict().map(|v| v.label),
            Some(SentimentLabel::Negative)
        );
    }

    #[test]
    fn test_abort_allows_new_request() {
        let mut session = AnalysisSession::new();
        session.set_text("good");
        let token = session.begin().unwrap();

        session.abort(token).unwrap();
        assert_eq!(session.status(), &AnalysisStatus::Idle);
        assert_eq!(session.last_reason(), ReasonCode::S004_ANALYSIS_ABORTED);
        assert_eq!(session.abort(token), Err(SessionError::NotAnalyzing));

        let next = session.begin().unwrap();
        assert_ne!(next, token);
    }

    #[test]
    fn test_token_from_before_reset_is_stale() {
        let mut session = AnalysisSession::new();
        session.set_text("good");
        let old = session.begin().unwrap();

        session.reset();
        session.set_text("good");
        session.begin().unwrap();
        assert_eq!(session.abort(old), Err(SessionError::Stale));
    }

    #[tokio::test]
    async fn test_run_sentiment() {
        let mut session = AnalysisSession::new();
        session.set_text("This is a terrible, awful idea.");

        let status = session.run_sentiment(&immediate()).await.unwrap();
        let verdict = status.verdict().unwrap();
        assert_eq!(verdict.label, SentimentLabel::Negative);
        assert_eq!(session.last_reason(), ReasonCode::S004_ANALYSIS_FINISHED);
    }

    #[tokio::test]
    async fn test_dropped_run_returns_to_idle() {
        let mut session = AnalysisSession::new();
        session.set_text("great");
        let slow = SentimentClassifier::with_config(ClassifierConfig::with_delay_ms(500));

        let outcome = tokio::time::timeout(Duration::from_millis(10), session.run_sentiment(&slow)).await;
        assert!(outcome.is_err());

        assert_eq!(session.status(), &AnalysisStatus::Idle);
        assert_eq!(session.last_reason(), ReasonCode::S004_ANALYSIS_ABORTED);
        assert!(session.begin().is_ok());
    }

    #[test]
    fn test_reset() {
        let mut session = AnalysisSession::new();
        session.set_text("something");
        session.reset();
        assert_eq!(session.text(), "");
        assert_eq!(session.update_count(), 0);
    }
}
