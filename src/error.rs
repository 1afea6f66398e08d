//! Error types for classifier, session and export

use std::path::PathBuf;
use thiserror::Error;

use crate::types::ReasonCode;

/// Failure while classifying sentiment.
///
/// Any string is tokenizable, so these only come from runtime faults.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The classification task panicked or was cancelled
    #[error("classification task failed: {0}")]
    TaskFailed(String),
}

impl ClassifyError {
    /// Reason code a caller records in its error state
    pub fn reason(&self) -> ReasonCode {
        match self {
            Self::TaskFailed(_) => ReasonCode::S003_CLASSIFY_FAILED,
        }
    }
}

/// Illegal request against an analysis session
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A classification is already outstanding
    #[error("analysis already in progress")]
    AlreadyAnalyzing,

    /// Nothing to classify
    #[error("no text to analyze")]
    EmptyText,

    /// `finish` or `abort` called without a matching `begin`
    #[error("no analysis in progress")]
    NotAnalyzing,

    /// Token belongs to an earlier request
    #[error("result belongs to a superseded request")]
    Stale,
}

/// Failure while writing an exported report
#[derive(Debug, Error)]
pub enum ExportError {
    /// Report directory could not be created
    #[error("cannot create report directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report file could not be written
    #[error("cannot write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
