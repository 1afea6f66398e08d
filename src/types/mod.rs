//! Core types for Textlens

mod stats;
mod sentiment;
mod status;
mod reason;

pub use stats::TextStatistics;
pub use sentiment::{SentimentLabel, SentimentVerdict};
pub use status::AnalysisStatus;
pub use reason::ReasonCode;
