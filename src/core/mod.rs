//! Core modules for Textlens

pub mod metrics;
pub mod sentiment;
pub mod report;
pub mod session;

pub use metrics::{analyze, tokenize, MetricsEngine};
pub use sentiment::{score, ClassifierConfig, SentimentClassifier};
pub use report::{report_rows, save_report, to_delimited_report, to_delimited_report_with, ReportFormat};
pub use session::{AnalysisSession, RequestToken};
