//! Report Formatter: statistics → two-column delimited text
//!
//! Values are written unquoted. Every value is a number or a single token,
//! so none can contain the delimiter unless a caller picks a word character
//! as delimiter.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;

use crate::error::ExportError;
use crate::types::TextStatistics;
use crate::{DEFAULT_DELIMITER, REPORT_EXTENSION, REPORT_HEADER};

/// Output settings for delimited reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportFormat {
    pub delimiter: char,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

/// Ordered (metric, value) rows, header excluded
pub fn report_rows(stats: &TextStatistics) -> Vec<(&'static str, String)> {
    vec![
        ("Word Count", stats.word_count.to_string()),
        ("Total Characters", stats.char_count.to_string()),
        ("Characters (no spaces)", stats.char_count_no_spaces.to_string()),
        ("Sentences", stats.sentence_count.to_string()),
        ("Paragraphs", stats.paragraph_count.to_string()),
        (
            "Most Frequent Word",
            format!("{} ({})", stats.most_frequent_word, stats.most_frequent_word_count),
        ),
        ("Longest Word", stats.longest_word.clone()),
    ]
}

/// Comma-separated report with header row
pub fn to_delimited_report(stats: &TextStatistics) -> String {
    to_delimited_report_with(stats, ReportFormat::default())
}

/// Report using the delimiter from `format`
pub fn to_delimited_report_with(stats: &TextStatistics, format: ReportFormat) -> String {
    let delimiter = format.delimiter.to_string();

    std::iter::once(REPORT_HEADER.join(delimiter.as_str()))
        .chain(
            report_rows(stats)
                .into_iter()
                .map(|(metric, value)| format!("{}{}{}", metric, delimiter, value)),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the report to `dir/text-analysis-<timestamp>.csv` and return its path
pub fn save_report(
    stats: &TextStatistics,
    format: ReportFormat,
    dir: impl AsRef<Path>,
) -> Result<PathBuf, ExportError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let filename = format!(
        "text-analysis-{}.{}",
        Utc::now().format("%Y%m%dT%H%M%S%3fZ"),
        REPORT_EXTENSION
    );
    let path = dir.join(filename);

    std::fs::write(&path, to_delimited_report_with(stats, format)).map_err(|source| {
        ExportError::Write {
            path: path.clone(),
            source,
        }
    })?;

    info!(path = %path.display(), "report exported");
    Ok(path)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metrics::analyze;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_layout() {
        let report = to_delimited_report(&analyze("The quick brown fox. The end."));
        assert_eq!(
            report,
            "Metric,Value\n\
             Word Count,6\n\
             Total Characters,29\n\
             Characters (no spaces),24\n\
             Sentences,2\n\
             Paragraphs,1\n\
             Most Frequent Word,the (2)\n\
             Longest Word,quick"
        );
    }

    #[test]
    fn test_empty_report_uses_sentinel() {
        let report = to_delimited_report(&TextStatistics::empty());
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[6], "Most Frequent Word,N/A (0)");
        assert_eq!(lines[7], "Longest Word,N/A");
    }

    #[test]
    fn test_custom_delimiter() {
        let report = to_delimited_report_with(&analyze("hi"), ReportFormat { delimiter: '\t' });
        assert!(report.starts_with("Metric\tValue\nWord Count\t1\n"));
    }

    #[test]
    fn test_save_report_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("reports");
        let stats = analyze("Export me.");

        let path = save_report(&stats, ReportFormat::default(), &target).unwrap();

        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("csv"));
        assert!(path.starts_with(&target));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), to_delimited_report(&stats));
    }

    #[test]
    fn test_save_report_into_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();

        let err = save_report(&TextStatistics::empty(), ReportFormat::default(), &blocker).unwrap_err();
        assert!(matches!(err, ExportError::CreateDir { .. }));
    }
}
