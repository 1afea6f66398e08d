//! Descriptive statistics record produced by the metrics engine

use serde::{Deserialize, Serialize};

use crate::NO_WORD_SENTINEL;

/// Counts and superlatives for one text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStatistics {
    /// Number of word tokens
    pub word_count: usize,
    /// Length in UTF-16 code units
    pub char_count: usize,
    /// Length in UTF-16 code units, whitespace removed
    pub char_count_no_spaces: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    /// Lowercased most frequent token, or "N/A"
    pub most_frequent_word: String,
    /// Occurrences of `most_frequent_word` (0 with the sentinel)
    pub most_frequent_word_count: usize,
    /// Longest token in original casing, or "N/A"
    pub longest_word: String,
}

impl TextStatistics {
    /// Record for text with nothing in it
    pub fn empty() -> Self {
        Self {
            word_count: 0,
            char_count: 0,
            char_count_no_spaces: 0,
            sentence_count: 0,
            paragraph_count: 0,
            most_frequent_word: NO_WORD_SENTINEL.to_string(),
            most_frequent_word_count: 0,
            longest_word: NO_WORD_SENTINEL.to_string(),
        }
    }
}

impl Default for TextStatistics {
    fn default() -> Self {
        Self::empty()
    }
}
