//! Metrics Engine: counts, frequency and superlatives for raw text
//!
//! Pure and synchronous; cheap enough to run on every keystroke.
//!
//! Sentence splitting is a punctuation heuristic. Abbreviations ("Dr. Smith"),
//! numbers followed by a dot ("in 2024. ") and quoted punctuation all end a
//! sentence.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::TextStatistics;

lazy_static! {
    // =========================================================================
    // Paragraphs: one or more newlines
    // =========================================================================
    static ref RE_PARAGRAPH_BREAK: Regex = Regex::new(r"\n+").unwrap();

    // =========================================================================
    // Sentences: run of . ! ? followed by whitespace or end of text
    // =========================================================================
    static ref RE_SENTENCE_BREAK: Regex = Regex::new(r"[.!?]+(?:\s+|$)").unwrap();

    // =========================================================================
    // Words: letters, digits, underscore or hyphen between word boundaries
    // =========================================================================
    static ref RE_WORD: Regex = Regex::new(r"\b[\w-]+\b").unwrap();
}

/// Text statistics engine
#[derive(Debug, Default, Clone, Copy)]
pub struct MetricsEngine;

impl MetricsEngine {
    /// Create new engine
    pub fn new() -> Self {
        Self
    }

    /// Compute the full statistics record for `text`
    pub fn analyze(&self, text: &str) -> TextStatistics {
        if text.is_empty() {
            return TextStatistics::empty();
        }

        let char_count = utf16_len(text);
        let char_count_no_spaces = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(char::len_utf16)
            .sum();

        let paragraph_count = count_segments(&RE_PARAGRAPH_BREAK, text);
        let sentence_count = count_segments(&RE_SENTENCE_BREAK, text);

        let words = tokenize(text);
        let mut stats = TextStatistics {
            word_count: words.len(),
            char_count,
            char_count_no_spaces,
            sentence_count,
            paragraph_count,
            ..TextStatistics::empty()
        };

        if let Some(tally) = WordTally::from_words(&words) {
            stats.most_frequent_word = tally.most_frequent;
            stats.most_frequent_word_count = tally.most_frequent_count;
            stats.longest_word = tally.longest.to_string();
        }

        stats
    }
}

/// Analyze `text` with the default engine
pub fn analyze(text: &str) -> TextStatistics {
    MetricsEngine.analyze(text)
}

/// Word tokens in original casing, in order of appearance
pub fn tokenize(text: &str) -> Vec<&str> {
    RE_WORD.find_iter(text).map(|m| m.as_str()).collect()
}

/// Running frequency and length winners over a token stream
struct WordTally<'a> {
    most_frequent: String,
    most_frequent_count: usize,
    longest: &'a str,
}

impl<'a> WordTally<'a> {
    /// Single pass; first token to reach a count or length keeps it on ties
    fn from_words(words: &[&'a str]) -> Option<Self> {
        let (&first, _) = words.split_first()?;

        let mut frequencies: HashMap<String, usize> = HashMap::new();
        let mut most_frequent = String::new();
        let mut most_frequent_count = 0;
        let mut longest = first;
        let mut longest_len = utf16_len(first);

        for &word in words {
            let key = word.to_lowercase();
            let count = frequencies.entry(key.clone()).or_insert(0);
            *count += 1;

            if *count > most_frequent_count {
                most_frequent_count = *count;
                most_frequent = key;
            }

            let len = utf16_len(word);
            if len > longest_len {
                longest = word;
                longest_len = len;
            }
        }

        Some(Self {
            most_frequent,
            most_frequent_count,
            longest,
        })
    }
}

/// Segments between separator matches that hold something besides whitespace
fn count_segments(separator: &Regex, text: &str) -> usize {
    separator
        .split(text)
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

// =============================================================================
// TESTS
// =============================================================================
