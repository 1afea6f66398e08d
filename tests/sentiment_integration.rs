//! Integration tests for the sentiment classifier

use textlens::core::{score, ClassifierConfig, SentimentClassifier};
use textlens::types::{ReasonCode, SentimentLabel};
use textlens::{BASE_CONFIDENCE, CONFIDENCE_CAP};

fn immediate() -> SentimentClassifier {
    SentimentClassifier::with_config(ClassifierConfig::immediate())
}

#[tokio::test]
async fn test_neutral_without_keywords() {
    let verdict = immediate().classify("The book is on the table.").await.unwrap();
    assert_eq!(verdict.label, SentimentLabel::Neutral);
    assert_eq!(verdict.confidence, 0.5);
}

#[tokio::test]
async fn test_positive_majority() {
    let verdict = immediate()
        .classify("I love this excellent library, even if the docs are poor.")
        .await
        .unwrap();
    assert_eq!(verdict.label, SentimentLabel::Positive);
    assert!(verdict.confidence > 0.5);
    assert_eq!(verdict.explanation, "Found 2 positive and 1 negative keyword(s).");
}

/// Label follows the sign of pos - neg and confidence stays in range
#[test]
fn test_label_and_confidence_bounds() {
    let samples = [
        "",
        "good",
        "bad",
        "good bad",
        "good good bad",
        "bad bad bad good",
        "happy happy happy happy happy happy",
        "nothing relevant here",
    ];
    for text in samples {
        let v = score(text);
        let expected = match v.positive_count.cmp(&v.negative_count) {
            std::cmp::Ordering::Greater => SentimentLabel::Positive,
            std::cmp::Ordering::Less => SentimentLabel::Negative,
            std::cmp::Ordering::Equal => SentimentLabel::Neutral,
        };
        assert_eq!(v.label, expected, "label for {:?}", text);
        assert!(v.confidence >= BASE_CONFIDENCE && v.confidence <= CONFIDENCE_CAP);

        let matched = v.positive_count + v.negative_count;
        if matched == 0 {
            assert_eq!(v.confidence, BASE_CONFIDENCE);
            assert_eq!(v.reason, ReasonCode::S001_NEUTRAL_NO_KEYWORDS);
        } else if v.positive_count != v.negative_count {
            assert!(v.confidence > BASE_CONFIDENCE, "confidence for {:?}", text);
        }
    }
}

#[test]
fn test_case_and_punctuation_ignored() {
    let verdict = score("GREAT!!! Great... great?");
    assert_eq!(verdict.positive_count, 3);
    assert_eq!(verdict.confidence, 0.99);
}

#[test]
fn test_no_negation_handling() {
    // Bag of words: "not good" still counts "good"
    let verdict = score("This is not good.");
    assert_eq!(verdict.label, SentimentLabel::Positive);
}

/// Other work proceeds while a classification is outstanding
#[tokio::test]
async fn test_classify_does_not_block_runtime() {
    let classifier = SentimentClassifier::with_config(ClassifierConfig::with_delay_ms(200));
    let pending = tokio::spawn(async move { classifier.classify("awful").await });

    let side_work = tokio::spawn(async { 1 + 1 });
    assert_eq!(side_work.await.unwrap(), 2);
    assert!(!pending.is_finished());

    let verdict = pending.await.unwrap().unwrap();
    assert_eq!(verdict.label, SentimentLabel::Negative);
}
