//! Integration tests for the dataset -> corpus -> analysis pipeline.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::fs;

use verdict_analysis::{
    AnalysisError, Confidence, Corpus, CorpusSummary, Dataset, DistinctiveOptions,
    ReviewCategory, Sentiment, rank, score_distinctive_terms,
};
use verdict_text::{LanguageTag, StopwordStore, Tokenizer};

const DATASET: &str = r#"{
    "metadata": {"app_id": 570},
    "reviews": [
        {"review": "Amazing game, really love it!!!", "language": "english", "voted_up": true},
        {"review": "An amazing game with great fun", "language": "english", "voted_up": true},
        {"review": "Amazing game. Best purchase in 2024", "language": "english", "voted_up": true},
        {"review": "Good good good good good", "language": "english", "voted_up": true},
        {"review": "Boring game, really slow", "language": "english", "voted_up": false},
        {"review": "<b>Boring game</b> waste of money", "language": "english", "voted_up": false},
        {"review": "boring game and bad controls https://example.com", "language": "english", "voted_up": false},
        {"review": "非常好玩的游戏", "language": "schinese", "voted_up": true},
        {"language": "english", "voted_up": true}
    ]
}"#;

fn load() -> Dataset {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reviews.json");
    fs::write(&path, DATASET).unwrap();
    Dataset::load(&path).unwrap()
}

fn corpus(dataset: &Dataset) -> Corpus {
    Corpus::build(&dataset.reviews, &Tokenizer::new(), &StopwordStore::new(), None)
}

#[test]
fn test_loads_and_partitions_dataset() {
    let dataset = load();
    assert_eq!(dataset.stats.loaded, 8);
    assert_eq!(dataset.stats.skipped, 1);

    let corpus = corpus(&dataset);
    assert_eq!(corpus.partition(&LanguageTag::English, Sentiment::Positive).len(), 4);
    assert_eq!(corpus.partition(&LanguageTag::English, Sentiment::Negative).len(), 3);
    assert_eq!(
        corpus.partition(&LanguageTag::SimplifiedChinese, Sentiment::Positive).len(),
        1
    );
}

#[test]
fn test_ranks_bigrams_without_spam() {
    let dataset = load();
    let corpus = corpus(&dataset);
    let positive = corpus.partition(&LanguageTag::English, Sentiment::Positive);

    let report = rank(positive, 2, 2, 10).unwrap();
    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].phrase, "amazing game");
    assert_eq!(report.entries[0].count, 3);
    assert!(!report.entries.iter().any(|e| e.phrase == "good good"));
}

#[test]
fn test_scores_distinctive_terms() {
    let dataset = load();
    let corpus = corpus(&dataset);
    let positive = corpus.partition(&LanguageTag::English, Sentiment::Positive);
    let negative = corpus.partition(&LanguageTag::English, Sentiment::Negative);

    let mut options = DistinctiveOptions::new((2, 2), 10);
    options.min_df = 2;
    let report = score_distinctive_terms(positive, negative, &options).unwrap();

    assert_eq!(report.positive[0].term, "amazing game");
    assert_eq!(report.negative[0].term, "boring game");
    assert_eq!(report.confidence, Confidence::Normal);
}

#[test]
fn test_default_options_flag_small_groups() {
    let dataset = load();
    let corpus = corpus(&dataset);
    let report = score_distinctive_terms(
        corpus.partition(&LanguageTag::English, Sentiment::Positive),
        corpus.partition(&LanguageTag::English, Sentiment::Negative),
        &DistinctiveOptions::default(),
    )
    .unwrap();
    assert!(report.confidence.is_low());
}

#[test]
fn test_rejects_unsupported_size() {
    let dataset = load();
    let corpus = corpus(&dataset);
    let positive = corpus.partition(&LanguageTag::English, Sentiment::Positive);
    assert!(matches!(
        rank(positive, 4, 1, 10),
        Err(AnalysisError::InvalidNgramSize { size: 4 })
    ));
}

#[test]
fn test_summarizes_dataset() {
    let dataset = load();
    let summary = CorpusSummary::from_reviews(&dataset.reviews);
    let english = summary.language(&LanguageTag::English).unwrap();
    assert_eq!(english.total, 7);
    assert_eq!(english.category, ReviewCategory::Mixed);
    assert_eq!(summary.total, 8);
}

#[test]
fn test_missing_dataset_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Dataset::load(&dir.path().join("missing.json"));
    assert!(matches!(result, Err(AnalysisError::ReadDataset { .. })));
}
