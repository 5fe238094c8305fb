//! Distinctive-term scoring between sentiment groups.
//!
//! Each review is its own document in one TF-IDF space shared by both groups.
//! Per-group mean weights are compared by difference:
//!
//! - `positive[t] = positive_avg[t] - negative_avg[t]`
//! - `negative[t] = -positive[t]`
//!
//! Only positive differences are reported, so a term used at the same rate in
//! both groups (a product name, "game") drops out of both lists while
//! sentiment-specific phrases surface in exactly one.

use std::{cmp::Ordering, fmt};

use serde::Serialize;
use verdict_config::DistinctiveSettings;
use verdict_text::{TokenSequence, display_phrase};

use crate::{AnalysisError, FlatRecord, Sentiment, TfIdfVectorizer, ngram::SUPPORTED_NGRAM_SIZES};

/// Options for distinctive-term scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistinctiveOptions {
    /// Inclusive n-gram size range; bounds must be 2 or 3.
    pub ngram_range: (usize, usize),
    /// Terms reported per group.
    pub top_n: usize,
    /// Minimum number of documents a term must occur in.
    pub min_df: usize,
    /// Vocabulary cap; `None` keeps every term.
    pub max_features: Option<usize>,
    /// Groups smaller than this mark the result low confidence.
    pub min_group_documents: usize,
}

impl Default for DistinctiveOptions {
    fn default() -> Self {
        Self::from(&DistinctiveSettings::default())
    }
}

impl From<&DistinctiveSettings> for DistinctiveOptions {
    fn from(settings: &DistinctiveSettings) -> Self {
        Self {
            ngram_range: settings.ngram_range,
            top_n: settings.top_n,
            min_df: settings.min_df,
            max_features: (settings.max_features > 0).then_some(settings.max_features),
            min_group_documents: settings.min_group_documents,
        }
    }
}

impl DistinctiveOptions {
    /// Creates options with the given range and list length, no vocabulary
    /// limits and no confidence threshold.
    pub fn new(ngram_range: (usize, usize), top_n: usize) -> Self {
        Self {
            ngram_range,
            top_n,
            min_df: 1,
            max_features: None,
            min_group_documents: 0,
        }
    }

    /// Checks the n-gram range.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let (min, max) = self.ngram_range;
        if SUPPORTED_NGRAM_SIZES.contains(&min) && SUPPORTED_NGRAM_SIZES.contains(&max) && min <= max
        {
            Ok(())
        } else {
            Err(AnalysisError::InvalidNgramRange { min, max })
        }
    }

    /// Returns true if the range mixes bigrams and trigrams.
    pub fn mixed_lengths(&self) -> bool {
        self.ngram_range.0 != self.ngram_range.1
    }
}

/// How far a distinctiveness result can be trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "level", content = "reason", rename_all = "lowercase")]
pub enum Confidence {
    /// Both groups are large enough to compare.
    Normal,
    /// Scores lack a proper baseline.
    Low(String),
}

impl Confidence {
    /// Returns true for low confidence.
    pub fn is_low(&self) -> bool {
        matches!(self, Self::Low(_))
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Low(reason) => write!(f, "low ({reason})"),
        }
    }
}

/// A term with its distinctiveness score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredTerm {
    /// 1-based rank within its group.
    pub rank: usize,
    /// Vectorizer term (space-joined tokens).
    pub term: String,
    /// Display form.
    pub phrase: String,
    /// Distinctiveness; always greater than zero.
    pub score: f64,
}

/// Mean term weights of both groups over a shared vocabulary.
///
/// Holds every term, including those with zero or negative distinctiveness.
#[derive(Debug, Clone, Default)]
pub struct GroupComparison {
    /// Vocabulary, sorted.
    terms: Vec<String>,
    /// Mean weight per term over positive documents.
    positive_avg: Vec<f64>,
    /// Mean weight per term over negative documents.
    negative_avg: Vec<f64>,
    /// Positive documents.
    positive_documents: usize,
    /// Negative documents.
    negative_documents: usize,
}

impl GroupComparison {
    /// Vectorizes both groups together and averages each group's weights.
    ///
    /// Empty token sequences are not documents.
    pub fn build(
        positive: &[TokenSequence],
        negative: &[TokenSequence],
        vectorizer: &TfIdfVectorizer,
    ) -> Self {
        let positive_docs = documents(positive);
        let negative_docs = documents(negative);
        let split = positive_docs.len();
        let total = split + negative_docs.len();

        let mut all = positive_docs;
        all.extend(negative_docs);
        let matrix = vectorizer.fit_transform(&all);

        Self {
            terms: matrix.vocabulary().to_vec(),
            positive_avg: matrix.column_means(0..split),
            negative_avg: matrix.column_means(split..total),
            positive_documents: split,
            negative_documents: total - split,
        }
    }

    /// Returns the vocabulary.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Returns the document count of a group.
    pub fn documents(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive_documents,
            Sentiment::Negative => self.negative_documents,
        }
    }

    /// Returns the signed distinctiveness of the term at `index` for a group.
    fn score_at(&self, index: usize, sentiment: Sentiment) -> f64 {
        let positive = self.positive_avg[index] - self.negative_avg[index];
        match sentiment {
            Sentiment::Positive => positive,
            Sentiment::Negative => -positive,
        }
    }

    /// Returns the signed distinctiveness of a term for a group.
    pub fn score(&self, term: &str, sentiment: Sentiment) -> Option<f64> {
        self.terms
            .binary_search_by(|t| t.as_str().cmp(term))
            .ok()
            .map(|i| self.score_at(i, sentiment))
    }

    /// Returns the `top_n` terms with positive distinctiveness for a group,
    /// highest first, ties by term.
    pub fn ranked(&self, sentiment: Sentiment, top_n: usize) -> Vec<ScoredTerm> {
        if self.documents(sentiment) == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(usize, f64)> = (0..self.terms.len())
            .map(|i| (i, self.score_at(i, sentiment)))
            .filter(|&(_, score)| score > 0.0)
            .collect();

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| self.terms[a.0].cmp(&self.terms[b.0]))
        });
        scored.truncate(top_n);

        scored
            .into_iter()
            .enumerate()
            .map(|(rank, (i, score))| {
                let term = self.terms[i].clone();
                let tokens: Vec<&str> = term.split(' ').collect();
                ScoredTerm {
                    rank: rank + 1,
                    phrase: display_phrase(&tokens),
                    term,
                    score,
                }
            })
            .collect()
    }
}

/// Space-joined documents, skipping empty sequences.
fn documents(sequences: &[TokenSequence]) -> Vec<String> {
    sequences
        .iter()
        .filter(|s| !s.is_empty())
        .map(TokenSequence::joined)
        .collect()
}

/// Distinctive terms for both sentiment groups of one language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistinctivenessReport {
    /// N-gram size range of the terms.
    pub ngram_range: (usize, usize),
    /// True when bigrams and trigrams were ranked together.
    pub mixed_lengths: bool,
    /// Non-empty positive documents.
    pub positive_documents: usize,
    /// Non-empty negative documents.
    pub negative_documents: usize,
    /// Terms in the shared vocabulary.
    pub vocabulary_size: usize,
    /// Trust level of the scores.
    pub confidence: Confidence,
    /// Terms distinctive of positive reviews.
    pub positive: Vec<ScoredTerm>,
    /// Terms distinctive of negative reviews.
    pub negative: Vec<ScoredTerm>,
}

impl DistinctivenessReport {
    /// Returns the terms of one group.
    pub fn terms(&self, sentiment: Sentiment) -> &[ScoredTerm] {
        match sentiment {
            Sentiment::Positive => &self.positive,
            Sentiment::Negative => &self.negative,
        }
    }

    /// Returns both lists as flat records grouped `positive` / `negative`.
    pub fn flat_records(&self) -> Vec<FlatRecord> {
        [Sentiment::Positive, Sentiment::Negative]
            .into_iter()
            .flat_map(|sentiment| {
                self.terms(sentiment).iter().map(move |t| FlatRecord {
                    group: sentiment.to_string(),
                    rank: t.rank,
                    term: t.phrase.clone(),
                    count: None,
                    percentage: None,
                    score: Some(t.score),
                })
            })
            .collect()
    }
}

/// Scores terms that separate positive reviews from negative ones.
///
/// A group without documents gets an empty list. With only one group present,
/// its terms are scored against a zero baseline (their plain mean weight) and
/// the report is marked low confidence. Groups smaller than
/// `min_group_documents` are marked low confidence as well.
pub fn score_distinctive_terms(
    positive: &[TokenSequence],
    negative: &[TokenSequence],
    options: &DistinctiveOptions,
) -> Result<DistinctivenessReport, AnalysisError> {
    options.validate()?;
    if options.mixed_lengths() {
        tracing::warn!(
            min = options.ngram_range.0,
            max = options.ngram_range.1,
            "mixing bigrams and trigrams in one ranking; scores are not directly comparable"
        );
    }

    let vectorizer = TfIdfVectorizer::new(options.ngram_range)
        .with_min_df(options.min_df)
        .with_max_features(options.max_features);
    let comparison = GroupComparison::build(positive, negative, &vectorizer);

    let positive_documents = comparison.documents(Sentiment::Positive);
    let negative_documents = comparison.documents(Sentiment::Negative);
    tracing::debug!(
        positive_documents,
        negative_documents,
        vocabulary = comparison.terms().len(),
        "vectorized review documents"
    );

    let confidence = assess_confidence(
        positive_documents,
        negative_documents,
        options.min_group_documents,
    );
    if let Confidence::Low(ref reason) = confidence {
        tracing::warn!(reason = reason.as_str(), "distinctive terms have low confidence");
    }

    Ok(DistinctivenessReport {
        ngram_range: options.ngram_range,
        mixed_lengths: options.mixed_lengths(),
        positive_documents,
        negative_documents,
        vocabulary_size: comparison.terms().len(),
        confidence,
        positive: comparison.ranked(Sentiment::Positive, options.top_n),
        negative: comparison.ranked(Sentiment::Negative, options.top_n),
    })
}

/// Decides the confidence level from group sizes.
fn assess_confidence(positive: usize, negative: usize, min_group_documents: usize) -> Confidence {
    match (positive, negative) {
        (0, 0) => Confidence::Low("no reviews with usable text".to_string()),
        (_, 0) => Confidence::Low("no negative reviews to compare against".to_string()),
        (0, _) => Confidence::Low("no positive reviews to compare against".to_string()),
        (p, n) if p.min(n) < min_group_documents => Confidence::Low(format!(
            "smallest group has {} reviews (minimum {min_group_documents})",
            p.min(n)
        )),
        _ => Confidence::Normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(text: &str) -> TokenSequence {
        TokenSequence::new(text.split_whitespace().map(str::to_string).collect())
    }

    fn seqs(texts: &[&str]) -> Vec<TokenSequence> {
        texts.iter().map(|t| seq(t)).collect()
    }

    fn bigrams(top_n: usize) -> DistinctiveOptions {
        DistinctiveOptions::new((2, 2), top_n)
    }

    fn terms(list: &[ScoredTerm]) -> Vec<&str> {
        list.iter().map(|t| t.term.as_str()).collect()
    }

    #[test]
    fn amazing_and_boring_game() {
        let positive = seqs(&[
            "amazing game really love",
            "amazing game great fun",
            "amazing game best purchase",
        ]);
        let negative = seqs(&[
            "boring game really slow",
            "boring game waste money",
            "boring game bad controls",
        ]);

        let report = score_distinctive_terms(&positive, &negative, &bigrams(50)).unwrap();

        assert_eq!(report.positive[0].term, "amazing game");
        assert_eq!(report.negative[0].term, "boring game");
        assert!(!terms(&report.positive).contains(&"boring game"));
        assert!(!terms(&report.negative).contains(&"amazing game"));

        // Nothing appears in both lists.
        for term in &report.positive {
            assert!(!terms(&report.negative).contains(&term.term.as_str()));
        }
        assert!(report.positive.iter().all(|t| t.score > 0.0));
        assert!(report.negative.iter().all(|t| t.score > 0.0));
        assert_eq!(report.confidence, Confidence::Normal);
    }

    #[test]
    fn scores_are_exactly_symmetric() {
        let positive = seqs(&["fun game great story", "great story", "fun combat"]);
        let negative = seqs(&["bad story fun game", "fun combat broken", "broken saves"]);
        let vectorizer = TfIdfVectorizer::new((2, 3));
        let comparison = GroupComparison::build(&positive, &negative, &vectorizer);

        assert!(!comparison.terms().is_empty());
        for term in comparison.terms() {
            let p = comparison.score(term, Sentiment::Positive).unwrap();
            let n = comparison.score(term, Sentiment::Negative).unwrap();
            assert_eq!(p, -n, "{term}");
        }
    }

    #[test]
    fn common_terms_are_suppressed() {
        // "valve game" has identical weight in every document of both groups.
        let positive = seqs(&["valve game", "valve game"]);
        let negative = seqs(&["valve game", "valve game"]);
        let comparison = GroupComparison::build(&positive, &negative, &TfIdfVectorizer::new((2, 2)));
        assert_eq!(comparison.score("valve game", Sentiment::Positive), Some(0.0));

        let report = score_distinctive_terms(&positive, &negative, &bigrams(50)).unwrap();
        assert!(report.positive.is_empty());
        assert!(report.negative.is_empty());
        assert_eq!(report.vocabulary_size, 1);
    }

    #[test]
    fn common_term_with_distinct_neighbours() {
        let positive = seqs(&["valve game solid fun", "valve game solid fun"]);
        let negative = seqs(&["valve game buggy mess", "valve game buggy mess"]);
        let report = score_distinctive_terms(&positive, &negative, &bigrams(50)).unwrap();

        assert!(!terms(&report.positive).contains(&"valve game"));
        assert!(!terms(&report.negative).contains(&"valve game"));
        assert!(terms(&report.positive).contains(&"solid fun"));
        assert!(terms(&report.negative).contains(&"buggy mess"));
    }

    #[test]
    fn exclusive_term_surfaces_in_one_list() {
        let positive = seqs(&["great soundtrack", "great soundtrack nice art", "nice art"]);
        let negative = seqs(&["nice art", "long grind"]);
        let report = score_distinctive_terms(&positive, &negative, &bigrams(50)).unwrap();

        let entry = report
            .positive
            .iter()
            .find(|t| t.term == "great soundtrack")
            .unwrap();
        assert!(entry.score > 0.0);
        assert!(!terms(&report.negative).contains(&"great soundtrack"));
        assert!(terms(&report.negative).contains(&"long grind"));
    }

    #[test]
    fn single_class_uses_plain_average() {
        let positive = seqs(&["great game", "great game", "fun story"]);
        let report = score_distinctive_terms(&positive, &[], &bigrams(50)).unwrap();

        assert!(report.negative.is_empty());
        assert_eq!(terms(&report.positive), vec!["great game", "fun story"]);
        // Unit-length single-term rows: mean weight equals document share.
        assert!((report.positive[0].score - 2.0 / 3.0).abs() < 1e-9);
        assert!(report.confidence.is_low());
    }

    #[test]
    fn only_negative_reviews() {
        let negative = seqs(&["crashes constantly", "crashes constantly"]);
        let report = score_distinctive_terms(&[], &negative, &bigrams(50)).unwrap();
        assert!(report.positive.is_empty());
        assert_eq!(terms(&report.negative), vec!["crashes constantly"]);
        assert!(report.confidence.is_low());
    }

    #[test]
    fn empty_inputs_give_empty_reports() {
        let report = score_distinctive_terms(&[], &[], &bigrams(50)).unwrap();
        assert!(report.positive.is_empty());
        assert!(report.negative.is_empty());
        assert_eq!(report.vocabulary_size, 0);

        // Sequences too short for any bigram collapse the vocabulary.
        let collapsed = score_distinctive_terms(
            &seqs(&["good", ""]),
            &seqs(&["bad"]),
            &bigrams(50),
        )
        .unwrap();
        assert_eq!(collapsed.positive_documents, 1);
        assert_eq!(collapsed.vocabulary_size, 0);
        assert!(collapsed.positive.is_empty());
        assert!(collapsed.negative.is_empty());
    }

    #[test]
    fn top_n_and_tie_order() {
        let positive = seqs(&["zeta one", "alpha two", "mid three"]);
        let negative = seqs(&["other words"]);
        let report = score_distinctive_terms(&positive, &negative, &bigrams(2)).unwrap();

        assert_eq!(terms(&report.positive), vec!["alpha two", "mid three"]);
        assert_eq!(report.positive[0].rank, 1);
        assert_eq!(report.positive[1].rank, 2);
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        for range in [(1, 2), (2, 4), (3, 2), (0, 0)] {
            let options = DistinctiveOptions::new(range, 10);
            assert!(matches!(
                score_distinctive_terms(&[], &[], &options),
                Err(AnalysisError::InvalidNgramRange { .. })
            ));
        }
    }

    #[test]
    fn mixed_range_is_flagged() {
        let positive = seqs(&["really fun game"]);
        let negative = seqs(&["really dull game"]);
        let report =
            score_distinctive_terms(&positive, &negative, &DistinctiveOptions::new((2, 3), 10))
                .unwrap();
        assert!(report.mixed_lengths);
        assert!(terms(&report.positive).contains(&"really fun game"));
    }

    #[test]
    fn small_groups_are_low_confidence() {
        let positive = seqs(&["fun game"; 6]);
        let negative = seqs(&["dull game", "dull game"]);
        let mut options = bigrams(10);
        options.min_group_documents = 5;

        let report = score_distinctive_terms(&positive, &negative, &options).unwrap();
        assert_eq!(
            report.confidence,
            Confidence::Low("smallest group has 2 reviews (minimum 5)".to_string())
        );
    }

    #[test]
    fn logographic_terms_display_without_spaces() {
        let positive = seqs(&["非常 好玩", "非常 好玩"]);
        let negative = seqs(&["特别 无聊"]);
        let report = score_distinctive_terms(&positive, &negative, &bigrams(10)).unwrap();
        assert_eq!(report.positive[0].term, "非常 好玩");
        assert_eq!(report.positive[0].phrase, "非常好玩");
    }

    #[test]
    fn flat_records_cover_both_groups() {
        let positive = seqs(&["amazing game"]);
        let negative = seqs(&["boring game"]);
        let report = score_distinctive_terms(&positive, &negative, &bigrams(10)).unwrap();
        let records = report.flat_records();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].group, "positive");
        assert_eq!(records[0].term, "amazing game");
        assert_eq!(records[1].group, "negative");
        assert!(records.iter().all(|r| r.score.is_some() && r.count.is_none()));
    }

    #[test]
    fn options_from_settings() {
        let mut settings = DistinctiveSettings::default();
        settings.max_features = 0;
        let options = DistinctiveOptions::from(&settings);
        assert_eq!(options.max_features, None);
        assert_eq!(options.min_df, settings.min_df);
        assert_eq!(DistinctiveOptions::default().max_features, Some(5000));
    }

    #[test]
    fn confidence_serializes_with_reason() {
        let low = serde_json::to_value(Confidence::Low("tiny".into())).unwrap();
        assert_eq!(low["level"], "low");
        assert_eq!(low["reason"], "tiny");
        let normal = serde_json::to_value(Confidence::Normal).unwrap();
        assert_eq!(normal["level"], "normal");
    }
}
