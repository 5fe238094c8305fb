//! N-gram extraction and frequency ranking.
//!
//! N-grams are sliding windows of 2 or 3 tokens. A window whose tokens are all
//! identical ("bad bad bad") is emphasis, not a phrase, and is never emitted.
//! The check is per window: a token repeated with other words in between still
//! pairs with each of its real neighbours.

use std::collections::HashMap;

use serde::Serialize;
use verdict_text::{TokenSequence, display_phrase};

use crate::{AnalysisError, FlatRecord};

/// Supported n-gram sizes.
pub const SUPPORTED_NGRAM_SIZES: [usize; 2] = [2, 3];

/// A window of consecutive tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NGram(Vec<String>);

impl NGram {
    /// Returns the tokens.
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Returns the display form: space-joined, or unseparated for
    /// logographic tokens.
    pub fn phrase(&self) -> String {
        display_phrase(&self.0)
    }
}

/// Returns true if every token in the window is the same.
pub(crate) fn is_degenerate<S: PartialEq>(window: &[S]) -> bool {
    window.windows(2).all(|pair| pair[0] == pair[1])
}

/// Builds the size-`k` sliding windows of a token sequence.
///
/// With `remove_repetitive`, windows whose tokens are all identical are
/// skipped. Fewer than `k` tokens, or `k == 0`, gives no n-grams.
pub fn generate_ngrams(tokens: &[String], k: usize, remove_repetitive: bool) -> Vec<NGram> {
    if k == 0 || tokens.len() < k {
        return Vec::new();
    }

    tokens
        .windows(k)
        .filter(|window| !(remove_repetitive && is_degenerate(*window)))
        .map(|window| NGram(window.to_vec()))
        .collect()
}

/// Checks that an n-gram size is supported.
pub fn validate_ngram_size(k: usize) -> Result<(), AnalysisError> {
    if SUPPORTED_NGRAM_SIZES.contains(&k) {
        Ok(())
    } else {
        Err(AnalysisError::InvalidNgramSize { size: k })
    }
}

/// A ranked n-gram with its corpus frequency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedNgram {
    /// Tokens of the n-gram.
    pub ngram: NGram,
    /// Display form.
    pub phrase: String,
    /// Occurrences across the partition.
    pub count: usize,
    /// `count` as a share of all n-gram occurrences in the partition, in percent.
    pub percentage: f64,
}

/// Ranked n-grams for one corpus partition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NgramReport {
    /// Tokens per n-gram.
    pub size: usize,
    /// Token sequences in the partition.
    pub documents: usize,
    /// N-gram occurrences after the repetition guard. Percentage denominator.
    pub total_ngrams: usize,
    /// Distinct n-grams before frequency filtering.
    pub unique_ngrams: usize,
    /// Ranked entries, most frequent first.
    pub entries: Vec<RankedNgram>,
}

impl NgramReport {
    /// Returns an empty report.
    #[cfg(test)]
    fn empty(size: usize) -> Self {
        Self {
            size,
            documents: 0,
            total_ngrams: 0,
            unique_ngrams: 0,
            entries: Vec::new(),
        }
    }

    /// Returns the entries as flat records under `group`.
    pub fn flat_records(&self, group: &str) -> Vec<FlatRecord> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| FlatRecord {
                group: group.to_string(),
                rank: i + 1,
                term: entry.phrase.clone(),
                count: Some(entry.count),
                percentage: Some(entry.percentage),
                score: None,
            })
            .collect()
    }
}

/// Counts and ranks n-grams across a corpus partition.
///
/// N-grams with fewer than `min_frequency` occurrences are dropped. The rest
/// are sorted by count, most frequent first, with ties in first-seen order,
/// and truncated to `top_n`. Percentages use the total number of n-gram
/// occurrences in the partition as denominator.
pub fn rank(
    partition: &[TokenSequence],
    k: usize,
    min_frequency: usize,
    top_n: usize,
) -> Result<NgramReport, AnalysisError> {
    validate_ngram_size(k)?;

    // Arena of (ngram, count) in first-seen order, indexed by the map.
    let mut counted: Vec<(NGram, usize)> = Vec::new();
    let mut index: HashMap<NGram, usize> = HashMap::new();
    let mut total_ngrams = 0;

    for sequence in partition {
        for ngram in generate_ngrams(sequence.tokens(), k, true) {
            total_ngrams += 1;
            if let Some(&slot) = index.get(&ngram) {
                counted[slot].1 += 1;
            } else {
                index.insert(ngram.clone(), counted.len());
                counted.push((ngram, 1));
            }
        }
    }

    let unique_ngrams = counted.len();
    counted.retain(|(_, count)| *count >= min_frequency);
    // Stable sort keeps first-seen order among equal counts.
    counted.sort_by(|a, b| b.1.cmp(&a.1));
    counted.truncate(top_n);

    let entries = counted
        .into_iter()
        .map(|(ngram, count)| RankedNgram {
            phrase: ngram.phrase(),
            ngram,
            count,
            percentage: percentage(count, total_ngrams),
        })
        .collect();

    tracing::debug!(
        size = k,
        documents = partition.len(),
        total_ngrams,
        unique_ngrams,
        "ranked n-grams"
    );

    Ok(NgramReport {
        size: k,
        documents: partition.len(),
        total_ngrams,
        unique_ngrams,
        entries,
    })
}

/// Returns `count / total * 100`, or 0 for an empty total.
fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    fn seq(words: &[&str]) -> TokenSequence {
        TokenSequence::new(tokens(words))
    }

    fn as_strs(ngrams: &[NGram]) -> Vec<Vec<&str>> {
        ngrams
            .iter()
            .map(|n| n.tokens().iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn sliding_windows() {
        let ngrams = generate_ngrams(&tokens(&["really", "fun", "game"]), 2, true);
        assert_eq!(
            as_strs(&ngrams),
            vec![vec!["really", "fun"], vec!["fun", "game"]]
        );

        let trigrams = generate_ngrams(&tokens(&["really", "fun", "game"]), 3, true);
        assert_eq!(as_strs(&trigrams), vec![vec!["really", "fun", "game"]]);
    }

    #[test]
    fn short_sequences_give_nothing() {
        assert!(generate_ngrams(&tokens(&["alone"]), 2, true).is_empty());
        assert!(generate_ngrams(&tokens(&["two", "words"]), 3, true).is_empty());
        assert!(generate_ngrams(&[], 2, true).is_empty());
        assert!(generate_ngrams(&tokens(&["a", "b"]), 0, true).is_empty());
    }

    #[test]
    fn repetition_guard_for_all_run_lengths() {
        for k in [2, 3] {
            for run in [2, 3, 10] {
                let repeated = vec!["bad".to_string(); run];
                let ngrams = generate_ngrams(&repeated, k, true);
                assert!(ngrams.is_empty(), "k={k} run={run}");

                // The run next to real words only pairs with those words.
                let mut text = tokens(&["really"]);
                text.extend(repeated);
                text.push("game".to_string());
                for ngram in generate_ngrams(&text, k, true) {
                    assert!(!is_degenerate(ngram.tokens()), "k={k} run={run}");
                }
            }
        }
    }

    #[test]
    fn repetition_guard_can_be_disabled() {
        let ngrams = generate_ngrams(&tokens(&["bad", "bad", "bad"]), 2, false);
        assert_eq!(ngrams.len(), 2);
    }

    #[test]
    fn non_consecutive_repeats_are_kept() {
        let ngrams = generate_ngrams(&tokens(&["A", "X", "A", "Y", "A", "Z"]), 2, true);
        assert_eq!(
            as_strs(&ngrams),
            vec![
                vec!["A", "X"],
                vec!["X", "A"],
                vec!["A", "Y"],
                vec!["Y", "A"],
                vec!["A", "Z"],
            ]
        );
    }

    #[test]
    fn partial_repeats_in_trigrams_are_kept() {
        let ngrams = generate_ngrams(&tokens(&["so", "so", "good"]), 3, true);
        assert_eq!(as_strs(&ngrams), vec![vec!["so", "so", "good"]]);
    }

    #[test]
    fn rank_rejects_unsupported_sizes() {
        for k in [0, 1, 4] {
            assert!(matches!(
                rank(&[], k, 1, 10),
                Err(AnalysisError::InvalidNgramSize { size }) if size == k
            ));
        }
    }

    #[test]
    fn empty_partition_gives_empty_report() {
        let report = rank(&[], 2, 1, 10).unwrap();
        assert_eq!(report, NgramReport::empty(2));

        let blank = rank(&[TokenSequence::default()], 2, 1, 10).unwrap();
        assert_eq!(blank.documents, 1);
        assert!(blank.entries.is_empty());
    }

    #[test]
    fn counts_are_order_sensitive() {
        let partition = vec![seq(&["game", "good"]), seq(&["good", "game"])];
        let report = rank(&partition, 2, 1, 10).unwrap();
        assert_eq!(report.entries.len(), 2);
        assert!(report.entries.iter().all(|e| e.count == 1));
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let partition = vec![
            seq(&["slow", "start"]),
            seq(&["great", "story"]),
            seq(&["great", "story"]),
            seq(&["slow", "start"]),
            seq(&["nice", "music"]),
        ];
        let report = rank(&partition, 2, 1, 10).unwrap();
        let phrases: Vec<_> = report.entries.iter().map(|e| e.phrase.as_str()).collect();
        assert_eq!(phrases, vec!["slow start", "great story", "nice music"]);
    }

    #[test]
    fn min_frequency_and_top_n() {
        let partition = vec![
            seq(&["fun", "combat", "fun", "combat"]),
            seq(&["fun", "combat", "boring", "story"]),
        ];
        let report = rank(&partition, 2, 2, 10).unwrap();

        // fun combat x3, combat fun x1, combat boring x1, boring story x1
        assert_eq!(report.total_ngrams, 6);
        assert_eq!(report.unique_ngrams, 4);
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].phrase, "fun combat");
        assert_eq!(report.entries[0].count, 3);
        assert!((report.entries[0].percentage - 50.0).abs() < 1e-9);

        let capped = rank(&partition, 2, 1, 2).unwrap();
        assert_eq!(capped.entries.len(), 2);
    }

    #[test]
    fn frequency_against_total_occurrences() {
        // 100 reviews, 20 of which contain "great game" once.
        let mut partition = Vec::new();
        for i in 0..100 {
            if i % 5 == 0 {
                partition.push(seq(&["great", "game"]));
            } else {
                let a = format!("word{i}");
                let b = format!("other{i}");
                partition.push(seq(&[a.as_str(), b.as_str()]));
            }
        }

        let report = rank(&partition, 2, 10, 10).unwrap();

        assert_eq!(report.documents, 100);
        assert_eq!(report.total_ngrams, 100);
        assert_eq!(report.entries.len(), 1);
        let entry = &report.entries[0];
        assert_eq!(entry.ngram.tokens(), ["great", "game"]);
        assert_eq!(entry.count, 20);
        assert!((entry.percentage - 20.0).abs() < 1e-9);
    }

    #[test]
    fn repetition_does_not_inflate_counts() {
        let partition = vec![
            seq(&["bad", "bad", "bad", "bad", "game"]),
            seq(&["bad", "game"]),
        ];
        let report = rank(&partition, 2, 1, 10).unwrap();
        assert_eq!(report.total_ngrams, 2);
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].phrase, "bad game");
        assert_eq!(report.entries[0].count, 2);
    }

    #[test]
    fn logographic_phrases_are_unseparated() {
        let partition = vec![seq(&["非常", "好玩"]), seq(&["非常", "好玩"])];
        let report = rank(&partition, 2, 2, 10).unwrap();
        assert_eq!(report.entries[0].phrase, "非常好玩");
    }

    #[test]
    fn flat_records_are_ranked() {
        let partition = vec![seq(&["great", "game"]), seq(&["great", "game", "ever"])];
        let report = rank(&partition, 2, 1, 10).unwrap();
        let records = report.flat_records("english/positive");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].group, "english/positive");
        assert_eq!(records[0].rank, 1);
        assert_eq!(records[0].term, "great game");
        assert_eq!(records[0].count, Some(2));
        assert_eq!(records[1].rank, 2);
        assert!(records[1].score.is_none());
    }
}
