//! TF-IDF vectorization of review documents.
//!
//! Every document is a space-joined token sequence. Its terms are the n-grams
//! of the configured sizes, built by splitting on whitespace so logographic
//! words keep their boundaries. Degenerate windows are skipped here too.
//!
//! Weights follow the smoothed scheme: raw term count times
//! `ln((1 + n) / (1 + df)) + 1`, with each document vector L2-normalized.

use std::{collections::HashMap, ops::Range};

use crate::ngram::is_degenerate;

/// Builds TF-IDF vectors over a document set.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    /// Inclusive n-gram size range.
    ngram_range: (usize, usize),
    /// Minimum number of documents a term must occur in.
    min_df: usize,
    /// Vocabulary cap by total corpus frequency.
    max_features: Option<usize>,
}

impl TfIdfVectorizer {
    /// Creates a vectorizer for n-grams of sizes `ngram_range.0..=ngram_range.1`.
    pub fn new(ngram_range: (usize, usize)) -> Self {
        Self {
            ngram_range,
            min_df: 1,
            max_features: None,
        }
    }

    /// Sets the minimum document frequency. Values below 1 act as 1.
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df.max(1);
        self
    }

    /// Caps the vocabulary to the most frequent terms.
    pub fn with_max_features(mut self, max_features: Option<usize>) -> Self {
        self.max_features = max_features;
        self
    }

    /// Extracts the terms of one document, in order, with repeats.
    pub fn terms(&self, document: &str) -> Vec<String> {
        let tokens: Vec<&str> = document.split_whitespace().collect();
        let (min, max) = self.ngram_range;
        let mut terms = Vec::new();

        for n in min.max(1)..=max {
            if tokens.len() < n {
                break;
            }
            terms.extend(
                tokens
                    .windows(n)
                    .filter(|window| !is_degenerate(*window))
                    .map(|window| window.join(" ")),
            );
        }

        terms
    }

    /// Learns the vocabulary and IDF weights, then weights every document.
    ///
    /// An empty document set or a vocabulary that filters down to nothing
    /// gives an empty matrix.
    pub fn fit_transform(&self, documents: &[String]) -> WeightMatrix {
        let counts: Vec<HashMap<String, usize>> = documents
            .iter()
            .map(|doc| count_terms(self.terms(doc)))
            .collect();

        let vocabulary = self.select_vocabulary(&counts);
        if vocabulary.is_empty() {
            return WeightMatrix::empty(documents.len());
        }

        let index: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.as_str(), i))
            .collect();

        let mut df = vec![0usize; vocabulary.len()];
        for doc in &counts {
            for term in doc.keys() {
                if let Some(&i) = index.get(term.as_str()) {
                    df[i] += 1;
                }
            }
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let rows = counts
            .iter()
            .map(|doc| {
                let mut row: Vec<(usize, f64)> = doc
                    .iter()
                    .filter_map(|(term, &tf)| {
                        index
                            .get(term.as_str())
                            .map(|&i| (i, tf as f64 * idf[i]))
                    })
                    .collect();
                row.sort_by_key(|&(i, _)| i);
                l2_normalize(&mut row);
                row
            })
            .collect();

        WeightMatrix { vocabulary, rows }
    }

    /// Picks the vocabulary from per-document counts, sorted by term.
    fn select_vocabulary(&self, counts: &[HashMap<String, usize>]) -> Vec<String> {
        let mut df: HashMap<&str, usize> = HashMap::new();
        let mut total: HashMap<&str, usize> = HashMap::new();
        for doc in counts {
            for (term, &count) in doc {
                *df.entry(term.as_str()).or_insert(0) += 1;
                *total.entry(term.as_str()).or_insert(0) += count;
            }
        }

        let mut kept: Vec<(&str, usize)> = total
            .into_iter()
            .filter(|(term, _)| df.get(term).is_some_and(|&d| d >= self.min_df))
            .collect();

        if let Some(cap) = self.max_features
            && kept.len() > cap
        {
            kept.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            kept.truncate(cap);
        }

        let mut vocabulary: Vec<String> = kept.into_iter().map(|(t, _)| t.to_string()).collect();
        vocabulary.sort();
        vocabulary
    }
}

/// Counts term occurrences.
fn count_terms(terms: Vec<String>) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for term in terms {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

/// Scales a sparse vector to unit Euclidean length. Zero vectors are left alone.
fn l2_normalize(row: &mut [(usize, f64)]) {
    let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, w) in row.iter_mut() {
            *w /= norm;
        }
    }
}

/// Sparse TF-IDF weights, one row per document.
#[derive(Debug, Clone, Default)]
pub struct WeightMatrix {
    /// Terms sorted lexicographically; column `i` is `vocabulary[i]`.
    vocabulary: Vec<String>,
    /// Non-zero `(column, weight)` pairs per document, sorted by column.
    rows: Vec<Vec<(usize, f64)>>,
}

impl WeightMatrix {
    /// Returns a matrix with no vocabulary.
    fn empty(documents: usize) -> Self {
        Self {
            vocabulary: Vec::new(),
            rows: vec![Vec::new(); documents],
        }
    }

    /// Returns the vocabulary in column order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Returns the number of documents.
    #[cfg(test)]
    fn documents(&self) -> usize {
        self.rows.len()
    }

    /// Returns the weight of `term` in document `doc`, zero when absent.
    #[cfg(test)]
    fn weight(&self, doc: usize, term: &str) -> f64 {
        let Some(column) = self.column(term) else {
            return 0.0;
        };
        self.rows.get(doc).map_or(0.0, |row| {
            row.binary_search_by_key(&column, |&(i, _)| i)
                .map_or(0.0, |pos| row[pos].1)
        })
    }

    /// Returns the mean weight of every column over a range of documents.
    ///
    /// An empty range gives all zeros.
    pub fn column_means(&self, docs: Range<usize>) -> Vec<f64> {
        let mut sums = vec![0.0; self.vocabulary.len()];
        let count = docs.len();
        for row in self.rows.get(docs).unwrap_or_default() {
            for &(i, w) in row {
                sums[i] += w;
            }
        }
        if count > 0 {
            for sum in &mut sums {
                *sum /= count as f64;
            }
        }
        sums
    }

    /// Column of a term.
    #[cfg(test)]
    fn column(&self, term: &str) -> Option<usize> {
        self.vocabulary
            .binary_search_by(|t| t.as_str().cmp(term))
            .ok()
    }
}
