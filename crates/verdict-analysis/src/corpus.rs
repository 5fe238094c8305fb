//! Tokenized corpus partitioned by language and sentiment.

use std::collections::BTreeMap;

use verdict_text::{LanguageTag, StopwordStore, TokenSequence, Tokenizer};

use crate::{Review, Sentiment};

/// Key of one corpus partition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartitionKey {
    /// Review language.
    pub language: LanguageTag,
    /// Review sentiment.
    pub sentiment: Sentiment,
}

/// Token sequences grouped by (language, sentiment).
///
/// Built once per request and read-only afterwards. Every review contributes
/// one sequence, empty or not, so partition sizes match review counts.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Sequences per partition, in review order.
    partitions: BTreeMap<PartitionKey, Vec<TokenSequence>>,
}

impl Corpus {
    /// Tokenizes every review and groups the results.
    ///
    /// Each language gets its own stopword snapshot, including the terms listed
    /// for `corpus_id` when one is given.
    pub fn build<'a, I>(
        reviews: I,
        tokenizer: &Tokenizer,
        stopwords: &StopwordStore,
        corpus_id: Option<&str>,
    ) -> Self
    where
        I: IntoIterator<Item = &'a Review>,
    {
        let mut snapshots = BTreeMap::new();
        let mut partitions: BTreeMap<PartitionKey, Vec<TokenSequence>> = BTreeMap::new();

        for review in reviews {
            let snapshot = snapshots
                .entry(review.language.clone())
                .or_insert_with(|| stopwords.snapshot(&review.language, corpus_id));
            let tokens = tokenizer.tokenize(&review.text, &review.language, snapshot);
            partitions
                .entry(PartitionKey {
                    language: review.language.clone(),
                    sentiment: review.sentiment,
                })
                .or_default()
                .push(tokens);
        }

        for (key, sequences) in &partitions {
            tracing::debug!(
                language = %key.language,
                sentiment = %key.sentiment,
                reviews = sequences.len(),
                "built corpus partition"
            );
        }

        Self { partitions }
    }

    /// Creates a corpus from already-tokenized partitions.
    pub fn from_partitions(partitions: BTreeMap<PartitionKey, Vec<TokenSequence>>) -> Self {
        Self { partitions }
    }

    /// Returns the sequences of one partition; empty if it does not exist.
    pub fn partition(&self, language: &LanguageTag, sentiment: Sentiment) -> &[TokenSequence] {
        self.partitions
            .get(&PartitionKey {
                language: language.clone(),
                sentiment,
            })
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the languages present in the corpus.
    pub fn languages(&self) -> Vec<&LanguageTag> {
        let mut languages: Vec<&LanguageTag> =
            self.partitions.keys().map(|k| &k.language).collect();
        languages.dedup();
        languages
    }

    /// Returns the total number of token sequences.
    pub fn len(&self) -> usize {
        self.partitions.values().map(Vec::len).sum()
    }

    /// Returns true if the corpus holds no sequences.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use verdict_text::ScriptFamily;

    use super::*;

    fn reviews() -> Vec<Review> {
        vec![
            Review::new("Amazing game", LanguageTag::English, Sentiment::Positive),
            Review::new("Boring game", LanguageTag::English, Sentiment::Negative),
            Review::new("", LanguageTag::English, Sentiment::Negative),
            Review::new("Gutes Spiel", LanguageTag::German, Sentiment::Positive),
        ]
    }

    #[test]
    fn partitions_by_language_and_sentiment() {
        let reviews = reviews();
        let corpus = Corpus::build(&reviews, &Tokenizer::new(), &StopwordStore::new(), None);

        assert_eq!(corpus.len(), 4);
        assert_eq!(corpus.partition(&LanguageTag::English, Sentiment::Positive).len(), 1);
        assert_eq!(corpus.partition(&LanguageTag::English, Sentiment::Negative).len(), 2);
        assert_eq!(corpus.partition(&LanguageTag::German, Sentiment::Negative).len(), 0);
        assert_eq!(
            corpus.partition(&LanguageTag::English, Sentiment::Positive)[0].tokens(),
            ["amazing", "game"]
        );
        assert_eq!(
            corpus.languages(),
            vec![&LanguageTag::English, &LanguageTag::German]
        );
    }

    #[test]
    fn corpus_stopwords_are_applied() {
        let reviews = reviews();
        let mut store = StopwordStore::new();
        store.add_corpus_terms("570", ScriptFamily::Latin, ["game".to_string()]);

        let corpus = Corpus::build(&reviews, &Tokenizer::new(), &store, Some("570"));
        assert_eq!(
            corpus.partition(&LanguageTag::English, Sentiment::Negative)[0].tokens(),
            ["boring"]
        );
    }

    #[test]
    fn empty_input_gives_empty_corpus() {
        let reviews: Vec<Review> = Vec::new();
        let corpus = Corpus::build(&reviews, &Tokenizer::new(), &StopwordStore::new(), None);
        assert!(corpus.is_empty());
        assert!(corpus.languages().is_empty());
    }
}
