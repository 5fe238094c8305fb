//! Phrase frequency and distinctiveness analysis over review datasets.
//!
//! A [`Dataset`] is read once and tokenized into a [`Corpus`] partitioned by
//! language and [`Sentiment`]. Two engines run over the partitions:
//!
//! - **N-gram ranking** ([`rank`]): the most frequent bigrams or trigrams of
//!   one partition, with a guard against spam phrases such as "good good"
//! - **Distinctiveness** ([`score_distinctive_terms`]): TF-IDF weighted terms
//!   that separate positive reviews from negative ones
//!
//! # Example
//!
//! ```
//! use verdict_analysis::rank;
//! use verdict_text::TokenSequence;
//!
//! let partition = vec![
//!     TokenSequence::from(vec!["great", "game"]),
//!     TokenSequence::from(vec!["great", "game", "really"]),
//! ];
//! let report = rank(&partition, 2, 2, 10).unwrap();
//! assert_eq!(report.entries[0].phrase, "great game");
//! assert_eq!(report.entries[0].count, 2);
//! ```

#![warn(missing_docs)]

mod corpus;
mod dataset;
mod distinctive;
mod error;
mod ngram;
mod report;
mod review;
mod summary;
mod weighting;

pub use corpus::{Corpus, PartitionKey};
pub use dataset::{Dataset, DatasetStats};
pub use distinctive::{
    Confidence, DistinctiveOptions, DistinctivenessReport, GroupComparison, ScoredTerm,
    score_distinctive_terms,
};
pub use error::AnalysisError;
pub use ngram::{
    NGram, NgramReport, RankedNgram, SUPPORTED_NGRAM_SIZES, generate_ngrams, rank,
    validate_ngram_size,
};
pub use report::FlatRecord;
pub use review::{Review, Sentiment, SentimentFilter};
pub use summary::{CorpusSummary, LanguageSummary, ReviewCategory};
pub use weighting::{TfIdfVectorizer, WeightMatrix};
