//! Review records and sentiment labels.

use std::fmt;

use serde::{Deserialize, Serialize};
use verdict_text::LanguageTag;

/// Binary review sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Recommended.
    Positive,
    /// Not recommended.
    Negative,
}

impl Sentiment {
    /// Maps a recommendation flag to a sentiment.
    pub fn from_voted_up(voted_up: bool) -> Self {
        if voted_up {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    /// Returns the other sentiment.
    pub fn opposite(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }

    /// Returns the lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which sentiment partitions an analysis covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SentimentFilter {
    /// Positive reviews only.
    Positive,
    /// Negative reviews only.
    Negative,
    /// Each sentiment separately.
    #[default]
    Both,
}

impl SentimentFilter {
    /// Returns the sentiments selected by the filter.
    pub fn sentiments(self) -> &'static [Sentiment] {
        match self {
            Self::Positive => &[Sentiment::Positive],
            Self::Negative => &[Sentiment::Negative],
            Self::Both => &[Sentiment::Positive, Sentiment::Negative],
        }
    }
}

/// One user review. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    /// Review body.
    pub text: String,
    /// Language the review is written in.
    pub language: LanguageTag,
    /// Recommendation label.
    pub sentiment: Sentiment,
}

impl Review {
    /// Creates a review.
    pub fn new(text: impl Into<String>, language: LanguageTag, sentiment: Sentiment) -> Self {
        Self {
            text: text.into(),
            language,
            sentiment,
        }
    }
}
