//! Reading review datasets.
//!
//! A dataset is the JSON dump written by the review collector: either an
//! object `{"metadata": {...}, "reviews": [...]}` or a bare array of review
//! records. Each record needs a `review` string, a `language` code and a
//! `voted_up` flag. Records that lack any of these are skipped, not fatal.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use verdict_text::LanguageTag;

use crate::{AnalysisError, Review, Sentiment};

/// Counts gathered while reading a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    /// Records present in the file.
    pub records: usize,
    /// Records that became reviews.
    pub loaded: usize,
    /// Malformed records that were skipped.
    pub skipped: usize,
}

/// Reviews read from one dataset.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Valid reviews in file order.
    pub reviews: Vec<Review>,
    /// Record counts.
    pub stats: DatasetStats,
    /// Collector metadata, when the file has any.
    pub metadata: Option<Value>,
}

/// Review record as written by the collector. Every field may be missing.
#[derive(Debug, Deserialize)]
struct RawReview {
    /// Review body.
    review: Option<String>,
    /// Steam language code.
    language: Option<String>,
    /// Recommendation flag.
    voted_up: Option<bool>,
}

impl Dataset {
    /// Reads a dataset file.
    pub fn load(path: &Path) -> Result<Self, AnalysisError> {
        let contents = fs::read_to_string(path).map_err(|source| AnalysisError::ReadDataset {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    /// Parses dataset JSON. `path` is used for error reporting.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, AnalysisError> {
        let value: Value = serde_json::from_str(contents)
            .map_err(|e| AnalysisError::parse_dataset(path.to_path_buf(), &e))?;

        let (records, metadata) = match value {
            Value::Array(records) => (records, None),
            Value::Object(mut object) => {
                let metadata = object.remove("metadata");
                match object.remove("reviews") {
                    Some(Value::Array(records)) => (records, metadata),
                    _ => return Err(missing_reviews(path)),
                }
            }
            _ => return Err(missing_reviews(path)),
        };

        Ok(Self::from_records(records, metadata))
    }

    /// Converts raw JSON records into reviews, skipping malformed ones.
    pub fn from_records(records: Vec<Value>, metadata: Option<Value>) -> Self {
        let mut stats = DatasetStats {
            records: records.len(),
            ..DatasetStats::default()
        };
        let mut reviews = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            match convert_record(record) {
                Some(review) => reviews.push(review),
                None => {
                    stats.skipped += 1;
                    tracing::debug!(index, "skipping malformed review record");
                }
            }
        }

        stats.loaded = reviews.len();
        if stats.skipped > 0 {
            tracing::info!(
                skipped = stats.skipped,
                loaded = stats.loaded,
                "skipped malformed review records"
            );
        }

        Self {
            reviews,
            stats,
            metadata,
        }
    }

    /// Returns the reviews written in one language.
    pub fn reviews_in(&self, language: &LanguageTag) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| &r.language == language)
            .collect()
    }
}

/// Converts one record, or returns `None` if it is malformed.
fn convert_record(record: Value) -> Option<Review> {
    let raw: RawReview = serde_json::from_value(record).ok()?;
    let text = raw.review?;
    let language = raw.language.filter(|l| !l.trim().is_empty())?;
    let voted_up = raw.voted_up?;
    Some(Review::new(
        text,
        LanguageTag::parse(&language),
        Sentiment::from_voted_up(voted_up),
    ))
}

/// Error for JSON that holds no review list.
fn missing_reviews(path: &Path) -> AnalysisError {
    AnalysisError::ParseDataset {
        path: PathBuf::from(path),
        message: "expected a review array or an object with a \"reviews\" array".to_string(),
    }
}
