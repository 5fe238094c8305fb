//! Error types for the verdict-analysis crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading review data or running an analysis.
///
/// Empty inputs are never errors; they produce empty reports.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// N-gram size outside the supported sizes.
    #[error("unsupported n-gram size {size} (use 2 or 3)")]
    InvalidNgramSize {
        /// Requested size.
        size: usize,
    },

    /// N-gram range that is reversed or outside the supported sizes.
    #[error("invalid n-gram range {min}..={max} (bounds must be 2 or 3, min <= max)")]
    InvalidNgramRange {
        /// Requested lower bound.
        min: usize,
        /// Requested upper bound.
        max: usize,
    },

    /// Failed to read a dataset file.
    #[error("failed to read dataset {path}: {source}")]
    ReadDataset {
        /// Path to the dataset.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Dataset file is not valid JSON or has no review list.
    #[error("failed to parse dataset {path}: {message}")]
    ParseDataset {
        /// Path to the dataset.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

impl AnalysisError {
    /// Creates a `ParseDataset` error from a JSON error.
    pub(crate) fn parse_dataset(path: PathBuf, source: &serde_json::Error) -> Self {
        Self::ParseDataset {
            path,
            message: source.to_string(),
        }
    }
}
