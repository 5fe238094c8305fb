//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for settings that
//! analysis will reject or that produce empty output.

use std::fmt;

use crate::Config;

/// Supported n-gram sizes.
const SUPPORTED_SIZES: [usize; 2] = [2, 3];

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// `[ngrams] size` is outside the supported sizes.
    UnsupportedNgramSize {
        /// Configured size.
        size: usize,
    },
    /// `[distinctive] ngram_range` is reversed or outside the supported sizes.
    InvalidNgramRange {
        /// Configured lower bound.
        min: usize,
        /// Configured upper bound.
        max: usize,
    },
    /// `[distinctive] ngram_range` mixes bigrams and trigrams.
    MixedNgramRange,
    /// A `top_n` setting is zero, so nothing will be reported.
    ZeroTopN {
        /// Section that holds the setting.
        section: &'static str,
    },
    /// A stopword corpus table has no terms.
    EmptyCorpusStopwords {
        /// Corpus identifier.
        corpus: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedNgramSize { size } => {
                write!(f, "ngrams.size = {size} is not supported (use 2 or 3)")
            }
            Self::InvalidNgramRange { min, max } => {
                write!(
                    f,
                    "distinctive.ngram_range = [{min}, {max}] is invalid (bounds must be 2 or 3, min <= max)"
                )
            }
            Self::MixedNgramRange => {
                write!(
                    f,
                    "distinctive.ngram_range mixes bigrams and trigrams; trigram scores include their bigram parts"
                )
            }
            Self::ZeroTopN { section } => {
                write!(f, "{section}.top_n is 0, no terms will be reported")
            }
            Self::EmptyCorpusStopwords { corpus } => {
                write!(f, "stopwords.corpus.{corpus} defines no terms")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
///
/// This checks for:
/// - n-gram sizes and ranges the analysis engines reject
/// - mixed bigram/trigram ranges
/// - `top_n` settings of zero
/// - empty per-corpus stopword tables
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if !SUPPORTED_SIZES.contains(&config.ngrams.size) {
        warnings.push(ConfigWarning::UnsupportedNgramSize {
            size: config.ngrams.size,
        });
    }
    if config.ngrams.top_n == 0 {
        warnings.push(ConfigWarning::ZeroTopN { section: "ngrams" });
    }

    let (min, max) = config.distinctive.ngram_range;
    if !SUPPORTED_SIZES.contains(&min) || !SUPPORTED_SIZES.contains(&max) || min > max {
        warnings.push(ConfigWarning::InvalidNgramRange { min, max });
    } else if min != max {
        warnings.push(ConfigWarning::MixedNgramRange);
    }
    if config.distinctive.top_n == 0 {
        warnings.push(ConfigWarning::ZeroTopN {
            section: "distinctive",
        });
    }

    for (corpus, stopwords) in &config.stopwords.corpus {
        if stopwords.latin.is_empty() && stopwords.logographic.is_empty() {
            warnings.push(ConfigWarning::EmptyCorpusStopwords {
                corpus: corpus.clone(),
            });
        }
    }

    warnings
}
