//! Configuration system for verdict.
//!
//! verdict reads TOML files named `.verdict.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting
//! any `.verdict.toml` files found, then loading `~/.verdict.toml` as the global
//! config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawCorpusStopwords, RawDistinctiveSettings, RawNgramSettings, RawStopwordSettings,
    parse_config_file, parse_config_str,
};
pub use resolve::{format_path_for_display, resolve_config_path};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default number of tokens per n-gram.
pub const DEFAULT_NGRAM_SIZE: usize = 2;
/// Default minimum n-gram occurrence count.
pub const DEFAULT_MIN_FREQUENCY: usize = 2;
/// Default number of ranked n-grams.
pub const DEFAULT_NGRAM_TOP_N: usize = 100;
/// Default inclusive n-gram range for distinctive terms.
pub const DEFAULT_NGRAM_RANGE: (usize, usize) = (2, 2);
/// Default number of distinctive terms per sentiment.
pub const DEFAULT_DISTINCTIVE_TOP_N: usize = 50;
/// Default minimum document frequency for vectorized terms.
pub const DEFAULT_MIN_DF: usize = 2;
/// Default vocabulary cap.
pub const DEFAULT_MAX_FEATURES: usize = 5000;
/// Default group size below which distinctiveness is flagged as low confidence.
pub const DEFAULT_MIN_GROUP_DOCUMENTS: usize = 5;

/// Top-level merged configuration for verdict.
///
/// This represents the fully resolved configuration after merging all
/// discovered `.verdict.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// N-gram frequency settings.
    pub ngrams: NgramSettings,
    /// Distinctive-term settings.
    pub distinctive: DistinctiveSettings,
    /// User-defined stopwords, merged across all files.
    pub stopwords: StopwordSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.verdict.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// Stopword list files are omitted because their contents have already
    /// been folded into `stopwords.universal`.
    pub fn settings_to_toml(&self) -> Result<String, toml::ser::Error> {
        let serializable = SerializableSettings {
            ngrams: &self.ngrams,
            distinctive: &self.distinctive,
            stopwords: &self.stopwords,
        };
        toml::to_string_pretty(&serializable)
    }
}

/// Settings for n-gram frequency ranking.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NgramSettings {
    /// Tokens per n-gram (2 or 3).
    pub size: usize,
    /// Drop n-grams seen fewer times than this.
    pub min_frequency: usize,
    /// Number of ranked n-grams to report.
    pub top_n: usize,
}

impl Default for NgramSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_NGRAM_SIZE,
            min_frequency: DEFAULT_MIN_FREQUENCY,
            top_n: DEFAULT_NGRAM_TOP_N,
        }
    }
}

/// Settings for distinctive-term scoring.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DistinctiveSettings {
    /// Inclusive n-gram size range for vectorized terms.
    pub ngram_range: (usize, usize),
    /// Number of terms reported per sentiment.
    pub top_n: usize,
    /// Minimum number of reviews a term must occur in.
    pub min_df: usize,
    /// Vocabulary cap; 0 keeps every term.
    pub max_features: usize,
    /// Groups smaller than this are reported as low confidence.
    pub min_group_documents: usize,
}

impl Default for DistinctiveSettings {
    fn default() -> Self {
        Self {
            ngram_range: DEFAULT_NGRAM_RANGE,
            top_n: DEFAULT_DISTINCTIVE_TOP_N,
            min_df: DEFAULT_MIN_DF,
            max_features: DEFAULT_MAX_FEATURES,
            min_group_documents: DEFAULT_MIN_GROUP_DOCUMENTS,
        }
    }
}

/// User-defined stopwords.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StopwordSettings {
    /// Terms ignored for every corpus, including terms read from list files.
    pub universal: BTreeSet<String>,
    /// Per-corpus stopwords keyed by corpus identifier.
    pub corpus: BTreeMap<String, CorpusStopwords>,
    /// Use the extended per-language list in addition to the curated one.
    pub extended: bool,
    /// Resolved list files that contributed to `universal`.
    #[serde(skip)]
    pub files: Vec<PathBuf>,
}

impl StopwordSettings {
    /// Returns the stopwords configured for a corpus, if any.
    pub fn for_corpus(&self, corpus: &str) -> Option<&CorpusStopwords> {
        self.corpus.get(corpus)
    }
}

/// Stopwords for one logical corpus, one list per script family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CorpusStopwords {
    /// Applied to space-delimited text.
    pub latin: BTreeSet<String>,
    /// Applied to logographic text.
    pub logographic: BTreeSet<String>,
}

/// Borrowed view used for TOML serialization of the effective settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// N-gram settings.
    ngrams: &'a NgramSettings,
    /// Distinctive-term settings.
    distinctive: &'a DistinctiveSettings,
    /// Stopword settings.
    stopwords: &'a StopwordSettings,
}
