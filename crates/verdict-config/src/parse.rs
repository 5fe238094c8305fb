//! Configuration file parsing.
//!
//! Parses individual `.verdict.toml` files into intermediate `RawConfig`
//! structures that keep every field optional until merging.

use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// N-gram frequency settings.
    pub ngrams: Option<RawNgramSettings>,
    /// Distinctive-term settings.
    pub distinctive: Option<RawDistinctiveSettings>,
    /// User-defined stopwords.
    pub stopwords: Option<RawStopwordSettings>,
}

/// Raw `[ngrams]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawNgramSettings {
    /// Tokens per n-gram.
    pub size: Option<usize>,
    /// Drop n-grams seen fewer times than this.
    pub min_frequency: Option<usize>,
    /// Number of ranked n-grams to report.
    pub top_n: Option<usize>,
}

/// Raw `[distinctive]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDistinctiveSettings {
    /// Inclusive n-gram size range for vectorized terms, e.g. `[2, 3]`.
    pub ngram_range: Option<(usize, usize)>,
    /// Number of terms reported per sentiment.
    pub top_n: Option<usize>,
    /// Minimum number of reviews a term must occur in.
    pub min_df: Option<usize>,
    /// Vocabulary cap (0 disables the cap).
    pub max_features: Option<usize>,
    /// Groups smaller than this are reported as low confidence.
    pub min_group_documents: Option<usize>,
}

/// Raw `[stopwords]` section.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawStopwordSettings {
    /// Terms ignored for every corpus and language.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub universal: Option<Vec<String>>,
    /// Plain-text stopword lists (one term per line) merged into `universal`.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub files: Option<Vec<String>>,
    /// Also apply the extended (stopwords-iso) list for each language.
    pub extended: Option<bool>,
    /// Per-corpus stopwords keyed by corpus identifier.
    pub corpus: Option<HashMap<String, RawCorpusStopwords>>,
}

/// Raw `[stopwords.corpus.<id>]` table.
///
/// A logical corpus carries one list per script family so product names can be
/// listed in both their romanized and logographic spellings.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCorpusStopwords {
    /// Stopwords applied to space-delimited text.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub latin: Option<Vec<String>>,
    /// Stopwords applied to logographic text.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub logographic: Option<Vec<String>>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
///
/// Useful for validating template content (tests only).
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
