//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and reading stopword list files.

use std::{fs, path::PathBuf};

use crate::{
    Config, ConfigError, CorpusStopwords, DistinctiveSettings, NgramSettings, StopwordSettings,
    parse::{RawConfig, RawCorpusStopwords, RawDistinctiveSettings, RawNgramSettings},
    resolve::resolve_config_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Stopwords: unioned across every file, including referenced list files
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let ngrams = merge_ngram_settings(configs);
    let distinctive = merge_distinctive_settings(configs);
    let stopwords = merge_stopwords(configs)?;
    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(|p| p.to_path_buf());

    Ok(Config {
        ngrams,
        distinctive,
        stopwords,
        config_root,
    })
}

/// Merges n-gram settings, taking first defined value for each field.
fn merge_ngram_settings(configs: &[ParsedConfig]) -> NgramSettings {
    let mut result = NgramSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref ngrams) = parsed.config.ngrams {
            apply_raw_ngrams(&mut result, ngrams);
        }
    }

    result
}

/// Applies raw n-gram settings to result, overwriting any present values.
fn apply_raw_ngrams(result: &mut NgramSettings, raw: &RawNgramSettings) {
    if let Some(v) = raw.size {
        result.size = v;
    }
    if let Some(v) = raw.min_frequency {
        result.min_frequency = v;
    }
    if let Some(v) = raw.top_n {
        result.top_n = v;
    }
}

/// Merges distinctive-term settings.
fn merge_distinctive_settings(configs: &[ParsedConfig]) -> DistinctiveSettings {
    let mut result = DistinctiveSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref distinctive) = parsed.config.distinctive {
            apply_raw_distinctive(&mut result, distinctive);
        }
    }

    result
}

/// Applies raw distinctive-term settings to result.
fn apply_raw_distinctive(result: &mut DistinctiveSettings, raw: &RawDistinctiveSettings) {
    if let Some(v) = raw.ngram_range {
        result.ngram_range = v;
    }
    if let Some(v) = raw.top_n {
        result.top_n = v;
    }
    if let Some(v) = raw.min_df {
        result.min_df = v;
    }
    if let Some(v) = raw.max_features {
        result.max_features = v;
    }
    if let Some(v) = raw.min_group_documents {
        result.min_group_documents = v;
    }
}

/// Unions stopwords from every config file.
///
/// List files are resolved relative to the config file that names them.
/// `extended` follows the scalar rule: the closest file that sets it wins.
fn merge_stopwords(configs: &[ParsedConfig]) -> Result<StopwordSettings, ConfigError> {
    let mut result = StopwordSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref stopwords) = parsed.config.stopwords
            && let Some(v) = stopwords.extended
        {
            result.extended = v;
        }
    }

    for parsed in configs {
        let Some(ref stopwords) = parsed.config.stopwords else {
            continue;
        };

        if let Some(ref universal) = stopwords.universal {
            result.universal.extend(clean_terms(universal));
        }

        if let Some(ref files) = stopwords.files {
            let config_dir = parsed
                .path
                .parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_default();
            for file in files {
                let path = resolve_config_path(file, &config_dir)?;
                result.universal.extend(read_stopword_file(&path)?);
                if !result.files.contains(&path) {
                    result.files.push(path);
                }
            }
        }

        if let Some(ref corpus) = stopwords.corpus {
            for (id, raw) in corpus {
                let entry = result.corpus.entry(id.clone()).or_default();
                apply_raw_corpus(entry, raw);
            }
        }
    }

    Ok(result)
}

/// Adds a raw corpus table to the merged corpus entry.
fn apply_raw_corpus(result: &mut CorpusStopwords, raw: &RawCorpusStopwords) {
    if let Some(ref latin) = raw.latin {
        result.latin.extend(clean_terms(latin));
    }
    if let Some(ref logographic) = raw.logographic {
        result.logographic.extend(clean_terms(logographic));
    }
}

/// Trims terms and drops empty entries.
fn clean_terms(terms: &[String]) -> impl Iterator<Item = String> + '_ {
    terms
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Reads a stopword list: one term per line, `#` starts a comment line.
fn read_stopword_file(path: &PathBuf) -> Result<Vec<String>, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadStopwords {
        path: path.clone(),
        source,
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
