//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use verdict_analysis::{Corpus, Dataset};
use verdict_config::Config;
use verdict_text::{LanguageTag, StopwordStore, Tokenizer};

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (default if no config files were found).
    pub config: Config,
    /// Stopwords built from the configuration.
    pub stopwords: StopwordStore,
    /// Tokenizer shared by every review of the invocation.
    pub tokenizer: Tokenizer,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self::with_config(cwd, config))
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is
    /// invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self::with_config(cwd, Config::default()))
    }

    /// Builds a context from a loaded configuration.
    fn with_config(cwd: PathBuf, config: Config) -> Self {
        let stopwords = StopwordStore::from_settings(&config.stopwords);
        Self {
            cwd,
            config,
            stopwords,
            tokenizer: Tokenizer::new(),
        }
    }

    /// Reads a dataset, resolving relative paths from the working directory.
    pub fn load_dataset(&self, path: &Path) -> Result<Dataset, ExitCode> {
        let path = self.cwd.join(path);
        let dataset = Dataset::load(&path).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })?;
        tracing::info!(
            path = %path.display(),
            loaded = dataset.stats.loaded,
            skipped = dataset.stats.skipped,
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Tokenizes the reviews of one language into a corpus.
    pub fn corpus(&self, dataset: &Dataset, language: &LanguageTag, corpus: Option<&str>) -> Corpus {
        Corpus::build(
            dataset.reviews_in(language),
            &self.tokenizer,
            &self.stopwords,
            corpus,
        )
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
