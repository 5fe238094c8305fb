//! Integration tests for verdict-config.
//!
//! Tests the full configuration loading pipeline: discovery -> parse -> merge.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use verdict_config::{Config, ConfigError, ConfigWarning, discover_config_files};

/// Test helper to create a temporary directory structure for tests.
struct TestEnv {
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory and returns its path.
    fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Creates a file with content and returns its path.
    fn create_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn test_load_rooted_config() {
    let env = TestEnv::new();

    env.create_file(
        ".verdict.toml",
        r#"
root = true

[ngrams]
size = 3
top_n = 25
"#,
    );

    let config = Config::load(env.path()).unwrap();

    assert_eq!(config.ngrams.size, 3);
    assert_eq!(config.ngrams.top_n, 25);
    assert_eq!(config.ngrams.min_frequency, 2);
    assert_eq!(config.distinctive.ngram_range, (2, 2));
    assert_eq!(config.config_root.as_deref(), Some(env.path()));
}

#[test]
fn test_load_nested_configs_merging() {
    let env = TestEnv::new();
    let subdir = env.create_dir("project/subdir");

    env.create_file(
        ".verdict.toml",
        r#"
root = true

[distinctive]
min_df = 3
top_n = 20

[stopwords]
universal = ["steam"]
"#,
    );

    env.create_file(
        "project/.verdict.toml",
        r#"
[distinctive]
top_n = 10

[stopwords]
universal = ["game"]

[stopwords.corpus.570]
latin = ["dota"]
"#,
    );

    let config = Config::load(&subdir).unwrap();

    // Closest file wins for scalars
    assert_eq!(config.distinctive.top_n, 10);
    // Parent value survives when not overridden
    assert_eq!(config.distinctive.min_df, 3);
    // Stopwords combine
    assert!(config.stopwords.universal.contains("steam"));
    assert!(config.stopwords.universal.contains("game"));
    assert!(config.stopwords.corpus["570"].latin.contains("dota"));
    assert_eq!(config.config_root, Some(env.path().join("project")));
}

#[test]
fn test_root_stops_discovery() {
    let env = TestEnv::new();
    let project = env.create_dir("project");

    env.create_file(".verdict.toml", "[ngrams]\nsize = 3\n");
    env.create_file("project/.verdict.toml", "root = true\n");

    let files = discover_config_files(&project);
    assert_eq!(files, vec![project.join(".verdict.toml")]);

    let config = Config::load(&project).unwrap();
    assert_eq!(config.ngrams.size, 2);
}

#[test]
fn test_stopword_file_from_config() {
    let env = TestEnv::new();
    env.create_file("lists/gaming.txt", "# shared list\nrpg\nfps\n");
    env.create_file(
        ".verdict.toml",
        r#"
root = true

[stopwords]
files = "lists/gaming.txt"
"#,
    );

    let config = Config::load(env.path()).unwrap();

    assert!(config.stopwords.universal.contains("rpg"));
    assert!(config.stopwords.universal.contains("fps"));
    assert_eq!(
        config.stopwords.files,
        vec![env.path().join("lists/gaming.txt")]
    );
}

#[test]
fn test_invalid_toml_is_reported() {
    let env = TestEnv::new();
    env.create_file(".verdict.toml", "root = true\n[ngrams\n");

    let err = Config::load(env.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseToml { .. }));
}

#[test]
fn test_validate_loaded_config() {
    let env = TestEnv::new();
    env.create_file(
        ".verdict.toml",
        r#"
root = true

[ngrams]
size = 5

[distinctive]
ngram_range = [2, 3]
"#,
    );

    let config = Config::load(env.path()).unwrap();
    let warnings = config.validate();

    assert!(warnings.contains(&ConfigWarning::UnsupportedNgramSize { size: 5 }));
    assert!(warnings.contains(&ConfigWarning::MixedNgramRange));
}

#[test]
fn test_effective_settings_serialize() {
    let env = TestEnv::new();
    env.create_file(
        ".verdict.toml",
        "root = true\n\n[stopwords.corpus.730]\nlatin = [\"counter\"]\n",
    );

    let config = Config::load(env.path()).unwrap();
    let toml = config.settings_to_toml().unwrap();

    assert!(toml.contains("[stopwords.corpus.730]"));
    assert!(toml.contains("counter"));
}
