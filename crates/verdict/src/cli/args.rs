//! Clap argument definitions for the `verdict` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use verdict_analysis::SentimentFilter;
use verdict_text::LanguageTag;

/// Parses a language code. Unknown codes are accepted and use the generic
/// tokenizer.
fn parse_language(s: &str) -> Result<LanguageTag, String> {
    let code = s.trim();
    if code.is_empty() {
        return Err("language code must not be empty".to_string());
    }
    Ok(LanguageTag::parse(code))
}

/// Parses an n-gram range: `2`, `3` or `2-3`.
fn parse_range(s: &str) -> Result<(usize, usize), String> {
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|_| format!("invalid n-gram range '{s}' (use 2, 3 or 2-3)"))
    };
    match s.split_once('-') {
        Some((min, max)) => Ok((parse(min)?, parse(max)?)),
        None => {
            let size = parse(s)?;
            Ok((size, size))
        }
    }
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "verdict")]
#[command(about = "Frequent and distinctive phrases in user reviews")]
pub struct Cli {
    /// Log verbosity (-v for info, -vv for debug); RUST_LOG overrides
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Dataset and language selection shared by analysis commands.
#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// Review dataset (JSON dump from the review collector)
    pub dataset: PathBuf,

    /// Review language code (english, schinese, german, ...)
    #[arg(short = 'l', long, value_parser = parse_language)]
    pub language: LanguageTag,

    /// Corpus identifier selecting [stopwords.corpus.ID] terms, e.g. a Steam app id
    #[arg(long)]
    pub corpus: Option<String>,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output the full report as JSON
    #[arg(long, conflicts_with = "flat")]
    pub json: bool,

    /// Output one JSON record per ranked term
    #[arg(long)]
    pub flat: bool,
}

/// Output modes selected by [`OutputArgs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable tables.
    Table,
    /// Full report as JSON.
    Json,
    /// Flat records as JSON lines.
    Flat,
}

impl OutputArgs {
    /// Returns the selected output mode.
    pub fn mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.flat {
            OutputMode::Flat
        } else {
            OutputMode::Table
        }
    }
}

/// Sentiment selection for `verdict ngrams`.
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum SentimentArg {
    /// Recommended reviews only
    Positive,
    /// Not-recommended reviews only
    Negative,
    /// Each sentiment separately
    #[default]
    Both,
}

impl From<SentimentArg> for SentimentFilter {
    fn from(arg: SentimentArg) -> Self {
        match arg {
            SentimentArg::Positive => Self::Positive,
            SentimentArg::Negative => Self::Negative,
            SentimentArg::Both => Self::Both,
        }
    }
}

/// Arguments for `verdict ngrams`.
#[derive(Args, Debug, Clone)]
pub struct NgramsCommand {
    #[command(flatten)]
    /// Dataset selection.
    pub input: DatasetArgs,

    /// Sentiment groups to rank
    #[arg(short = 's', long, value_enum, default_value_t)]
    pub sentiment: SentimentArg,

    /// Tokens per n-gram, 2 or 3 [default: 2]
    #[arg(short = 'k', long)]
    pub size: Option<usize>,

    /// Drop n-grams seen fewer times than this [default: 2]
    #[arg(long)]
    pub min_frequency: Option<usize>,

    /// Ranked n-grams per group [default: 100]
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `verdict distinctive`.
#[derive(Args, Debug, Clone)]
pub struct DistinctiveCommand {
    #[command(flatten)]
    /// Dataset selection.
    pub input: DatasetArgs,

    /// N-gram sizes: 2, 3 or 2-3 [default: 2]
    #[arg(short = 'r', long, value_parser = parse_range)]
    pub range: Option<(usize, usize)>,

    /// Terms per sentiment [default: 50]
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    /// Minimum number of reviews a term must appear in [default: 2]
    #[arg(long)]
    pub min_df: Option<usize>,

    /// Vocabulary cap by corpus frequency, 0 for none [default: 5000]
    #[arg(long)]
    pub max_features: Option<usize>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `verdict tokenize`.
#[derive(Args, Debug, Clone)]
pub struct TokenizeCommand {
    /// Text to tokenize
    pub text: String,

    /// Language code of the text
    #[arg(short = 'l', long, value_parser = parse_language)]
    pub language: LanguageTag,

    /// Corpus identifier selecting [stopwords.corpus.ID] terms
    #[arg(long)]
    pub corpus: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `verdict summary`.
#[derive(Args, Debug, Clone)]
pub struct SummaryCommand {
    /// Review dataset (JSON dump from the review collector)
    pub dataset: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `verdict init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.verdict.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `verdict` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Rank the most frequent n-grams per sentiment
    #[command(after_help = "\
EXAMPLES:
  verdict ngrams reviews.json -l english
  verdict ngrams reviews.json -l schinese -s negative -k 3
  verdict ngrams reviews.json -l english --corpus 570 --flat")]
    Ngrams(NgramsCommand),

    /// Score phrases that separate positive from negative reviews
    #[command(after_help = "\
Scores are TF-IDF weights averaged per sentiment: a phrase's positive score is
its mean weight in positive reviews minus its mean weight in negative reviews.
Phrases used equally by both sides score zero and are not listed.

EXAMPLES:
  verdict distinctive reviews.json -l english
  verdict distinctive reviews.json -l english --range 2-3 -n 20
  verdict distinctive reviews.json -l schinese --json")]
    Distinctive(DistinctiveCommand),

    /// Show how a text is cleaned and tokenized
    Tokenize(TokenizeCommand),

    /// Count reviews per language and sentiment
    Summary(SummaryCommand),

    /// Initialize verdict configuration in current directory
    Init(InitCommand),

    /// Show status and validate configuration
    Status,

    /// Show effective configuration settings
    Config,
}
