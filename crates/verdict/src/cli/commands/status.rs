//! Implementation of `verdict status`.

use std::process::ExitCode;

use verdict_config::{ConfigWarning, discover_config_files, format_path_for_display};

use crate::cli::{
    context::CommandContext,
    output::{dim, rule, subheader, warning},
};

/// Shows configuration files, stopword lists, and validation warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let cwd = &ctx.cwd;

    let config_files = discover_config_files(cwd);
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("verdict init")
        );
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Config files:"));
    for path in &config_files {
        let display_path = format_path_for_display(path, Some(cwd));
        println!("   {display_path}");
    }
    println!();

    let config = &ctx.config;
    let stopwords = &config.stopwords;

    println!("{}", subheader("Stopwords:"));
    println!("   universal: {} terms", stopwords.universal.len());
    println!(
        "   built-in lists: {}",
        if stopwords.extended {
            "curated + stopwords-iso"
        } else {
            "curated"
        }
    );
    for file in &stopwords.files {
        let display_path = format_path_for_display(file, config.config_root.as_deref());
        println!("   {} {}", dim("file"), display_path);
    }
    if stopwords.corpus.is_empty() {
        println!("   {}", dim("(no corpus lists)"));
    } else {
        for (corpus, terms) in &stopwords.corpus {
            println!(
                "   {} {}",
                dim(&format!("corpus {corpus}:")),
                dim(&format!(
                    "{} latin, {} logographic",
                    terms.latin.len(),
                    terms.logographic.len()
                ))
            );
        }
    }
    println!();

    println!("{}", subheader("Analysis:"));
    println!(
        "   ngrams: size {}, min frequency {}, top {}",
        config.ngrams.size, config.ngrams.min_frequency, config.ngrams.top_n
    );
    let (min, max) = config.distinctive.ngram_range;
    println!(
        "   distinctive: range {min}-{max}, top {}, min df {}, max features {}",
        config.distinctive.top_n, config.distinctive.min_df, config.distinctive.max_features
    );
    println!("{}", rule(40));

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints: Vec<&str> = warnings
        .iter()
        .filter_map(|w| match w {
            ConfigWarning::UnsupportedNgramSize { .. } => {
                Some("Hint: set [ngrams] size to 2 or 3")
            }
            ConfigWarning::InvalidNgramRange { .. } => {
                Some("Hint: use [2, 2], [3, 3] or [2, 3] for [distinctive] ngram_range")
            }
            ConfigWarning::EmptyCorpusStopwords { .. } => {
                Some("Hint: add latin or logographic terms, or remove the corpus table")
            }
            ConfigWarning::MixedNgramRange | ConfigWarning::ZeroTopN { .. } => None,
        })
        .collect();
    hints.dedup();
    for hint in hints {
        println!("{}", dim(hint));
    }
}
