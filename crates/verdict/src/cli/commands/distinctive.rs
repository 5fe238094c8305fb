//! Implementation of `verdict distinctive`.

use std::process::ExitCode;

use serde::Serialize;
use verdict_analysis::{
    Confidence, DistinctiveOptions, DistinctivenessReport, FlatRecord, Sentiment,
    score_distinctive_terms,
};
use verdict_text::LanguageTag;

use crate::cli::{
    args::{DistinctiveCommand, OutputMode},
    context::CommandContext,
    output::{dim, distinctive_table, print_flat, print_group_header, print_json, warning},
};

/// JSON output for `verdict distinctive`.
#[derive(Serialize)]
struct JsonDistinctiveOutput<'a> {
    /// Language code.
    language: &'a LanguageTag,
    /// Corpus identifier used for stopwords, if any.
    corpus: Option<&'a str>,
    /// Scored terms for both groups.
    report: &'a DistinctivenessReport,
}

/// Applies CLI overrides to the configured options.
fn options(ctx: &CommandContext, cmd: &DistinctiveCommand) -> DistinctiveOptions {
    let mut options = DistinctiveOptions::from(&ctx.config.distinctive);
    if let Some(range) = cmd.range {
        options.ngram_range = range;
    }
    if let Some(top) = cmd.top {
        options.top_n = top;
    }
    if let Some(min_df) = cmd.min_df {
        options.min_df = min_df;
    }
    if let Some(max_features) = cmd.max_features {
        options.max_features = (max_features > 0).then_some(max_features);
    }
    options
}

/// Scores phrases that separate positive from negative reviews.
pub fn run(ctx: &CommandContext, cmd: &DistinctiveCommand) -> ExitCode {
    let options = options(ctx, cmd);
    if let Err(e) = options.validate() {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    let dataset = match ctx.load_dataset(&cmd.input.dataset) {
        Ok(dataset) => dataset,
        Err(code) => return code,
    };
    let language = &cmd.input.language;
    let corpus_id = cmd.input.corpus.as_deref();
    let corpus = ctx.corpus(&dataset, language, corpus_id);

    let report = match score_distinctive_terms(
        corpus.partition(language, Sentiment::Positive),
        corpus.partition(language, Sentiment::Negative),
        &options,
    ) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cmd.output.mode() {
        OutputMode::Json => print_json(&JsonDistinctiveOutput {
            language,
            corpus: corpus_id,
            report: &report,
        }),
        OutputMode::Flat => {
            let records: Vec<FlatRecord> = report
                .flat_records()
                .into_iter()
                .map(|mut record| {
                    record.group = format!("{}/{}", language.code(), record.group);
                    record
                })
                .collect();
            print_flat(&records)
        }
        OutputMode::Table => {
            print_report(language, &report);
            ExitCode::SUCCESS
        }
    }
}

/// Prints both term lists and any caveats.
fn print_report(language: &LanguageTag, report: &DistinctivenessReport) {
    if let Confidence::Low(reason) = &report.confidence {
        println!("{}", warning(&format!("Low confidence: {reason}")));
    }
    if report.mixed_lengths {
        println!(
            "{}",
            warning("Bigrams and trigrams are ranked together; trigram scores overlap their bigrams")
        );
    }
    if report.confidence.is_low() || report.mixed_lengths {
        println!();
    }

    for group in [Sentiment::Positive, Sentiment::Negative] {
        let documents = match group {
            Sentiment::Positive => report.positive_documents,
            Sentiment::Negative => report.negative_documents,
        };
        print_group_header(language, group, documents);
        let terms = report.terms(group);
        if terms.is_empty() {
            println!("{}", dim("No distinctive terms."));
        } else {
            println!("{}", distinctive_table(terms));
        }
        println!();
    }

    println!(
        "{}",
        dim(&format!(
            "{} terms in vocabulary, n-gram range {}-{}",
            report.vocabulary_size, report.ngram_range.0, report.ngram_range.1
        ))
    );
}
