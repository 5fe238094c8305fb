//! Implementation of `verdict ngrams`.

use std::process::ExitCode;

use serde::Serialize;
use verdict_analysis::{NgramReport, Sentiment, SentimentFilter, rank};
use verdict_text::LanguageTag;

use crate::cli::{
    args::{NgramsCommand, OutputMode},
    context::CommandContext,
    output::{dim, group_label, ngram_table, print_flat, print_group_header, print_json},
};

/// JSON output for one sentiment group.
#[derive(Serialize)]
struct JsonGroup<'a> {
    /// Sentiment of the group.
    sentiment: Sentiment,
    /// Ranked n-grams.
    report: &'a NgramReport,
}

/// JSON output for `verdict ngrams`.
#[derive(Serialize)]
struct JsonNgramsOutput<'a> {
    /// Language code.
    language: &'a LanguageTag,
    /// Corpus identifier used for stopwords, if any.
    corpus: Option<&'a str>,
    /// One entry per selected sentiment.
    groups: Vec<JsonGroup<'a>>,
}

/// Ranks the most frequent n-grams of each selected sentiment group.
pub fn run(ctx: &CommandContext, cmd: &NgramsCommand) -> ExitCode {
    let settings = &ctx.config.ngrams;
    let size = cmd.size.unwrap_or(settings.size);
    let min_frequency = cmd.min_frequency.unwrap_or(settings.min_frequency);
    let top_n = cmd.top.unwrap_or(settings.top_n);

    let dataset = match ctx.load_dataset(&cmd.input.dataset) {
        Ok(dataset) => dataset,
        Err(code) => return code,
    };
    let language = &cmd.input.language;
    let corpus_id = cmd.input.corpus.as_deref();
    let corpus = ctx.corpus(&dataset, language, corpus_id);

    let filter = SentimentFilter::from(cmd.sentiment);
    let mut reports = Vec::new();
    for &sentiment in filter.sentiments() {
        match rank(corpus.partition(language, sentiment), size, min_frequency, top_n) {
            Ok(report) => reports.push((sentiment, report)),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    match cmd.output.mode() {
        OutputMode::Json => print_json(&JsonNgramsOutput {
            language,
            corpus: corpus_id,
            groups: reports
                .iter()
                .map(|(sentiment, report)| JsonGroup {
                    sentiment: *sentiment,
                    report,
                })
                .collect(),
        }),
        OutputMode::Flat => {
            let records: Vec<_> = reports
                .iter()
                .flat_map(|(sentiment, report)| {
                    report.flat_records(&group_label(language, *sentiment))
                })
                .collect();
            print_flat(&records)
        }
        OutputMode::Table => {
            for (sentiment, report) in &reports {
                print_group_header(language, *sentiment, report.documents);
                if report.entries.is_empty() {
                    println!("{}", dim("No n-grams above the frequency threshold."));
                } else {
                    println!("{}", ngram_table(report));
                    println!(
                        "{}",
                        dim(&format!(
                            "{} n-grams, {} distinct",
                            report.total_ngrams, report.unique_ngrams
                        ))
                    );
                }
                println!();
            }
            ExitCode::SUCCESS
        }
    }
}
