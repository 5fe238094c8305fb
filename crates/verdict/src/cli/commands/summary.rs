//! Implementation of `verdict summary`.

use std::process::ExitCode;

use serde::Serialize;
use verdict_analysis::{CorpusSummary, DatasetStats};

use crate::cli::{
    args::SummaryCommand,
    context::CommandContext,
    output::{dim, print_json, rate, subheader, summary_table},
};

/// JSON output for `verdict summary`.
#[derive(Serialize)]
struct JsonSummaryOutput<'a> {
    /// Record counts from reading the dataset.
    records: DatasetStats,
    /// Per-language counts.
    summary: &'a CorpusSummary,
}

/// Counts reviews per language and sentiment.
pub fn run(ctx: &CommandContext, cmd: &SummaryCommand) -> ExitCode {
    let dataset = match ctx.load_dataset(&cmd.dataset) {
        Ok(dataset) => dataset,
        Err(code) => return code,
    };
    let summary = CorpusSummary::from_reviews(&dataset.reviews);

    if cmd.json {
        return print_json(&JsonSummaryOutput {
            records: dataset.stats,
            summary: &summary,
        });
    }

    if summary.languages.is_empty() {
        println!("{}", dim("No reviews found."));
    } else {
        println!("{}", summary_table(&summary));
        println!(
            "{} {} {}",
            subheader("Overall:"),
            rate(
                &format!("{:.1}% positive", summary.positive_rate),
                summary.positive_rate
            ),
            dim(&format!("({}, {} reviews)", summary.category, summary.total))
        );
    }
    if dataset.stats.skipped > 0 {
        println!(
            "{}",
            dim(&format!(
                "{} malformed records skipped",
                dataset.stats.skipped
            ))
        );
    }
    ExitCode::SUCCESS
}
