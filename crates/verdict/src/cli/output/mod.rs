//! Rendering and JSON serialization for CLI output.

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use comfy_table::{Cell, CellAlignment, Color, Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;
use verdict_analysis::{
    CorpusSummary, FlatRecord, NgramReport, ReviewCategory, ScoredTerm, Sentiment,
};
use verdict_highlight::{Highlighter, bar};
pub use verdict_highlight::{dim, header, rate, rule, sentiment, subheader, success, warning};
use verdict_text::LanguageTag;

/// Width of the frequency bars in n-gram tables.
const BAR_WIDTH: usize = 12;

/// Returns the flat-record group label, e.g. `english/positive`.
pub fn group_label(language: &LanguageTag, sentiment: Sentiment) -> String {
    format!("{}/{sentiment}", language.code())
}

/// Prints a header line for one sentiment group.
pub fn print_group_header(language: &LanguageTag, group: Sentiment, documents: usize) {
    println!(
        "{} {} {}",
        header(language.display_name()),
        sentiment(group.as_str(), group == Sentiment::Positive),
        dim(&format!("({documents} reviews)"))
    );
}

/// Serializes a value as pretty JSON, highlighted when stdout is a terminal.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            if io::stdout().is_terminal() {
                println!("{}", Highlighter::new().highlight_json(&json));
            } else {
                println!("{json}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints flat records as JSON lines, one record per line.
pub fn print_flat(records: &[FlatRecord]) -> ExitCode {
    for record in records {
        match serde_json::to_string(record) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

/// Creates a table with the shared style.
fn new_table<const N: usize>(columns: [&str; N]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(columns.to_vec());
    table
}

/// Renders ranked n-grams with counts, percentages and frequency bars.
///
/// Bars are scaled to the most frequent entry.
pub fn ngram_table(report: &NgramReport) -> Table {
    let mut table = new_table(["#", "Phrase", "Count", "%", ""]);
    let max = report.entries.first().map_or(0, |e| e.count);

    for (i, entry) in report.entries.iter().enumerate() {
        let fraction = if max == 0 {
            0.0
        } else {
            entry.count as f64 / max as f64
        };
        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(&entry.phrase),
            Cell::new(entry.count).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", entry.percentage)).set_alignment(CellAlignment::Right),
            Cell::new(bar(fraction, BAR_WIDTH)),
        ]);
    }
    table
}

/// Renders distinctive terms with their scores.
pub fn distinctive_table(terms: &[ScoredTerm]) -> Table {
    let mut table = new_table(["#", "Phrase", "Score"]);
    for term in terms {
        table.add_row(vec![
            Cell::new(term.rank).set_alignment(CellAlignment::Right),
            Cell::new(&term.phrase),
            Cell::new(format!("{:.4}", term.score)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Table color for a review category.
fn category_color(category: ReviewCategory) -> Color {
    match category {
        ReviewCategory::OverwhelminglyPositive
        | ReviewCategory::VeryPositive
        | ReviewCategory::MostlyPositive => Color::Green,
        ReviewCategory::Mixed => Color::Yellow,
        ReviewCategory::MostlyNegative | ReviewCategory::VeryNegative => Color::Red,
        ReviewCategory::NoReviews => Color::Grey,
    }
}

/// Renders per-language review counts.
pub fn summary_table(summary: &CorpusSummary) -> Table {
    let mut table = new_table([
        "Language",
        "Code",
        "Reviews",
        "Positive",
        "Negative",
        "Positive %",
        "Category",
    ]);
    for language in &summary.languages {
        table.add_row(vec![
            Cell::new(&language.name),
            Cell::new(language.language.code()),
            Cell::new(language.total).set_alignment(CellAlignment::Right),
            Cell::new(language.positive).set_alignment(CellAlignment::Right),
            Cell::new(language.negative).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", language.positive_rate))
                .set_alignment(CellAlignment::Right),
            Cell::new(language.category).fg(category_color(language.category)),
        ]);
    }
    table
}
