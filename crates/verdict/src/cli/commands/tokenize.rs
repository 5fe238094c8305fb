//! Implementation of `verdict tokenize`.

use std::process::ExitCode;

use serde::Serialize;
use verdict_text::{LanguageTag, ScriptFamily, TokenSequence, clean_text};

use crate::cli::{
    args::TokenizeCommand,
    context::CommandContext,
    output::{dim, print_json, subheader},
};

/// JSON output for `verdict tokenize`.
#[derive(Serialize)]
struct JsonTokenizeOutput<'a> {
    /// Language code.
    language: &'a LanguageTag,
    /// Tokenization path the language uses.
    script: ScriptFamily,
    /// Text after cleaning.
    cleaned: String,
    /// Stopwords applied.
    stopwords: usize,
    /// Normalized tokens.
    tokens: &'a TokenSequence,
}

/// Shows the cleaning and tokenization of one text.
pub fn run(ctx: &CommandContext, cmd: &TokenizeCommand) -> ExitCode {
    let language = &cmd.language;
    let stopwords = ctx.stopwords.snapshot(language, cmd.corpus.as_deref());
    let tokens = ctx.tokenizer.tokenize(&cmd.text, language, &stopwords);

    if cmd.json {
        return print_json(&JsonTokenizeOutput {
            language,
            script: language.script_family(),
            cleaned: clean_text(&cmd.text),
            stopwords: stopwords.len(),
            tokens: &tokens,
        });
    }

    println!(
        "{} {}",
        subheader(language.display_name()),
        dim(&format!(
            "({} script, {} stopwords)",
            language.script_family(),
            stopwords.len()
        ))
    );
    if tokens.is_empty() {
        println!("{}", dim("(no tokens)"));
    } else {
        println!("{}", tokens.tokens().join(" | "));
    }
    ExitCode::SUCCESS
}
