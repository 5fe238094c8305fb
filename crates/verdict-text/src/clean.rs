//! Markup and noise removal applied before segmentation.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Web links, with or without a scheme.
static RE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:https?://|www\.)\S*").expect("url regex"));

/// BBCode tags such as `[b]`, `[/spoiler]`, `[h1]` and `[url=...]`.
static RE_BBCODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[/?[a-zA-Z][a-zA-Z0-9]*(?:=[^\]]*)?\]").expect("bbcode regex"));

/// HTML tags.
static RE_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)</?[a-z][^>]*>").expect("tag regex"));

/// Runs of a repeated punctuation mark.
static RE_REPEATED_PUNCT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!{2,}|\?{2,}|\.{2,}|,{2,}|:{2,}|;{2,}|！{2,}|？{2,}|。{2,}|，{2,}")
        .expect("punctuation regex")
});

/// Whitespace runs.
static RE_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Strips links and markup from review text and normalizes spacing.
///
/// HTML entities are decoded first so encoded tags are removed too. Tags go
/// before links so `[url=...]` attributes do not swallow the link text. Runs of a
/// repeated punctuation mark collapse to a single mark, and whitespace runs
/// collapse to one space. The result is trimmed.
pub fn clean_text(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let decoded = html_escape::decode_html_entities(text);
    let out = RE_BBCODE.replace_all(&decoded, " ");
    let out = RE_TAGS.replace_all(&out, " ");
    let out = RE_URL.replace_all(&out, " ");
    let out = RE_REPEATED_PUNCT.replace_all(&out, |caps: &Captures<'_>| {
        caps[0].chars().next().map(String::from).unwrap_or_default()
    });
    let out = RE_WS.replace_all(&out, " ");

    out.trim().to_string()
}
