//! Review tokenization.
//!
//! Text is cleaned, split by a [`Segmenter`] chosen from the language's
//! [`ScriptFamily`], then filtered: numerals are dropped on every path and
//! stopwords on the Latin and logographic paths.

use jieba_rs::Jieba;
use once_cell::sync::{Lazy, OnceCell};
use regex::Regex;
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::{LanguageTag, ScriptFamily, StopwordSet, clean::clean_text};

/// Digits with optional internal separators: `50`, `3,100`, `76.5`, `５０`.
static RE_NUMERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(?:[.,，．]\d+)*$").expect("numeral regex"));

/// Leading or trailing punctuation and symbols on a whitespace-split token.
static RE_EDGE_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{P}\p{S}]+|[\p{P}\p{S}]+$").expect("edge punctuation regex"));

/// Tokens made only of punctuation, symbols or spaces.
static RE_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{P}\p{S}\s]+$").expect("punctuation regex"));

/// Ordered normalized tokens derived from one review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenSequence(Vec<String>);

impl TokenSequence {
    /// Wraps already-normalized tokens.
    pub fn new(tokens: Vec<String>) -> Self {
        Self(tokens)
    }

    /// Returns the tokens.
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Joins the tokens with single spaces.
    ///
    /// Logographic tokens are space-joined too, so word boundaries survive
    /// later splitting.
    pub fn joined(&self) -> String {
        self.0.join(" ")
    }

}

impl From<Vec<String>> for TokenSequence {
    fn from(tokens: Vec<String>) -> Self {
        Self(tokens)
    }
}

impl From<Vec<&str>> for TokenSequence {
    fn from(tokens: Vec<&str>) -> Self {
        Self(tokens.into_iter().map(str::to_string).collect())
    }
}

/// Splits cleaned text into candidate tokens for one script family.
pub trait Segmenter {
    /// Splits text into tokens, case-folding where the script has case.
    fn segment(&self, text: &str) -> Vec<String>;

    /// Returns true if the family's shape rules keep the token.
    fn keep(&self, token: &str) -> bool;

    /// Returns true if stopwords apply to this family.
    fn removes_stopwords(&self) -> bool;
}

/// Word-boundary segmentation for space-delimited scripts.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatinSegmenter;

impl Segmenter for LatinSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .unicode_words()
            .map(str::to_string)
            .collect()
    }

    fn keep(&self, token: &str) -> bool {
        token.chars().count() > 1 || token == "a" || token == "i"
    }

    fn removes_stopwords(&self) -> bool {
        true
    }
}

/// Dictionary and HMM segmentation for logographic scripts.
pub struct LogographicSegmenter<'a> {
    /// Loaded segmentation dictionary.
    jieba: &'a Jieba,
}

impl<'a> LogographicSegmenter<'a> {
    /// Creates a segmenter over a loaded dictionary.
    pub fn new(jieba: &'a Jieba) -> Self {
        Self { jieba }
    }
}

impl Segmenter for LogographicSegmenter<'_> {
    fn segment(&self, text: &str) -> Vec<String> {
        self.jieba
            .cut(text, true)
            .into_iter()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn keep(&self, token: &str) -> bool {
        token.chars().count() > 1 && !RE_PUNCTUATION.is_match(token)
    }

    fn removes_stopwords(&self) -> bool {
        true
    }
}

/// Lowercase whitespace splitting for languages without a dedicated pipeline.
///
/// Punctuation and symbols at either end of a token are trimmed, so `50,`
/// and `(76)` reach the numeral filter as bare digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceSegmenter;

impl Segmenter for WhitespaceSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split_whitespace()
            .map(|t| RE_EDGE_PUNCTUATION.replace_all(t, "").into_owned())
            .collect()
    }

    fn keep(&self, token: &str) -> bool {
        !token.is_empty()
    }

    fn removes_stopwords(&self) -> bool {
        false
    }
}

/// Turns review text into token sequences.
///
/// The logographic dictionary is loaded on first use and kept for the life of
/// the tokenizer.
#[derive(Default)]
pub struct Tokenizer {
    /// Lazily loaded segmentation dictionary.
    jieba: OnceCell<Jieba>,
}

impl Tokenizer {
    /// Creates a tokenizer. No dictionary is loaded until it is needed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizes one review.
    ///
    /// Empty or whitespace-only input gives an empty sequence.
    pub fn tokenize(
        &self,
        text: &str,
        language: &LanguageTag,
        stopwords: &StopwordSet,
    ) -> TokenSequence {
        let cleaned = clean_text(text);
        if cleaned.is_empty() {
            return TokenSequence::default();
        }

        match language.script_family() {
            ScriptFamily::Latin => filter_tokens(&LatinSegmenter, &cleaned, stopwords),
            ScriptFamily::Logographic => {
                let segmenter = LogographicSegmenter::new(self.jieba());
                filter_tokens(&segmenter, &cleaned, stopwords)
            }
            ScriptFamily::Generic => filter_tokens(&WhitespaceSegmenter, &cleaned, stopwords),
        }
    }

    /// Returns the segmentation dictionary, loading it on first call.
    fn jieba(&self) -> &Jieba {
        self.jieba.get_or_init(|| {
            tracing::debug!("loading segmentation dictionary");
            Jieba::new()
        })
    }
}

/// Segments text and applies shape, numeral and stopword filters.
fn filter_tokens<S: Segmenter>(segmenter: &S, text: &str, stopwords: &StopwordSet) -> TokenSequence {
    let removes_stopwords = segmenter.removes_stopwords();
    segmenter
        .segment(text)
        .into_iter()
        .filter(|t| segmenter.keep(t))
        .filter(|t| !is_numeral(t))
        .filter(|t| !(removes_stopwords && stopwords.contains(t)))
        .collect::<Vec<_>>()
        .into()
}

/// Returns true if a token is a pure numeral.
pub fn is_numeral(token: &str) -> bool {
    RE_NUMERAL.is_match(token)
}

/// Returns true if the token contains a CJK unified ideograph.
fn is_logographic(token: &str) -> bool {
    token.chars().any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c))
}

/// Joins n-gram tokens for display.
///
/// Logographic phrases are written without separators, everything else with
/// single spaces.
pub fn display_phrase<S: AsRef<str>>(tokens: &[S]) -> String {
    let logographic = tokens.first().is_some_and(|t| is_logographic(t.as_ref()));
    let separator = if logographic { "" } else { " " };
    tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(separator)
}
