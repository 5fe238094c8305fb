//! Review text normalization for verdict.
//!
//! Raw review text goes through three steps before analysis:
//!
//! 1. **Cleaning**: links, BBCode, HTML tags and punctuation runs are removed
//! 2. **Segmentation**: a [`Segmenter`] picked by the language's [`ScriptFamily`]
//!    splits the text (word boundaries, dictionary segmentation or whitespace)
//! 3. **Filtering**: numerals are dropped everywhere, stopwords on the Latin and
//!    logographic paths
//!
//! Stopwords are configured once in a [`StopwordStore`] and passed to each call
//! as an immutable [`StopwordSet`] snapshot.

#![warn(missing_docs)]

mod clean;
mod language;
mod stopwords;
mod tokenize;

pub use clean::clean_text;
pub use language::{LanguageTag, ScriptFamily};
pub use stopwords::{StopwordSet, StopwordStore};
pub use tokenize::{
    LatinSegmenter, LogographicSegmenter, Segmenter, TokenSequence, Tokenizer,
    WhitespaceSegmenter, display_phrase, is_numeral,
};
