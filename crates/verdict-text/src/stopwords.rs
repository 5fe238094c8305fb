//! Stopword filtering for review tokens.
//!
//! Stopwords come from three sources:
//! - a curated built-in list per supported language, optionally extended with
//!   the stopwords-iso list from the `stop-words` crate
//! - a user-defined universal list
//! - user-defined per-corpus lists, keyed `"<corpus>:latin"` and
//!   `"<corpus>:logographic"`
//!
//! A [`StopwordStore`] holds the configured sources. Each tokenize call gets an
//! immutable [`StopwordSet`] snapshot for one language and corpus.

use std::collections::{HashMap, HashSet};

use stop_words::LANGUAGE;
use verdict_config::StopwordSettings;

use crate::{LanguageTag, ScriptFamily};

/// Configured stopword sources.
#[derive(Debug, Clone, Default)]
pub struct StopwordStore {
    /// Terms ignored for every corpus.
    universal: HashSet<String>,
    /// Per-corpus terms keyed by [`StopwordStore::corpus_key`].
    per_corpus: HashMap<String, HashSet<String>>,
    /// Whether the extended built-in lists are applied.
    extended: bool,
}

impl StopwordStore {
    /// Creates a store holding only the built-in lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from merged configuration.
    pub fn from_settings(settings: &StopwordSettings) -> Self {
        let mut store = Self {
            universal: settings.universal.iter().cloned().collect(),
            per_corpus: HashMap::new(),
            extended: settings.extended,
        };
        for (corpus, terms) in &settings.corpus {
            store.add_corpus_terms(corpus, ScriptFamily::Latin, terms.latin.iter().cloned());
            store.add_corpus_terms(
                corpus,
                ScriptFamily::Logographic,
                terms.logographic.iter().cloned(),
            );
        }
        store
    }

    /// Returns the per-corpus key for a corpus and script family.
    pub fn corpus_key(corpus: &str, family: ScriptFamily) -> String {
        format!("{corpus}:{family}")
    }

    /// Adds terms to the universal list.
    pub fn add_universal<I>(&mut self, terms: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.universal.extend(terms);
    }

    /// Adds terms to one corpus list.
    pub fn add_corpus_terms<I>(&mut self, corpus: &str, family: ScriptFamily, terms: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.per_corpus
            .entry(Self::corpus_key(corpus, family))
            .or_default()
            .extend(terms);
    }

    /// Enables or disables the extended built-in lists.
    pub fn set_extended(&mut self, extended: bool) {
        self.extended = extended;
    }

    /// Returns the number of configured corpus lists.
    pub fn corpus_lists(&self) -> usize {
        self.per_corpus.len()
    }

    /// Takes an immutable snapshot for one language and optional corpus.
    ///
    /// Generic-script languages get an empty set: the generic path performs no
    /// stopword removal. Latin-script terms are case-folded to match tokens.
    pub fn snapshot(&self, language: &LanguageTag, corpus: Option<&str>) -> StopwordSet {
        let family = language.script_family();
        let fold = |term: &str| match family {
            ScriptFamily::Latin => term.to_lowercase(),
            _ => term.to_string(),
        };

        let mut words: HashSet<String> = HashSet::new();
        match family {
            ScriptFamily::Generic => return StopwordSet { words },
            ScriptFamily::Latin => {
                words.extend(ENGLISH_STOPWORDS.iter().map(|w| (*w).to_string()));
                if self.extended {
                    words.extend(stop_words::get(LANGUAGE::English).iter().map(|w| fold(w)));
                }
            }
            ScriptFamily::Logographic => {
                words.extend(CHINESE_STOPWORDS.iter().map(|w| (*w).to_string()));
                if self.extended {
                    words.extend(stop_words::get(LANGUAGE::Chinese).iter().map(|w| fold(w)));
                }
            }
        }

        words.extend(self.universal.iter().map(|w| fold(w)));
        if let Some(corpus) = corpus
            && let Some(terms) = self.per_corpus.get(&Self::corpus_key(corpus, family))
        {
            words.extend(terms.iter().map(|w| fold(w)));
        }

        StopwordSet { words }
    }
}

/// An immutable set of terms to drop, matched by exact string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    /// Terms in the form tokens take after normalization.
    words: HashSet<String>,
}

impl StopwordSet {
    /// Creates an empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Checks if a token is a stopword.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Returns the number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<String> for StopwordSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

/// Curated English stopwords for review text.
static ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "both", "each", "few", "more", "most",
    "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too",
    "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now", "d",
    "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Curated Simplified Chinese stopwords for review text.
static CHINESE_STOPWORDS: &[&str] = &[
    "的", "了", "和", "是", "在", "我", "有", "个", "不", "这", "你", "他", "她", "们", "也", "就",
    "都", "而", "及", "与", "着", "或", "一", "上", "下", "来", "去", "得", "到", "过", "能", "会",
    "可", "要", "说", "看", "让", "还", "用", "把", "被", "给", "没", "很", "比", "对", "于", "为",
    "从", "向", "以", "因", "由", "跟", "随", "等", "之", "但", "却", "又", "只", "当", "如", "若",
    "则", "将", "且", "并", "即", "便", "吧", "呢", "吗", "啊", "哦", "嗯", "哈", "呀", "哎", "哪",
    "什么", "怎么", "为什么", "多少", "几个", "这个", "那个", "这些", "那些", "这样", "那样",
    "怎样", "如何", "可以", "应该", "必须", "需要", "想要",
];
