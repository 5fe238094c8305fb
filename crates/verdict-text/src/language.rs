//! Review language tags and the script family each one is tokenized with.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A review language, named by its Steam language code.
///
/// Unknown codes are kept verbatim in [`LanguageTag::Other`] and tokenized with
/// the generic splitter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LanguageTag {
    /// `english`
    English,
    /// `schinese`
    SimplifiedChinese,
    /// `tchinese`
    TraditionalChinese,
    /// `japanese`
    Japanese,
    /// `koreana`
    Korean,
    /// `russian`
    Russian,
    /// `german`
    German,
    /// `french`
    French,
    /// `spanish`
    Spanish,
    /// `latam`
    LatinAmericanSpanish,
    /// `portuguese`
    Portuguese,
    /// `brazilian`
    BrazilianPortuguese,
    /// `polish`
    Polish,
    /// `turkish`
    Turkish,
    /// `thai`
    Thai,
    /// `italian`
    Italian,
    /// `dutch`
    Dutch,
    /// `danish`
    Danish,
    /// `swedish`
    Swedish,
    /// `finnish`
    Finnish,
    /// `norwegian`
    Norwegian,
    /// `hungarian`
    Hungarian,
    /// `czech`
    Czech,
    /// `romanian`
    Romanian,
    /// `bulgarian`
    Bulgarian,
    /// `greek`
    Greek,
    /// `vietnamese`
    Vietnamese,
    /// `ukrainian`
    Ukrainian,
    /// `arabic`
    Arabic,
    /// Any code outside the known set.
    Other(String),
}

/// Known languages as `(tag, code, display name)`.
const KNOWN: &[(LanguageTag, &str, &str)] = &[
    (LanguageTag::English, "english", "English"),
    (LanguageTag::SimplifiedChinese, "schinese", "Simplified Chinese"),
    (LanguageTag::TraditionalChinese, "tchinese", "Traditional Chinese"),
    (LanguageTag::Japanese, "japanese", "Japanese"),
    (LanguageTag::Korean, "koreana", "Korean"),
    (LanguageTag::Russian, "russian", "Russian"),
    (LanguageTag::German, "german", "German"),
    (LanguageTag::French, "french", "French"),
    (LanguageTag::Spanish, "spanish", "Spanish (Spain)"),
    (LanguageTag::LatinAmericanSpanish, "latam", "Spanish (Latin America)"),
    (LanguageTag::Portuguese, "portuguese", "Portuguese"),
    (LanguageTag::BrazilianPortuguese, "brazilian", "Portuguese (Brazil)"),
    (LanguageTag::Polish, "polish", "Polish"),
    (LanguageTag::Turkish, "turkish", "Turkish"),
    (LanguageTag::Thai, "thai", "Thai"),
    (LanguageTag::Italian, "italian", "Italian"),
    (LanguageTag::Dutch, "dutch", "Dutch"),
    (LanguageTag::Danish, "danish", "Danish"),
    (LanguageTag::Swedish, "swedish", "Swedish"),
    (LanguageTag::Finnish, "finnish", "Finnish"),
    (LanguageTag::Norwegian, "norwegian", "Norwegian"),
    (LanguageTag::Hungarian, "hungarian", "Hungarian"),
    (LanguageTag::Czech, "czech", "Czech"),
    (LanguageTag::Romanian, "romanian", "Romanian"),
    (LanguageTag::Bulgarian, "bulgarian", "Bulgarian"),
    (LanguageTag::Greek, "greek", "Greek"),
    (LanguageTag::Vietnamese, "vietnamese", "Vietnamese"),
    (LanguageTag::Ukrainian, "ukrainian", "Ukrainian"),
    (LanguageTag::Arabic, "arabic", "Arabic"),
];

/// The tokenization strategy a language is dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptFamily {
    /// Space-delimited script with word-boundary splitting.
    Latin,
    /// Script without word boundaries, segmented statistically.
    Logographic,
    /// Whitespace splitting with no stopword support.
    Generic,
}

impl LanguageTag {
    /// Parses a language code. Codes are matched case-insensitively.
    pub fn parse(code: &str) -> Self {
        let code = code.trim();
        KNOWN
            .iter()
            .find(|(_, known, _)| known.eq_ignore_ascii_case(code))
            .map_or_else(|| Self::Other(code.to_string()), |(tag, _, _)| tag.clone())
    }

    /// Returns the Steam language code.
    pub fn code(&self) -> &str {
        match self {
            Self::Other(code) => code,
            known => KNOWN
                .iter()
                .find(|(tag, _, _)| tag == known)
                .map_or("", |(_, code, _)| code),
        }
    }

    /// Returns a human-readable language name.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Other(code) => code,
            known => KNOWN
                .iter()
                .find(|(tag, _, _)| tag == known)
                .map_or("", |(_, _, name)| name),
        }
    }

    /// Returns the script family used to tokenize this language.
    ///
    /// Only English and Simplified Chinese have dedicated pipelines.
    pub fn script_family(&self) -> ScriptFamily {
        match self {
            Self::English => ScriptFamily::Latin,
            Self::SimplifiedChinese => ScriptFamily::Logographic,
            _ => ScriptFamily::Generic,
        }
    }

    /// Returns every known language tag.
    pub fn known() -> impl Iterator<Item = &'static Self> {
        KNOWN.iter().map(|(tag, _, _)| tag)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<&str> for LanguageTag {
    fn from(code: &str) -> Self {
        Self::parse(code)
    }
}

impl From<String> for LanguageTag {
    fn from(code: String) -> Self {
        Self::parse(&code)
    }
}

impl From<LanguageTag> for String {
    fn from(tag: LanguageTag) -> Self {
        tag.code().to_string()
    }
}

impl fmt::Display for ScriptFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latin => write!(f, "latin"),
            Self::Logographic => write!(f, "logographic"),
            Self::Generic => write!(f, "generic"),
        }
    }
}
