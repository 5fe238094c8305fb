//! Review counts and Steam-style categories per language.

use std::{collections::BTreeMap, fmt};

use serde::Serialize;
use verdict_text::LanguageTag;

use crate::{Review, Sentiment};

/// Steam-style label for a group's share of positive reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReviewCategory {
    /// 95% or more positive.
    #[serde(rename = "Overwhelmingly Positive")]
    OverwhelminglyPositive,
    /// 80% or more positive.
    #[serde(rename = "Very Positive")]
    VeryPositive,
    /// 70% or more positive.
    #[serde(rename = "Mostly Positive")]
    MostlyPositive,
    /// 40% or more positive.
    Mixed,
    /// 20% or more positive.
    #[serde(rename = "Mostly Negative")]
    MostlyNegative,
    /// Under 20% positive.
    #[serde(rename = "Very Negative")]
    VeryNegative,
    /// Empty group.
    #[serde(rename = "No Reviews")]
    NoReviews,
}

impl ReviewCategory {
    /// Categorizes a group by its positive and total counts.
    pub fn from_counts(positive: usize, total: usize) -> Self {
        if total == 0 {
            return Self::NoReviews;
        }
        match positive_rate(positive, total) {
            r if r >= 95.0 => Self::OverwhelminglyPositive,
            r if r >= 80.0 => Self::VeryPositive,
            r if r >= 70.0 => Self::MostlyPositive,
            r if r >= 40.0 => Self::Mixed,
            r if r >= 20.0 => Self::MostlyNegative,
            _ => Self::VeryNegative,
        }
    }

    /// Returns the display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::OverwhelminglyPositive => "Overwhelmingly Positive",
            Self::VeryPositive => "Very Positive",
            Self::MostlyPositive => "Mostly Positive",
            Self::Mixed => "Mixed",
            Self::MostlyNegative => "Mostly Negative",
            Self::VeryNegative => "Very Negative",
            Self::NoReviews => "No Reviews",
        }
    }
}

impl fmt::Display for ReviewCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Percentage of positive reviews; zero for an empty group.
fn positive_rate(positive: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        positive as f64 * 100.0 / total as f64
    }
}

/// Counts for one language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageSummary {
    /// Language code.
    pub language: LanguageTag,
    /// Display name of the language.
    pub name: String,
    /// All reviews.
    pub total: usize,
    /// Recommended reviews.
    pub positive: usize,
    /// Not-recommended reviews.
    pub negative: usize,
    /// Percentage of recommended reviews.
    pub positive_rate: f64,
    /// Category for the positive rate.
    pub category: ReviewCategory,
}

impl LanguageSummary {
    /// Builds a summary from counts.
    fn new(language: LanguageTag, positive: usize, negative: usize) -> Self {
        let total = positive + negative;
        Self {
            name: language.display_name().to_string(),
            language,
            total,
            positive,
            negative,
            positive_rate: positive_rate(positive, total),
            category: ReviewCategory::from_counts(positive, total),
        }
    }
}

/// Per-language counts plus an overall line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusSummary {
    /// Languages, most reviews first, ties by code.
    pub languages: Vec<LanguageSummary>,
    /// All reviews.
    pub total: usize,
    /// Recommended reviews.
    pub positive: usize,
    /// Percentage of recommended reviews.
    pub positive_rate: f64,
    /// Category over all reviews.
    pub category: ReviewCategory,
}

impl CorpusSummary {
    /// Counts reviews per language and sentiment.
    pub fn from_reviews<'a, I>(reviews: I) -> Self
    where
        I: IntoIterator<Item = &'a Review>,
    {
        let mut counts: BTreeMap<LanguageTag, (usize, usize)> = BTreeMap::new();
        for review in reviews {
            let entry = counts.entry(review.language.clone()).or_default();
            match review.sentiment {
                Sentiment::Positive => entry.0 += 1,
                Sentiment::Negative => entry.1 += 1,
            }
        }

        let mut languages: Vec<LanguageSummary> = counts
            .into_iter()
            .map(|(language, (positive, negative))| {
                LanguageSummary::new(language, positive, negative)
            })
            .collect();
        languages.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.language.cmp(&b.language)));

        let total = languages.iter().map(|l| l.total).sum();
        let positive = languages.iter().map(|l| l.positive).sum();
        Self {
            languages,
            total,
            positive,
            positive_rate: positive_rate(positive, total),
            category: ReviewCategory::from_counts(positive, total),
        }
    }

    /// Returns the summary for one language.
    pub fn language(&self, language: &LanguageTag) -> Option<&LanguageSummary> {
        self.languages.iter().find(|l| &l.language == language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_thresholds() {
        let cases = [
            (95, 100, ReviewCategory::OverwhelminglyPositive),
            (94, 100, ReviewCategory::VeryPositive),
            (80, 100, ReviewCategory::VeryPositive),
            (70, 100, ReviewCategory::MostlyPositive),
            (69, 100, ReviewCategory::Mixed),
            (40, 100, ReviewCategory::Mixed),
            (20, 100, ReviewCategory::MostlyNegative),
            (19, 100, ReviewCategory::VeryNegative),
            (0, 3, ReviewCategory::VeryNegative),
            (0, 0, ReviewCategory::NoReviews),
        ];
        for (positive, total, expected) in cases {
            assert_eq!(
                ReviewCategory::from_counts(positive, total),
                expected,
                "{positive}/{total}"
            );
        }
    }

    #[test]
    fn summarizes_per_language() {
        let mut reviews = vec![
            Review::new("a", LanguageTag::German, Sentiment::Positive),
            Review::new("b", LanguageTag::SimplifiedChinese, Sentiment::Negative),
        ];
        for i in 0..4 {
            let sentiment = if i < 3 { Sentiment::Positive } else { Sentiment::Negative };
            reviews.push(Review::new("c", LanguageTag::English, sentiment));
        }

        let summary = CorpusSummary::from_reviews(&reviews);
        assert_eq!(summary.total, 6);
        assert_eq!(summary.positive, 4);
        assert_eq!(summary.languages[0].language, LanguageTag::English);
        // Equal totals fall back to language order.
        assert_eq!(summary.languages[1].language, LanguageTag::SimplifiedChinese);
        assert_eq!(summary.languages[2].language, LanguageTag::German);

        let english = summary.language(&LanguageTag::English).unwrap();
        assert_eq!((english.positive, english.negative), (3, 1));
        assert!((english.positive_rate - 75.0).abs() < 1e-9);
        assert_eq!(english.category, ReviewCategory::MostlyPositive);
        assert_eq!(english.name, "English");
    }

    #[test]
    fn empty_summary() {
        let reviews: Vec<Review> = Vec::new();
        let summary = CorpusSummary::from_reviews(&reviews);
        assert!(summary.languages.is_empty());
        assert_eq!(summary.category, ReviewCategory::NoReviews);
        assert_eq!(summary.positive_rate, 0.0);
    }

    #[test]
    fn category_serializes_as_label() {
        let json = serde_json::to_string(&ReviewCategory::OverwhelminglyPositive).unwrap();
        assert_eq!(json, "\"Overwhelmingly Positive\"");
    }
}
