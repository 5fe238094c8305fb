//! Flat record form shared by every report.
//!
//! Reports nest their results; collaborators that write spreadsheets or
//! tables want one row per ranked term instead.

use serde::Serialize;

/// One ranked term as a flat row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatRecord {
    /// Result group, e.g. `positive` or `english/negative`.
    pub group: String,
    /// 1-based rank within the group.
    pub rank: usize,
    /// Display form of the term.
    pub term: String,
    /// Occurrence count (n-gram reports).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Share of all n-gram occurrences, in percent (n-gram reports).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    /// Distinctiveness score (distinctiveness reports).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}
