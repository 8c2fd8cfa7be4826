//! Evidence items collected for a claim.

use serde::Serialize;

/// One piece of externally sourced material judged relevant to a claim.
///
/// Only items with `credibility_score > 0` are ever constructed by the
/// collector; score-0 sources are dropped before an item exists. Owned by
/// the batch iteration that created it and discarded after verification.
#[derive(Debug, Clone, Serialize)]
pub struct EvidenceItem {
    pub title: String,
    pub snippet: String,

    /// Fetched page text, bounded by the collector. On fetch failure this
    /// holds a readable error string rather than being absent.
    pub full_content: String,

    pub url: String,
    pub source_name: String,

    /// Date string as reported by the search service; possibly unparsed.
    pub published_date: String,

    /// Credibility tier score, 1..=3.
    pub credibility_score: u8,

    /// The planned query that surfaced this item.
    pub originating_query: String,
}
