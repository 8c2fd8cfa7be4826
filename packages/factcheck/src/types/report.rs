//! The terminal artifact of an article analysis.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::pipeline::aggregate::overall_confidence;
use crate::types::verdict::VerdictRecord;

/// Complete analysis of one article: summary, per-claim verdicts in the
/// original claim order, and the ethics critique.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub title: String,
    pub url: String,
    pub summary: String,
    pub verified_claims: Vec<VerdictRecord>,
    pub ethics_analysis: String,
    pub generated_at: DateTime<Utc>,
}

impl AnalysisReport {
    /// Quality-weighted mean confidence across all verdicts.
    pub fn overall_confidence(&self) -> f64 {
        overall_confidence(&self.verified_claims)
    }
}
