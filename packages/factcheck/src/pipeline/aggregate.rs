//! Confidence aggregation across verdicts.

use crate::types::verdict::{EvidenceQuality, VerdictRecord};

/// Weight applied to a verdict's raw confidence based on how good its
/// evidence was. Unrecognized qualities never reach this point; they
/// degrade to `Insufficient` at the parse boundary and land on the same
/// 0.3 weight.
pub fn quality_multiplier(quality: EvidenceQuality) -> f64 {
    match quality {
        EvidenceQuality::Strong => 1.0,
        EvidenceQuality::Moderate => 0.8,
        EvidenceQuality::Weak => 0.6,
        EvidenceQuality::Insufficient => 0.3,
    }
}

/// Quality-weighted mean confidence over all verdicts, in [0, 1].
/// Defined as 0.0 for an empty input.
pub fn overall_confidence(verdicts: &[VerdictRecord]) -> f64 {
    if verdicts.is_empty() {
        return 0.0;
    }

    let total: f64 = verdicts
        .iter()
        .map(|v| v.confidence * quality_multiplier(v.evidence_quality))
        .sum();

    total / verdicts.len() as f64
}
