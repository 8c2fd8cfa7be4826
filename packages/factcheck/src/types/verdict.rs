//! Verdict records produced by claim verification.
//!
//! Model output is converted here, at the parse boundary, so the rest of
//! the pipeline never handles untyped maps. Conversion is lenient: an
//! unknown verdict degrades to `Unverifiable`, an unknown evidence quality
//! to `Insufficient`, an unknown consensus to `Low`, and confidence is
//! clamped into [0, 1].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Categorical judgment on a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    True,
    False,
    Misleading,
    NeedsContext,
    Unverifiable,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::True => "True",
            Self::False => "False",
            Self::Misleading => "Misleading",
            Self::NeedsContext => "Needs context",
            Self::Unverifiable => "Unverifiable",
        }
    }

    pub fn from_str_lenient(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("true") {
            Self::True
        } else if s.eq_ignore_ascii_case("false") {
            Self::False
        } else if s.eq_ignore_ascii_case("misleading") {
            Self::Misleading
        } else if s.eq_ignore_ascii_case("needs context") {
            Self::NeedsContext
        } else {
            Self::Unverifiable
        }
    }
}

/// Strength of the evidence behind a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvidenceQuality {
    Strong,
    Moderate,
    Weak,
    Insufficient,
}

impl EvidenceQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Weak => "Weak",
            Self::Insufficient => "Insufficient",
        }
    }

    pub fn from_str_lenient(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("strong") {
            Self::Strong
        } else if s.eq_ignore_ascii_case("moderate") {
            Self::Moderate
        } else if s.eq_ignore_ascii_case("weak") {
            Self::Weak
        } else {
            Self::Insufficient
        }
    }
}

/// How much the consulted sources agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceConsensus {
    High,
    Medium,
    Low,
    Conflicting,
}

impl SourceConsensus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Conflicting => "Conflicting",
        }
    }

    pub fn from_str_lenient(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("high") {
            Self::High
        } else if s.eq_ignore_ascii_case("medium") {
            Self::Medium
        } else if s.eq_ignore_ascii_case("conflicting") {
            Self::Conflicting
        } else {
            Self::Low
        }
    }
}

macro_rules! string_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Ok(Self::from_str_lenient(&s))
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_serde!(Verdict);
string_serde!(EvidenceQuality);
string_serde!(SourceConsensus);

/// The placeholder fallacy list meaning "nothing flagged".
pub const NO_FALLACIES: &str = "None found";

/// The final judgment on one claim plus its supporting metadata.
///
/// Immutable after creation; collected into the report in original claim
/// order regardless of completion order.
#[derive(Debug, Clone, Serialize)]
pub struct VerdictRecord {
    pub claim: String,
    pub verdict: Verdict,
    pub reasoning: String,
    pub evidence_quality: EvidenceQuality,
    pub source_consensus: SourceConsensus,
    pub fallacies: Vec<String>,
    pub confidence: f64,
}

impl VerdictRecord {
    /// Convert parsed model output into a record.
    ///
    /// Every field is optional on the wire: a missing claim is backfilled
    /// from the stub, missing enums take their degraded defaults, and a
    /// missing or out-of-range confidence clamps to [0, 1].
    pub fn from_value(value: &Value, claim_text: &str) -> Self {
        let claim = value
            .get("claim")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(claim_text)
            .to_string();

        let verdict = Verdict::from_str_lenient(
            value.get("verdict").and_then(Value::as_str).unwrap_or(""),
        );
        let evidence_quality = EvidenceQuality::from_str_lenient(
            value
                .get("evidence_quality")
                .and_then(Value::as_str)
                .unwrap_or(""),
        );
        let source_consensus = SourceConsensus::from_str_lenient(
            value
                .get("source_consensus")
                .and_then(Value::as_str)
                .unwrap_or(""),
        );

        let reasoning = value
            .get("reasoning")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let mut fallacies: Vec<String> = value
            .get("fallacies")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        if fallacies.is_empty() {
            fallacies.push(NO_FALLACIES.to_string());
        }

        let confidence = value
            .get("confidence")
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
            .clamp(0.0, 1.0);

        Self {
            claim,
            verdict,
            reasoning,
            evidence_quality,
            source_consensus,
            fallacies,
            confidence,
        }
    }

    /// The synthesized record for a claim whose verification task failed.
    /// Guarantees every claim yields exactly one row in the report.
    pub fn fallback(claim_text: &str, failure: &str) -> Self {
        Self {
            claim: claim_text.to_string(),
            verdict: Verdict::Unverifiable,
            reasoning: format!("Verification failed: {failure}"),
            evidence_quality: EvidenceQuality::Insufficient,
            source_consensus: SourceConsensus::Low,
            fallacies: vec![NO_FALLACIES.to_string()],
            confidence: 0.0,
        }
    }

    /// True when the model flagged at least one real fallacy.
    pub fn has_fallacies(&self) -> bool {
        self.fallacies.iter().any(|f| f != NO_FALLACIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_complete() {
        let value = json!({
            "claim": "GDP grew 2.1% last quarter",
            "verdict": "True",
            "reasoning": "Multiple wire services report the same figure",
            "evidence_quality": "Strong",
            "source_consensus": "High",
            "fallacies": ["None found"],
            "confidence": 0.9
        });
        let record = VerdictRecord::from_value(&value, "fallback text");
        assert_eq!(record.claim, "GDP grew 2.1% last quarter");
        assert_eq!(record.verdict, Verdict::True);
        assert_eq!(record.evidence_quality, EvidenceQuality::Strong);
        assert_eq!(record.source_consensus, SourceConsensus::High);
        assert!((record.confidence - 0.9).abs() < f64::EPSILON);
        assert!(!record.has_fallacies());
    }

    #[test]
    fn test_from_value_degrades_unknown_labels() {
        let value = json!({
            "verdict": "Probably",
            "evidence_quality": "Excellent",
            "source_consensus": "Unanimous",
            "confidence": 1.7
        });
        let record = VerdictRecord::from_value(&value, "the claim");
        assert_eq!(record.claim, "the claim");
        assert_eq!(record.verdict, Verdict::Unverifiable);
        assert_eq!(record.evidence_quality, EvidenceQuality::Insufficient);
        assert_eq!(record.source_consensus, SourceConsensus::Low);
        assert_eq!(record.confidence, 1.0);
        assert_eq!(record.fallacies, vec![NO_FALLACIES.to_string()]);
    }

    #[test]
    fn test_needs_context_label_round_trips() {
        assert_eq!(Verdict::from_str_lenient("needs context"), Verdict::NeedsContext);
        assert_eq!(Verdict::NeedsContext.as_str(), "Needs context");
    }

    #[test]
    fn test_fallback_shape() {
        let record = VerdictRecord::fallback("some claim", "model error: boom");
        assert_eq!(record.verdict, Verdict::Unverifiable);
        assert_eq!(record.evidence_quality, EvidenceQuality::Insufficient);
        assert_eq!(record.source_consensus, SourceConsensus::Low);
        assert_eq!(record.confidence, 0.0);
        assert!(record.reasoning.contains("model error: boom"));
    }

    #[test]
    fn test_has_fallacies() {
        let mut record = VerdictRecord::fallback("c", "f");
        assert!(!record.has_fallacies());
        record.fallacies = vec!["Ad Hominem".to_string()];
        assert!(record.has_fallacies());
    }
}
