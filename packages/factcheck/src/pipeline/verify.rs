//! Per-claim verification against collected evidence.

use std::sync::Arc;

use crate::error::Result;
use crate::pipeline::parse::parse_model_json;
use crate::pipeline::prompts::{format_claim_verification, format_evidence_block};
use crate::traits::CompletionModel;
use crate::types::claim::ClaimStub;
use crate::types::evidence::EvidenceItem;
use crate::types::verdict::VerdictRecord;

/// Asks the model for a verdict on one claim, given its evidence and the
/// fallacy taxonomy.
pub struct ClaimVerifier {
    model: Arc<dyn CompletionModel>,
    fallacies_list: String,
}

impl ClaimVerifier {
    pub fn new(model: Arc<dyn CompletionModel>, fallacies_list: impl Into<String>) -> Self {
        Self {
            model,
            fallacies_list: fallacies_list.into(),
        }
    }

    /// Verify one claim. Lenient conversion means a structurally odd
    /// model answer still becomes a well-formed record; only a failed
    /// model call surfaces as an error (which the scheduler converts to a
    /// fallback record).
    pub async fn verify(
        &self,
        claim: &ClaimStub,
        evidence: &[EvidenceItem],
    ) -> Result<VerdictRecord> {
        let evidence_block = format_evidence_block(evidence);
        let prompt = format_claim_verification(&claim.text, &evidence_block, &self.fallacies_list);
        let response = self.model.complete(&prompt).await?;
        let value = parse_model_json(&response);
        Ok(VerdictRecord::from_value(&value, &claim.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockModel;
    use crate::types::verdict::{EvidenceQuality, Verdict};

    #[tokio::test]
    async fn test_verify_parses_verdict() {
        let response = r#"{
            "claim": "X happened",
            "verdict": "True",
            "reasoning": "Two wire services agree",
            "evidence_quality": "Strong",
            "source_consensus": "High",
            "fallacies": ["None found"],
            "confidence": 0.85
        }"#;
        let model = MockModel::new().with_default(response);
        let verifier = ClaimVerifier::new(Arc::new(model), "fallacy: def");

        let record = verifier
            .verify(&ClaimStub::new("X happened"), &[])
            .await
            .unwrap();
        assert_eq!(record.verdict, Verdict::True);
        assert_eq!(record.evidence_quality, EvidenceQuality::Strong);
        assert!((record.confidence - 0.85).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_garbage_response_degrades_to_unverifiable() {
        let model = MockModel::new().with_default("shrug, no idea");
        let verifier = ClaimVerifier::new(Arc::new(model), "fallacy: def");

        let record = verifier
            .verify(&ClaimStub::new("X happened"), &[])
            .await
            .unwrap();
        // The parser's fallback object has no verdict field; lenient
        // conversion turns that into Unverifiable with the stub's text.
        assert_eq!(record.claim, "X happened");
        assert_eq!(record.verdict, Verdict::Unverifiable);
        assert_eq!(record.confidence, 0.0);
    }

    #[tokio::test]
    async fn test_prompt_carries_evidence_and_fallacies() {
        let model = MockModel::new().with_default(r#"{"verdict": "True"}"#);
        let model = Arc::new(model);
        let verifier = ClaimVerifier::new(model.clone(), "Ad Hominem: attacking the person");

        let evidence = vec![EvidenceItem {
            title: "t".to_string(),
            snippet: "s".to_string(),
            full_content: "page content here".to_string(),
            url: "https://reuters.com/x".to_string(),
            source_name: "Reuters".to_string(),
            published_date: "today".to_string(),
            credibility_score: 3,
            originating_query: "q".to_string(),
        }];
        verifier
            .verify(&ClaimStub::new("X"), &evidence)
            .await
            .unwrap();

        let prompts = model.calls();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("page content here"));
        assert!(prompts[0].contains("Ad Hominem: attacking the person"));
    }
}
