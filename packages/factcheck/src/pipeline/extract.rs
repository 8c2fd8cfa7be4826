//! Claim extraction from article text.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::error::{FactCheckError, Result};
use crate::pipeline::parse::parse_model_json;
use crate::pipeline::prompts::format_claim_extraction;
use crate::traits::CompletionModel;
use crate::types::claim::ClaimStub;

/// Parsed result of claim extraction: the article summary plus the claim
/// stubs to verify.
#[derive(Debug, Clone)]
pub struct ArticleClaims {
    pub summary: String,
    pub claims: Vec<ClaimStub>,
}

/// Asks the model to turn raw article text into a summary and a list of
/// structured claim stubs.
pub struct ClaimExtractor {
    model: Arc<dyn CompletionModel>,
}

impl ClaimExtractor {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self { model }
    }

    /// Extract claims from article text.
    ///
    /// Malformed entries in the model's claim list are dropped rather than
    /// failing the article; an empty claim list (including the parser's
    /// fallback object) is `NoClaims`, which aborts this article's
    /// pipeline only.
    pub async fn extract(&self, article_text: &str) -> Result<ArticleClaims> {
        let prompt = format_claim_extraction(article_text);
        let response = self.model.complete(&prompt).await?;
        let value = parse_model_json(&response);

        let summary = value
            .get("summary")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let claims: Vec<ClaimStub> = value
            .get("claims")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| serde_json::from_value(item.clone()).ok())
                    .collect()
            })
            .unwrap_or_default();

        if claims.is_empty() {
            return Err(FactCheckError::NoClaims);
        }

        info!(count = claims.len(), "claims extracted");
        Ok(ArticleClaims { summary, claims })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockModel;
    use crate::types::claim::ClaimType;

    #[tokio::test]
    async fn test_extract_claims() {
        let response = r#"{
            "summary": "A neutral summary.",
            "claims": [
                {"claim": "X happened", "claim_type": "event", "search_terms": ["x"]},
                {"claim": "Y rose 5%", "claim_type": "statistical", "search_terms": ["y"]}
            ]
        }"#;
        let model = MockModel::new().with_default(response);
        let extractor = ClaimExtractor::new(Arc::new(model));

        let result = extractor.extract("article body").await.unwrap();
        assert_eq!(result.summary, "A neutral summary.");
        assert_eq!(result.claims.len(), 2);
        assert_eq!(result.claims[1].claim_type, ClaimType::Statistical);
    }

    #[tokio::test]
    async fn test_empty_claims_is_no_claims_error() {
        let model = MockModel::new().with_default(r#"{"summary": "s", "claims": []}"#);
        let extractor = ClaimExtractor::new(Arc::new(model));

        let err = extractor.extract("article body").await.unwrap_err();
        assert!(matches!(err, FactCheckError::NoClaims));
    }

    #[tokio::test]
    async fn test_unparseable_response_is_no_claims_error() {
        // The parser's fallback object carries an empty claims list, so
        // garbage output lands on the same NoClaims path.
        let model = MockModel::new().with_default("the model rambled instead of answering");
        let extractor = ClaimExtractor::new(Arc::new(model));

        let err = extractor.extract("article body").await.unwrap_err();
        assert!(matches!(err, FactCheckError::NoClaims));
    }

    #[tokio::test]
    async fn test_malformed_entries_dropped() {
        let response = r#"{
            "summary": "s",
            "claims": [
                {"claim": "valid claim"},
                {"not_a_claim": true},
                42
            ]
        }"#;
        let model = MockModel::new().with_default(response);
        let extractor = ClaimExtractor::new(Arc::new(model));

        let result = extractor.extract("article body").await.unwrap();
        assert_eq!(result.claims.len(), 1);
        assert_eq!(result.claims[0].text, "valid claim");
    }

    #[tokio::test]
    async fn test_model_failure_propagates() {
        let model = MockModel::new().with_failure("fact-checking analyst");
        let extractor = ClaimExtractor::new(Arc::new(model));

        let err = extractor.extract("article body").await.unwrap_err();
        assert!(matches!(err, FactCheckError::Model(_)));
    }
}
