//! Claim stubs extracted from an article.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Category of a factual claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClaimType {
    Statistical,
    #[default]
    Event,
    Quote,
    Policy,
    Prediction,
}

impl ClaimType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Statistical => "statistical",
            Self::Event => "event",
            Self::Quote => "quote",
            Self::Policy => "policy",
            Self::Prediction => "prediction",
        }
    }

    /// Lenient conversion from model output. Unknown labels degrade to
    /// `Event`: the type is descriptive metadata that never branches the
    /// pipeline, and a bad label must not fail the whole claim.
    pub fn from_str_lenient(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("statistical") {
            Self::Statistical
        } else if s.eq_ignore_ascii_case("quote") {
            Self::Quote
        } else if s.eq_ignore_ascii_case("policy") {
            Self::Policy
        } else if s.eq_ignore_ascii_case("prediction") {
            Self::Prediction
        } else {
            Self::Event
        }
    }
}

impl Serialize for ClaimType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ClaimType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_str_lenient(&s))
    }
}

/// A structured, not-yet-verified factual assertion extracted from an
/// article. Immutable once created; consumed by the batch scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimStub {
    /// The claim text (`claim` on the wire).
    #[serde(rename = "claim")]
    pub text: String,

    #[serde(default)]
    pub claim_type: ClaimType,

    /// Proper nouns the claim hinges on.
    #[serde(default)]
    pub key_entities: Vec<String>,

    /// Terms the query planner builds evidence searches from.
    #[serde(default)]
    pub search_terms: Vec<String>,
}

impl ClaimStub {
    /// Create a stub with just the claim text (test convenience).
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            claim_type: ClaimType::default(),
            key_entities: Vec::new(),
            search_terms: Vec::new(),
        }
    }

    /// Add search terms.
    pub fn with_search_terms(
        mut self,
        terms: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.search_terms = terms.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_model_output() {
        let json = r#"{
            "claim": "Unemployment fell to 3.9% in June",
            "claim_type": "statistical",
            "key_entities": ["unemployment"],
            "search_terms": ["unemployment rate June", "jobs report"]
        }"#;
        let stub: ClaimStub = serde_json::from_str(json).unwrap();
        assert_eq!(stub.text, "Unemployment fell to 3.9% in June");
        assert_eq!(stub.claim_type, ClaimType::Statistical);
        assert_eq!(stub.search_terms.len(), 2);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let stub: ClaimStub = serde_json::from_str(r#"{"claim": "x"}"#).unwrap();
        assert_eq!(stub.claim_type, ClaimType::Event);
        assert!(stub.key_entities.is_empty());
        assert!(stub.search_terms.is_empty());
    }

    #[test]
    fn test_unknown_claim_type_degrades() {
        let stub: ClaimStub =
            serde_json::from_str(r#"{"claim": "x", "claim_type": "opinion"}"#).unwrap();
        assert_eq!(stub.claim_type, ClaimType::Event);
    }
}
