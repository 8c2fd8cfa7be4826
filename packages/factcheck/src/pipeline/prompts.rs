//! Prompt templates for the model collaborators.
//!
//! Templates are plain consts with `{placeholder}` slots filled by the
//! `format_*` helpers. Wording is tuned for strict-JSON answers; the
//! response parser still assumes the model may ignore that.

use crate::types::evidence::EvidenceItem;

/// Prompt for extracting claims from an article.
pub const CLAIM_EXTRACTION_PROMPT: &str = r#"
You are a neutral fact-checking analyst. Extract key factual claims from this article.

Article to analyze:
{content}

IMPORTANT: Respond ONLY with valid JSON. Extract 5-10 specific, verifiable factual claims.

{
  "summary": "Five sentences neutral summary here...",
  "claims": [
    {
      "claim": "Specific factual claim text",
      "claim_type": "statistical|event|quote|policy|prediction",
      "key_entities": ["entity1", "entity2"],
      "search_terms": ["term1", "term2", "term3"]
    }
  ]
}
"#;

/// Prompt for verifying one claim against collected evidence.
pub const CLAIM_VERIFICATION_PROMPT: &str = r#"
You are a neutral fact-checking analyst. Verify the given claim using the provided external evidence.

INSTRUCTIONS:
- Mark as 'True' if credible evidence supports the claim
- Mark as 'False' if credible evidence contradicts the claim
- Mark as 'Misleading' if the claim is partially true but lacks important context
- Mark as 'Needs context' if evidence conflicts or is mixed
- Mark as 'Unverifiable' ONLY if no relevant evidence is found

Original Claim: {claim}

External Evidence Found:
{evidence}

Fallacy reference list:
{fallacies_list}

Evidence Quality Guidelines:
- Strong: Multiple credible sources agree
- Moderate: Some credible sources support, or single high-quality source
- Weak: Limited sources or lower credibility sources
- Insufficient: No relevant evidence found

Be thorough but reasonable - don't require absolute certainty for basic factual claims that have reasonable evidence support.

IMPORTANT: Respond ONLY with valid JSON:

{
  "claim": "{claim}",
  "verdict": "True|False|Misleading|Needs context|Unverifiable",
  "reasoning": "Brief explanation of verdict based on evidence",
  "evidence_quality": "Strong|Moderate|Weak|Insufficient",
  "source_consensus": "High|Medium|Low|Conflicting",
  "fallacies": ["Fallacy name or None found"],
  "confidence": 0.0
}
"#;

/// Prompt for the ethics-professor review of an article summary.
pub const ETHICS_REVIEW_PROMPT: &str = r#"You are an ethics professor reviewing a news article SUMMARY. Be succinct and easy to read, but ground your critique in core ethics principles (fairness, non-maleficence, duty of care, transparency). Use ONLY the fallacy names/definitions provided below. If no fallacy applies, say "None found" and explain why.

Article summary: {summary}

Fallacies to consider:
{fallacies_list}

Provide EXACTLY:
1) Most impactful fallacy: <name from list or "None found">
2) Why this could mislead readers: <1-3 sentences, plain language>
3) Counterfactual/counterpoint: <one plausible alternative interpretation for why this fallacy (or appearance of it) might be present>

Constraints:
- Do not invent facts beyond the summary and fallacy list.
- No step-by-step reasoning; show final answers only.
- Keep the total response under 120 words.

Professor:"#;

/// Format the claim-extraction prompt.
pub fn format_claim_extraction(content: &str) -> String {
    CLAIM_EXTRACTION_PROMPT.replace("{content}", content)
}

/// Format the claim-verification prompt.
pub fn format_claim_verification(claim: &str, evidence: &str, fallacies_list: &str) -> String {
    CLAIM_VERIFICATION_PROMPT
        .replace("{claim}", claim)
        .replace("{evidence}", evidence)
        .replace("{fallacies_list}", fallacies_list)
}

/// Format the ethics-review prompt.
pub fn format_ethics_review(summary: &str, fallacies_list: &str) -> String {
    ETHICS_REVIEW_PROMPT
        .replace("{summary}", summary)
        .replace("{fallacies_list}", fallacies_list)
}

/// Flatten collected evidence into the readable block the verification
/// prompt expects: numbered sources with credibility, content, provenance
/// and the query that surfaced them.
pub fn format_evidence_block(evidence: &[EvidenceItem]) -> String {
    if evidence.is_empty() {
        return "No external evidence found.".to_string();
    }

    let mut formatted = String::from("EXTERNAL EVIDENCE (FULL ARTICLES):\n\n");
    for (i, item) in evidence.iter().enumerate() {
        formatted.push_str(&format!(
            "Source {} (Credibility: {}/3):\n",
            i + 1,
            item.credibility_score
        ));
        formatted.push_str(&format!("Title: {}\n", item.title));

        let content = if item.full_content.is_empty() {
            &item.snippet
        } else {
            &item.full_content
        };
        formatted.push_str(&format!("Content: {content}\n"));

        formatted.push_str(&format!(
            "Source: {} ({})\n",
            item.source_name, item.published_date
        ));
        formatted.push_str(&format!("URL: {}\n", item.url));
        formatted.push_str(&format!("Found via: {}\n\n", item.originating_query));
    }
    formatted
}
