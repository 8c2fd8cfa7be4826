//! Source credibility scoring.
//!
//! Domains are ranked into three disjoint tiers. The registry is an
//! immutable value built once at startup and shared read-only across all
//! concurrent evidence tasks.

/// Tiered table of source domains with a 0-3 credibility score.
///
/// Matching is substring containment: `news.reuters.com` matches the
/// tier-1 entry `reuters.com`, and so would any longer domain that happens
/// to contain a listed string. That looseness is intentional and relied
/// upon for subdomains; do not tighten it to exact host equality.
#[derive(Debug, Clone)]
pub struct CredibilityRegistry {
    tier1: Vec<String>,
    tier2: Vec<String>,
    diverse: Vec<String>,
}

impl CredibilityRegistry {
    /// Build a registry from explicit tier lists.
    pub fn new(
        tier1: impl IntoIterator<Item = impl Into<String>>,
        tier2: impl IntoIterator<Item = impl Into<String>>,
        diverse: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            tier1: tier1.into_iter().map(Into::into).collect(),
            tier2: tier2.into_iter().map(Into::into).collect(),
            diverse: diverse.into_iter().map(Into::into).collect(),
        }
    }

    /// Credibility score for a source domain.
    ///
    /// Tier 1 is checked before tier 2 before the diverse list, so a
    /// domain that somehow appeared in two lists resolves to the highest
    /// tier. Unlisted domains score 0.
    pub fn score(&self, domain: &str) -> u8 {
        if self.tier1.iter().any(|d| domain.contains(d.as_str())) {
            3
        } else if self.tier2.iter().any(|d| domain.contains(d.as_str())) {
            2
        } else if self.diverse.iter().any(|d| domain.contains(d.as_str())) {
            1
        } else {
            0
        }
    }
}

impl Default for CredibilityRegistry {
    /// The static source table: wire services, public broadcasters,
    /// dedicated fact-checkers and scientific journals at tier 1; major
    /// national outlets at tier 2; an ideologically diverse list at
    /// tier 3.
    fn default() -> Self {
        Self::new(
            [
                "reuters.com",
                "ap.org",
                "bbc.com",
                "npr.org",
                "pbs.org",
                "factcheck.org",
                "snopes.com",
                "politifact.com",
                "nature.com",
                "science.org",
                "nejm.org",
            ],
            [
                "cnn.com",
                "nytimes.com",
                "washingtonpost.com",
                "wsj.com",
                "theguardian.com",
                "economist.com",
                "time.com",
                "newsweek.com",
            ],
            [
                "foxnews.com",
                "breitbart.com",
                "huffpost.com",
                "vox.com",
                "reason.com",
                "libertarianism.org",
            ],
        )
    }
}
