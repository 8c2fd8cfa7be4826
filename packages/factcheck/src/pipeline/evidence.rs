//! Evidence collection for a single claim.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::RecencyWindow;
use crate::credibility::CredibilityRegistry;
use crate::error::Result;
use crate::pipeline::queries::plan_queries;
use crate::traits::{ContentFetcher, NewsSearcher};
use crate::types::evidence::EvidenceItem;

/// Results considered per query before moving to the next one.
const RESULTS_PER_QUERY: usize = 2;

/// Character bound for fetched evidence page text.
const EVIDENCE_CONTENT_CHARS: usize = 1000;

/// Executes the query plan for a claim, filters results by source
/// credibility, fetches page text, and stops once the quota is met.
///
/// Failure scope is one query: a search call that errors is logged and
/// contributes zero results, and collection moves on. Result ordering is
/// whatever the search service returned; no re-ranking happens beyond
/// the credibility filter.
pub struct EvidenceCollector {
    searcher: Arc<dyn NewsSearcher>,
    fetcher: Arc<dyn ContentFetcher>,
    registry: CredibilityRegistry,
}

impl EvidenceCollector {
    pub fn new(
        searcher: Arc<dyn NewsSearcher>,
        fetcher: Arc<dyn ContentFetcher>,
        registry: CredibilityRegistry,
    ) -> Self {
        Self {
            searcher,
            fetcher,
            registry,
        }
    }

    /// Collect up to `quota` evidence items for a claim.
    ///
    /// Evidence searches always look back a full year regardless of the
    /// article search window, since corroboration for a fresh claim is
    /// usually older than the claim itself.
    pub async fn collect(
        &self,
        claim_text: &str,
        search_terms: &[String],
        quota: usize,
    ) -> Result<Vec<EvidenceItem>> {
        let queries = plan_queries(claim_text, search_terms);
        let mut evidence: Vec<EvidenceItem> = Vec::new();

        'queries: for query in queries {
            if evidence.len() >= quota {
                break;
            }

            let results = match self.searcher.search_news(&query, RecencyWindow::Year).await {
                Ok(results) => results,
                Err(e) => {
                    warn!(query = %query, error = %e, "evidence search failed");
                    continue;
                }
            };

            for result in results.into_iter().take(RESULTS_PER_QUERY) {
                if evidence.len() >= quota {
                    break 'queries;
                }

                let domain = host_of(&result.link);
                let credibility_score = self.registry.score(domain);
                if credibility_score == 0 {
                    continue;
                }

                let full_content = self
                    .fetcher
                    .fetch(&result.link, EVIDENCE_CONTENT_CHARS)
                    .await;

                evidence.push(EvidenceItem {
                    title: result.title,
                    snippet: result.snippet.unwrap_or_default(),
                    full_content,
                    url: result.link,
                    source_name: result.source.unwrap_or_default(),
                    published_date: result.date.unwrap_or_default(),
                    credibility_score,
                    originating_query: query.clone(),
                });
            }
        }

        debug!(
            claim = %claim_text,
            count = evidence.len(),
            "evidence collection finished"
        );
        Ok(evidence)
    }
}

/// The URL segment between the second and third `/`: the host for any
/// well-formed absolute URL, and harmlessly empty for anything else.
fn host_of(url: &str) -> &str {
    url.split('/').nth(2).unwrap_or("")
}
