//! Pipeline assembly: one article in, one report out.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::credibility::CredibilityRegistry;
use crate::error::Result;
use crate::fallacies::FallacyCatalog;
use crate::pipeline::ethics::EthicsReviewer;
use crate::pipeline::evidence::EvidenceCollector;
use crate::pipeline::extract::ClaimExtractor;
use crate::pipeline::scheduler::{BatchScheduler, SchedulerConfig};
use crate::pipeline::verify::ClaimVerifier;
use crate::traits::searcher::NewsItem;
use crate::traits::{CompletionModel, ContentFetcher, NewsSearcher};
use crate::types::report::AnalysisReport;

/// Wires the full analysis pipeline together.
///
/// All collaborators are injected once at construction; nothing reaches
/// for ambient state afterwards.
pub struct FactChecker {
    extractor: ClaimExtractor,
    scheduler: BatchScheduler,
    ethics: EthicsReviewer,
    fetcher: Arc<dyn ContentFetcher>,
}

impl FactChecker {
    pub fn new(
        model: Arc<dyn CompletionModel>,
        searcher: Arc<dyn NewsSearcher>,
        fetcher: Arc<dyn ContentFetcher>,
        fallacies: &FallacyCatalog,
    ) -> Self {
        Self::with_config(
            model,
            searcher,
            fetcher,
            fallacies,
            CredibilityRegistry::default(),
            SchedulerConfig::default(),
        )
    }

    pub fn with_config(
        model: Arc<dyn CompletionModel>,
        searcher: Arc<dyn NewsSearcher>,
        fetcher: Arc<dyn ContentFetcher>,
        fallacies: &FallacyCatalog,
        registry: CredibilityRegistry,
        scheduler_config: SchedulerConfig,
    ) -> Self {
        let fallacies_list = fallacies.prompt_list();
        let collector = EvidenceCollector::new(searcher, fetcher.clone(), registry);
        let verifier = ClaimVerifier::new(model.clone(), fallacies_list.clone());
        let scheduler = BatchScheduler::with_config(collector, verifier, scheduler_config);

        Self {
            extractor: ClaimExtractor::new(model.clone()),
            scheduler,
            ethics: EthicsReviewer::new(model, fallacies_list),
            fetcher,
        }
    }

    /// Run the complete analysis for one article.
    ///
    /// Errors here (fetch produced nothing extractable, no claims, model
    /// down for the ethics pass) terminate this article's pipeline only;
    /// the caller decides whether more articles follow.
    pub async fn analyze_article(
        &self,
        article: &NewsItem,
        max_chars: usize,
        sources_per_claim: usize,
    ) -> Result<AnalysisReport> {
        info!(title = %article.title, url = %article.link, "analyzing article");

        let article_text = self.fetcher.fetch(&article.link, max_chars).await;
        let extracted = self.extractor.extract(&article_text).await?;

        let verified_claims = self
            .scheduler
            .verify_all(&extracted.claims, sources_per_claim)
            .await;

        let ethics_analysis = self.ethics.review(&extracted.summary).await?;

        Ok(AnalysisReport {
            title: article.title.clone(),
            url: article.link.clone(),
            summary: extracted.summary,
            verified_claims,
            ethics_analysis,
            generated_at: Utc::now(),
        })
    }
}
