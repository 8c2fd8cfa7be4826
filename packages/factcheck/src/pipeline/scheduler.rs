//! Batched, bounded-concurrency claim verification.
//!
//! Claims are processed in consecutive fixed-size batches. Each batch runs
//! two phases strictly in sequence: evidence collection for every claim in
//! the batch, then verification of every claim in the batch. Work inside a
//! phase is concurrent, bounded by a semaphore sized to the batch. Pacing
//! is fixed pre-task delays plus a fixed pause between batches: plain
//! backpressure against the search and model services, not adaptive rate
//! control.
//!
//! There is deliberately no timeout on collaborator calls: a hung search
//! or model call stalls its task until the transport gives up. Known
//! liveness gap; adding one would mean inventing values this pipeline
//! never chose.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio::sync::Semaphore;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::pipeline::evidence::EvidenceCollector;
use crate::pipeline::verify::ClaimVerifier;
use crate::types::claim::ClaimStub;
use crate::types::evidence::EvidenceItem;
use crate::types::verdict::VerdictRecord;

/// Pacing and sizing knobs for the scheduler.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Claims per batch; also the concurrency bound within a phase.
    pub batch_size: usize,

    /// Delay before each evidence task.
    pub evidence_delay: Duration,

    /// Delay before each verification task.
    pub verify_delay: Duration,

    /// Pause between consecutive batches (skipped after the last).
    pub batch_pause: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            batch_size: 3,
            evidence_delay: Duration::from_millis(500),
            verify_delay: Duration::from_millis(300),
            batch_pause: Duration::from_secs(2),
        }
    }
}

impl SchedulerConfig {
    /// Default sizing with all pacing delays zeroed. Intended for tests.
    pub fn without_pacing() -> Self {
        Self {
            evidence_delay: Duration::ZERO,
            verify_delay: Duration::ZERO,
            batch_pause: Duration::ZERO,
            ..Self::default()
        }
    }
}

/// Fans claims out through evidence collection and verification.
///
/// Invariant: the output always has exactly one record per input claim,
/// in the input order. Tasks return explicit `Result`s and the scheduler
/// converts failures into empty evidence (phase A) or a synthesized
/// fallback record (phase B) for the failing claim alone. Sibling tasks,
/// the batch, and the run are never aborted by one claim.
pub struct BatchScheduler {
    collector: EvidenceCollector,
    verifier: ClaimVerifier,
    config: SchedulerConfig,
    permits: Arc<Semaphore>,
}

impl BatchScheduler {
    pub fn new(collector: EvidenceCollector, verifier: ClaimVerifier) -> Self {
        Self::with_config(collector, verifier, SchedulerConfig::default())
    }

    /// The worker-pool semaphore is created once here and reused by every
    /// phase of every batch.
    pub fn with_config(
        collector: EvidenceCollector,
        verifier: ClaimVerifier,
        config: SchedulerConfig,
    ) -> Self {
        let permits = Arc::new(Semaphore::new(config.batch_size.max(1)));
        Self {
            collector,
            verifier,
            config,
            permits,
        }
    }

    /// Verify every claim, returning one record per claim in input order.
    pub async fn verify_all(
        &self,
        claims: &[ClaimStub],
        quota_per_claim: usize,
    ) -> Vec<VerdictRecord> {
        let batch_size = self.config.batch_size.max(1);
        let batch_count = claims.len().div_ceil(batch_size);
        let mut verdicts = Vec::with_capacity(claims.len());

        for (batch_index, batch) in claims.chunks(batch_size).enumerate() {
            info!(
                batch = batch_index + 1,
                of = batch_count,
                claims = batch.len(),
                "verifying batch"
            );

            // Phase A: evidence, one bounded task per claim. join_all
            // returns results positionally, so evidence[i] belongs to
            // batch[i] no matter which task finished first.
            let evidence: Vec<Vec<EvidenceItem>> = join_all(
                batch
                    .iter()
                    .map(|claim| self.evidence_task(claim, quota_per_claim)),
            )
            .await;

            // Phase B starts only after every phase A task has resolved.
            let results: Vec<VerdictRecord> = join_all(
                batch
                    .iter()
                    .zip(evidence.iter())
                    .map(|(claim, items)| self.verify_task(claim, items)),
            )
            .await;

            verdicts.extend(results);

            if batch_index + 1 < batch_count {
                debug!(pause = ?self.config.batch_pause, "pausing before next batch");
                sleep(self.config.batch_pause).await;
            }
        }

        verdicts
    }

    async fn evidence_task(&self, claim: &ClaimStub, quota: usize) -> Vec<EvidenceItem> {
        let _permit = self
            .permits
            .acquire()
            .await
            .expect("scheduler semaphore never closes");
        sleep(self.config.evidence_delay).await;

        match self
            .collector
            .collect(&claim.text, &claim.search_terms, quota)
            .await
        {
            Ok(items) => {
                debug!(claim = %claim.text, sources = items.len(), "evidence collected");
                items
            }
            Err(e) => {
                warn!(claim = %claim.text, error = %e, "evidence search failed for claim");
                Vec::new()
            }
        }
    }

    async fn verify_task(&self, claim: &ClaimStub, evidence: &[EvidenceItem]) -> VerdictRecord {
        let _permit = self
            .permits
            .acquire()
            .await
            .expect("scheduler semaphore never closes");
        sleep(self.config.verify_delay).await;

        match self.verifier.verify(claim, evidence).await {
            Ok(record) => {
                debug!(claim = %claim.text, verdict = %record.verdict, "claim verified");
                record
            }
            Err(e) => {
                warn!(claim = %claim.text, error = %e, "verification failed for claim");
                VerdictRecord::fallback(&claim.text, &e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credibility::CredibilityRegistry;
    use crate::testing::{MockFetcher, MockModel};
    use crate::traits::searcher::{MockNewsSearcher, NewsItem};
    use crate::types::verdict::{EvidenceQuality, SourceConsensus, Verdict};

    fn scheduler(searcher: MockNewsSearcher, model: MockModel) -> BatchScheduler {
        let searcher = Arc::new(searcher);
        let model = Arc::new(model);
        let collector = EvidenceCollector::new(
            searcher,
            Arc::new(MockFetcher::new()),
            CredibilityRegistry::default(),
        );
        let verifier = ClaimVerifier::new(model, "fallacy: def");
        BatchScheduler::with_config(collector, verifier, SchedulerConfig::without_pacing())
    }

    fn claims(texts: &[&str]) -> Vec<ClaimStub> {
        texts
            .iter()
            .map(|t| ClaimStub::new(*t).with_search_terms([*t]))
            .collect()
    }

    fn verdict_response(claim: &str, verdict: &str) -> String {
        format!(
            r#"{{"claim": "{claim}", "verdict": "{verdict}", "reasoning": "r",
                "evidence_quality": "Moderate", "source_consensus": "Medium",
                "fallacies": ["None found"], "confidence": 0.7}}"#
        )
    }

    #[tokio::test]
    async fn test_output_preserves_claim_order() {
        let texts = ["alpha", "bravo", "charlie", "delta", "echo"];
        let mut model = MockModel::new().with_default(&verdict_response("other", "True"));
        for t in texts {
            model = model.with_response(
                &format!("Original Claim: {t}"),
                &verdict_response(t, "True"),
            );
        }
        let scheduler = scheduler(MockNewsSearcher::new(), model);

        let verdicts = scheduler.verify_all(&claims(&texts), 2).await;
        assert_eq!(verdicts.len(), texts.len());
        for (verdict, text) in verdicts.iter().zip(texts) {
            assert_eq!(verdict.claim, text);
        }
    }

    #[tokio::test]
    async fn test_seeded_failures_keep_order_and_length() {
        let texts = ["alpha", "bravo", "charlie", "delta", "echo"];
        let mut model = MockModel::new();
        for t in texts {
            model = model.with_response(
                &format!("Original Claim: {t}"),
                &verdict_response(t, "True"),
            );
        }
        // Fail the second and fifth verification tasks only.
        let model = model
            .with_failure("Original Claim: bravo")
            .with_failure("Original Claim: echo");
        let scheduler = scheduler(MockNewsSearcher::new(), model);

        let verdicts = scheduler.verify_all(&claims(&texts), 2).await;
        assert_eq!(verdicts.len(), 5);
        for (verdict, text) in verdicts.iter().zip(texts) {
            assert_eq!(verdict.claim, text);
        }
        assert_eq!(verdicts[0].verdict, Verdict::True);
        assert_eq!(verdicts[1].verdict, Verdict::Unverifiable);
        assert_eq!(verdicts[4].verdict, Verdict::Unverifiable);
        assert!(verdicts[1].reasoning.starts_with("Verification failed:"));
    }

    #[tokio::test]
    async fn test_total_failure_yields_fallback_for_every_claim() {
        let texts = ["one", "two", "three", "four"];
        // Every search and every model call fails.
        let searcher = MockNewsSearcher::new().with_failure("");
        let model = MockModel::new().with_failure("");
        let scheduler = scheduler(searcher, model);

        let verdicts = scheduler.verify_all(&claims(&texts), 3).await;
        assert_eq!(verdicts.len(), 4);
        for (verdict, text) in verdicts.iter().zip(texts) {
            assert_eq!(verdict.claim, text);
            assert_eq!(verdict.verdict, Verdict::Unverifiable);
            assert_eq!(verdict.evidence_quality, EvidenceQuality::Insufficient);
            assert_eq!(verdict.source_consensus, SourceConsensus::Low);
            assert_eq!(verdict.confidence, 0.0);
            assert_eq!(verdict.fallacies, vec!["None found".to_string()]);
        }
    }

    #[tokio::test]
    async fn test_empty_claim_list() {
        let scheduler = scheduler(MockNewsSearcher::new(), MockModel::new());
        let verdicts = scheduler.verify_all(&[], 3).await;
        assert!(verdicts.is_empty());
    }

    #[tokio::test]
    async fn test_evidence_flows_into_verification_prompt() {
        let searcher = MockNewsSearcher::new().with_default_results(vec![NewsItem::new(
            "wire story",
            "https://reuters.com/wire",
        )]);
        let model = Arc::new(
            MockModel::new().with_default(&verdict_response("c", "True")),
        );

        let collector = EvidenceCollector::new(
            Arc::new(searcher),
            Arc::new(MockFetcher::new().with_page("https://reuters.com/wire", "wire body")),
            CredibilityRegistry::default(),
        );
        let verifier = ClaimVerifier::new(model.clone(), "fallacy: def");
        let scheduler =
            BatchScheduler::with_config(collector, verifier, SchedulerConfig::without_pacing());

        scheduler.verify_all(&claims(&["c"]), 1).await;

        let prompts = model.calls();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("wire body"));
    }
}
