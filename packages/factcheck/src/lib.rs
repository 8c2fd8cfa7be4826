//! Automated Fact-Checking Pipeline
//!
//! Given a news topic, this library finds articles, extracts factual
//! claims via a language model, searches for corroborating or
//! contradicting evidence across credibility-ranked sources, asks the
//! model for a verdict per claim, and aggregates an ethics critique and a
//! confidence score into one report.
//!
//! # Design
//!
//! - External services (news search, page fetching, text completion) sit
//!   behind small async traits; the pipeline never knows which provider
//!   is on the other side.
//! - Every collaborator failure is recovered at the smallest possible
//!   scope: a failed search query yields zero results, a failed page
//!   fetch yields an inline error string, a failed verification yields a
//!   synthesized `Unverifiable` record. A claim is never silently
//!   dropped: the report always carries one verdict row per claim.
//! - Verification is batched with bounded concurrency and fixed pacing
//!   delays; output order always equals input claim order.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use factcheck::{
//!     ArticleSearcher, FactChecker, FallacyCatalog, GeminiModel, PageLoader,
//!     RecencyWindow, SerperClient,
//! };
//!
//! let model = Arc::new(GeminiModel::from_env()?);
//! let searcher = Arc::new(SerperClient::from_env()?);
//! let fetcher = Arc::new(PageLoader::new());
//! let fallacies = FallacyCatalog::load_or_default("fallacies.csv");
//!
//! let articles = ArticleSearcher::new(searcher.clone());
//! let checker = FactChecker::new(model, searcher, fetcher, &fallacies);
//!
//! let found = articles.search("global trade", None, RecencyWindow::Month).await?;
//! let report = checker.analyze_article(&found[0], 3000, 5).await?;
//! println!("overall confidence: {:.2}", report.overall_confidence());
//! ```
//!
//! # Modules
//!
//! - [`traits`] - collaborator trait seams (search, fetch, completion)
//! - [`clients`] - real clients (Serper, Gemini, HTTP page loader)
//! - [`types`] - claim, evidence, verdict, and report records
//! - [`pipeline`] - query planning, evidence collection, the batch
//!   scheduler, parsing, and aggregation
//! - [`credibility`] - the tiered source table
//! - [`fallacies`] - the fallacy taxonomy
//! - [`testing`] - mock collaborators for tests

pub mod articles;
pub mod checker;
pub mod clients;
pub mod config;
pub mod credibility;
pub mod error;
pub mod fallacies;
pub mod pipeline;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use articles::ArticleSearcher;
pub use checker::FactChecker;
pub use clients::{GeminiModel, PageLoader, SerperClient};
pub use config::{RecencyWindow, RunConfig, VerificationDepth};
pub use credibility::CredibilityRegistry;
pub use error::{FactCheckError, Result};
pub use fallacies::{FallacyCatalog, FallacyEntry};
pub use traits::{CompletionModel, ContentFetcher, NewsItem, NewsSearcher};
pub use types::{
    AnalysisReport, ClaimStub, ClaimType, EvidenceItem, EvidenceQuality, SourceConsensus,
    Verdict, VerdictRecord,
};

// Re-export pipeline components
pub use pipeline::{
    overall_confidence, parse_model_json, plan_queries, BatchScheduler, ClaimExtractor,
    ClaimVerifier, EthicsReviewer, EvidenceCollector, SchedulerConfig,
};
