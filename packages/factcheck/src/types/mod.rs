//! Data model for the fact-checking pipeline.

pub mod claim;
pub mod evidence;
pub mod report;
pub mod verdict;

pub use claim::{ClaimStub, ClaimType};
pub use evidence::EvidenceItem;
pub use report::AnalysisReport;
pub use verdict::{EvidenceQuality, SourceConsensus, Verdict, VerdictRecord};
