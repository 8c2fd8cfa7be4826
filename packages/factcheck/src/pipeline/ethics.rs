//! Ethics-professor critique of an article summary.

use std::sync::Arc;

use crate::error::Result;
use crate::pipeline::prompts::format_ethics_review;
use crate::traits::CompletionModel;

/// Generates the ethics critique for a report. The response stays free
/// text; there is nothing structured to parse.
pub struct EthicsReviewer {
    model: Arc<dyn CompletionModel>,
    fallacies_list: String,
}

impl EthicsReviewer {
    pub fn new(model: Arc<dyn CompletionModel>, fallacies_list: impl Into<String>) -> Self {
        Self {
            model,
            fallacies_list: fallacies_list.into(),
        }
    }

    pub async fn review(&self, summary: &str) -> Result<String> {
        let prompt = format_ethics_review(summary, &self.fallacies_list);
        self.model.complete(&prompt).await
    }
}
