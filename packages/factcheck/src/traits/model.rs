//! Text-completion model trait.

use async_trait::async_trait;

use crate::error::Result;

/// An opaque text-completion service.
///
/// The pipeline sends a fully formed prompt and gets free text back,
/// expected but not guaranteed to be well-formed JSON. Structure
/// recovery is the response parser's job, not the model's.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}
