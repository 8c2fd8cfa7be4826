//! Page content fetching trait.

use async_trait::async_trait;

/// Fetches readable text for a URL.
///
/// Deliberately infallible: a fetch that fails returns a readable error
/// string (e.g. `"Error loading content: <cause>"`) instead of an error.
/// Evidence collection treats page text as best-effort garnish on top of
/// the search snippet, so a failed fetch must never sink the item.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Fetch and clean page text, bounded to `max_chars` characters.
    async fn fetch(&self, url: &str, max_chars: usize) -> String;
}
