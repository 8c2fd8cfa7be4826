//! HTTP page loader with HTML-to-text cleanup.

use async_trait::async_trait;
use tracing::debug;

use crate::traits::fetcher::ContentFetcher;

/// Fetches a page and reduces it to whitespace-normalized plain text.
///
/// Implements the infallible [`ContentFetcher`] contract: any failure is
/// reported inline as an `"Error loading content: ..."` string.
pub struct PageLoader {
    client: reqwest::Client,
    user_agent: String,
}

impl Default for PageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PageLoader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            user_agent: "factcheck/1.0".to_string(),
        }
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    async fn try_fetch(&self, url: &str) -> Result<String, String> {
        debug!(url = %url, "fetching page content");
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {status}"));
        }

        response.text().await.map_err(|e| e.to_string())
    }
}

#[async_trait]
impl ContentFetcher for PageLoader {
    async fn fetch(&self, url: &str, max_chars: usize) -> String {
        match self.try_fetch(url).await {
            Ok(html) => {
                let cleaned = truncate_chars(&html_to_text(&html), max_chars);
                if cleaned.is_empty() {
                    "Content could not be extracted".to_string()
                } else {
                    cleaned
                }
            }
            Err(e) => format!("Error loading content: {e}"),
        }
    }
}

/// Strip HTML down to readable text: drop scripts, styles and tags, decode
/// common entities, collapse whitespace.
fn html_to_text(html: &str) -> String {
    let script_pattern = regex::Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap();
    let style_pattern = regex::Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap();
    let tag_pattern = regex::Regex::new(r"<[^>]+>").unwrap();

    let text = script_pattern.replace_all(html, " ");
    let text = style_pattern.replace_all(&text, " ");
    let text = tag_pattern.replace_all(&text, " ");

    let text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Character-bounded truncation (not byte-bounded, so multi-byte text
/// never splits mid-character).
fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
