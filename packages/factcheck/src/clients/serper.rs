//! Serper-backed news search.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::RecencyWindow;
use crate::error::{FactCheckError, Result};
use crate::traits::searcher::{NewsItem, NewsSearcher};

const SERPER_NEWS_URL: &str = "https://google.serper.dev/news";

/// Serper news search request.
#[derive(Debug, Serialize)]
struct SerperRequest {
    q: String,
    tbs: String,
}

/// Serper news search response. The `news` key may be absent entirely;
/// that means zero results, not a malformed response.
#[derive(Debug, Deserialize)]
struct SerperResponse {
    #[serde(default)]
    news: Vec<SerperNewsItem>,
}

#[derive(Debug, Deserialize)]
struct SerperNewsItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    snippet: Option<String>,
    source: Option<String>,
    date: Option<String>,
}

/// News searcher backed by the Serper API.
pub struct SerperClient {
    client: reqwest::Client,
    api_key: String,
}

impl SerperClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Create from the `SERPER_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("SERPER_API_KEY")
            .map_err(|_| FactCheckError::Config("SERPER_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }
}

#[async_trait]
impl NewsSearcher for SerperClient {
    async fn search_news(&self, query: &str, window: RecencyWindow) -> Result<Vec<NewsItem>> {
        let request = SerperRequest {
            q: query.to_string(),
            tbs: window.as_tbs().to_string(),
        };

        let response = self
            .client
            .post(SERPER_NEWS_URL)
            .header("X-API-KEY", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| FactCheckError::Search(Box::new(e)))?;

        if !response.status().is_success() {
            return Err(FactCheckError::search(format!(
                "Serper API error: {}",
                response.status()
            )));
        }

        let serper_response: SerperResponse = response
            .json()
            .await
            .map_err(|e| FactCheckError::Search(Box::new(e)))?;

        Ok(serper_response
            .news
            .into_iter()
            .filter(|r| !r.link.is_empty())
            .map(|r| NewsItem {
                title: r.title,
                link: r.link,
                snippet: r.snippet,
                source: r.source,
                date: r.date,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_news_key_is_zero_results() {
        let response: SerperResponse = serde_json::from_str("{}").unwrap();
        assert!(response.news.is_empty());
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"{
            "news": [
                {"title": "Tariff update", "link": "https://reuters.com/a", "source": "Reuters", "date": "2 days ago"},
                {"title": "No link here"}
            ]
        }"#;
        let response: SerperResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.news.len(), 2);
        assert_eq!(response.news[0].source.as_deref(), Some("Reuters"));
        assert!(response.news[1].link.is_empty());
    }
}
