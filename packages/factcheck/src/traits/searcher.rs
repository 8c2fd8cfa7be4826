//! News search trait.
//!
//! Abstracts over query -> ranked-news-results providers. The service may
//! legitimately return zero results for a query; that is not an error.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::config::RecencyWindow;
use crate::error::{FactCheckError, Result};

/// One news result from the search service.
#[derive(Debug, Clone, Default)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub snippet: Option<String>,
    pub source: Option<String>,
    pub date: Option<String>,
}

impl NewsItem {
    /// Create a result from title and link.
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            ..Default::default()
        }
    }

    /// Add a snippet.
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    /// Add the source outlet name.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Add the published date string (left unparsed).
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// News search trait used for both article discovery and evidence search.
#[async_trait]
pub trait NewsSearcher: Send + Sync {
    /// Search news within the given recency window.
    ///
    /// An empty vector means the service found nothing; callers decide
    /// whether that is a problem.
    async fn search_news(&self, query: &str, window: RecencyWindow) -> Result<Vec<NewsItem>>;
}

/// Mock news searcher for testing.
#[derive(Default)]
pub struct MockNewsSearcher {
    results: RwLock<HashMap<String, Vec<NewsItem>>>,
    default_results: RwLock<Vec<NewsItem>>,
    failing_queries: RwLock<HashSet<String>>,
    queries_seen: RwLock<Vec<String>>,
}

impl MockNewsSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canned results for an exact query.
    pub fn with_results(self, query: &str, results: Vec<NewsItem>) -> Self {
        self.results
            .write()
            .unwrap()
            .insert(query.to_string(), results);
        self
    }

    /// Results returned for any query without its own fixture.
    pub fn with_default_results(self, results: Vec<NewsItem>) -> Self {
        *self.default_results.write().unwrap() = results;
        self
    }

    /// Make any query containing this substring fail.
    pub fn with_failure(self, query_substring: &str) -> Self {
        self.failing_queries
            .write()
            .unwrap()
            .insert(query_substring.to_string());
        self
    }

    /// All queries issued against this mock, in order.
    pub fn queries_seen(&self) -> Vec<String> {
        self.queries_seen.read().unwrap().clone()
    }
}

#[async_trait]
impl NewsSearcher for MockNewsSearcher {
    async fn search_news(&self, query: &str, _window: RecencyWindow) -> Result<Vec<NewsItem>> {
        self.queries_seen.write().unwrap().push(query.to_string());

        if self
            .failing_queries
            .read()
            .unwrap()
            .iter()
            .any(|s| query.contains(s.as_str()))
        {
            return Err(FactCheckError::search(format!(
                "simulated search failure for '{query}'"
            )));
        }

        if let Some(results) = self.results.read().unwrap().get(query) {
            return Ok(results.clone());
        }
        Ok(self.default_results.read().unwrap().clone())
    }
}
