//! Article discovery for a topic.

use std::sync::Arc;

use tracing::info;

use crate::config::RecencyWindow;
use crate::error::{FactCheckError, Result};
use crate::traits::searcher::{NewsItem, NewsSearcher};

/// Finds candidate articles for a topic, optionally scoped to one site.
pub struct ArticleSearcher {
    searcher: Arc<dyn NewsSearcher>,
}

impl ArticleSearcher {
    pub fn new(searcher: Arc<dyn NewsSearcher>) -> Self {
        Self { searcher }
    }

    /// Search for articles. An empty result set is `NoArticles`; the
    /// caller reports it and moves on, it never crashes the run.
    pub async fn search(
        &self,
        topic: &str,
        site: Option<&str>,
        window: RecencyWindow,
    ) -> Result<Vec<NewsItem>> {
        let query = match site {
            Some(site) if !site.is_empty() && site != "any" => format!("site:{site} {topic}"),
            _ => topic.to_string(),
        };

        info!(query = %query, "searching for articles");
        let articles = self.searcher.search_news(&query, window).await?;

        if articles.is_empty() {
            return Err(FactCheckError::NoArticles { query });
        }
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::searcher::MockNewsSearcher;

    #[tokio::test]
    async fn test_site_scoped_query() {
        let searcher = MockNewsSearcher::new().with_results(
            "site:cnn.com tariffs",
            vec![NewsItem::new("story", "https://cnn.com/story")],
        );
        let searcher = Arc::new(searcher);
        let articles = ArticleSearcher::new(searcher.clone());

        let found = articles
            .search("tariffs", Some("cnn.com"), RecencyWindow::Month)
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(searcher.queries_seen(), vec!["site:cnn.com tariffs"]);
    }

    #[tokio::test]
    async fn test_any_site_uses_plain_topic() {
        let searcher = MockNewsSearcher::new()
            .with_results("tariffs", vec![NewsItem::new("story", "https://x.com/1")]);
        let articles = ArticleSearcher::new(Arc::new(searcher));

        let found = articles
            .search("tariffs", Some("any"), RecencyWindow::Month)
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_results_is_no_articles() {
        let articles = ArticleSearcher::new(Arc::new(MockNewsSearcher::new()));
        let err = articles
            .search("nothing", None, RecencyWindow::Week)
            .await
            .unwrap_err();
        assert!(matches!(err, FactCheckError::NoArticles { .. }));
    }
}
