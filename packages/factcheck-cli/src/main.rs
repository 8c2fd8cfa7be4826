//! Interactive fact-checking agent.
//!
//! Prompts for a topic and search parameters, finds articles, runs the
//! claim-verification pipeline on each, and renders the reports.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use factcheck::{
    ArticleSearcher, FactChecker, FactCheckError, FallacyCatalog, GeminiModel, NewsItem,
    PageLoader, SerperClient,
};

mod display;
mod interactive;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,factcheck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

async fn run() -> Result<()> {
    let fallacies = FallacyCatalog::load_or_default("fallacies.csv");
    let config = interactive::collect_run_config()?;

    let searcher = Arc::new(SerperClient::from_env().context("search service unavailable")?);
    let model = Arc::new(GeminiModel::from_env().context("completion model unavailable")?);
    let fetcher = Arc::new(PageLoader::new());

    let articles = ArticleSearcher::new(searcher.clone());
    let checker = FactChecker::new(model, searcher, fetcher, &fallacies);

    let found = match articles
        .search(&config.topic, config.site.as_deref(), config.time_range)
        .await
    {
        Ok(found) => found,
        Err(FactCheckError::NoArticles { query }) => {
            println!(
                "No articles found for '{query}'. Please try different search terms."
            );
            return Ok(());
        }
        Err(e) => return Err(e).context("article search failed"),
    };

    let selected = interactive::select_articles(&found, config.num_articles)?;
    let total = selected.len();

    for (i, article) in selected.iter().enumerate() {
        println!(
            "\n{} ARTICLE {} of {} {}",
            "=".repeat(20),
            i + 1,
            total,
            "=".repeat(20)
        );

        match checker
            .analyze_article(article, config.max_chars, config.sources_per_claim())
            .await
        {
            Ok(report) => display::render_report(&report),
            Err(FactCheckError::NoClaims) => {
                println!(
                    "{}",
                    style("No verifiable claims could be extracted from this article.").yellow()
                );
            }
            Err(e) => {
                println!("{} {:#}", style("Analysis failed:").red(), anyhow::Error::from(e));
            }
        }

        if i + 1 < total {
            interactive::pause_between_articles()?;
        }
    }

    println!("\n{}", style("Fact-checking agent completed.").green());
    Ok(())
}

/// Shared label format for an article row: title plus source and date
/// when the search service supplied them.
fn article_label(article: &NewsItem) -> String {
    let source = article.source.as_deref().unwrap_or("Unknown");
    let date = article.date.as_deref().unwrap_or("Unknown");
    format!("{} ({source}, {date})", article.title)
}
