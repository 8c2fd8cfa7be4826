//! Interactive configuration prompts.

use anyhow::Result;
use console::style;
use dialoguer::{Input, Select};

use factcheck::{NewsItem, RecencyWindow, RunConfig, VerificationDepth};

/// Most articles ever offered for interactive selection.
const MAX_SELECTABLE: usize = 10;

/// Collect the run configuration from the terminal.
pub fn collect_run_config() -> Result<RunConfig> {
    println!("{}", style("Fact-Checking Agent Configuration").bold());
    println!("{}", "=".repeat(40));

    let topic: String = Input::new()
        .with_prompt("Search topic (e.g. 'climate change', 'global trade')")
        .default("global trade".to_string())
        .interact_text()?;

    let site: String = Input::new()
        .with_prompt("Website to search ('any' for all sites)")
        .default("any".to_string())
        .interact_text()?;
    let site = site.trim().to_ascii_lowercase();

    let windows = [
        ("Past hour", RecencyWindow::Hour),
        ("Past day", RecencyWindow::Day),
        ("Past week", RecencyWindow::Week),
        ("Past month", RecencyWindow::Month),
        ("Past year", RecencyWindow::Year),
    ];
    let window_index = Select::new()
        .with_prompt("Time range")
        .items(&windows.map(|(label, _)| label))
        .default(3)
        .interact()?;

    let max_chars: usize = Input::new()
        .with_prompt("Max characters to analyze")
        .default(RunConfig::DEFAULT_MAX_CHARS)
        .interact_text()?;

    let num_articles: usize = Input::new()
        .with_prompt("Number of articles to analyze")
        .default(RunConfig::DEFAULT_NUM_ARTICLES)
        .interact_text()?;

    let depths = [
        ("quick (5 sources per claim, faster)", VerificationDepth::Quick),
        (
            "thorough (8 sources per claim, more accurate)",
            VerificationDepth::Thorough,
        ),
    ];
    let depth_index = Select::new()
        .with_prompt("Verification depth")
        .items(&depths.map(|(label, _)| label))
        .default(0)
        .interact()?;

    let mut config = RunConfig::new(topic)
        .with_time_range(windows[window_index].1)
        .with_max_chars(max_chars.max(1))
        .with_num_articles(num_articles.max(1))
        .with_depth(depths[depth_index].1);

    if !site.is_empty() && site != "any" {
        config = config.with_site(site);
    }

    Ok(config)
}

/// Pick articles out of the search results.
///
/// A single-article run gets an interactive choice from the top results;
/// multi-article runs take the first N, matching the batch behavior of
/// the pipeline.
pub fn select_articles(found: &[NewsItem], num_articles: usize) -> Result<Vec<NewsItem>> {
    let available = found.len().min(MAX_SELECTABLE);

    println!(
        "\nFound {} articles. Showing top {}:",
        found.len(),
        available
    );

    if num_articles == 1 {
        let labels: Vec<String> = found[..available].iter().map(crate::article_label).collect();
        let choice = Select::new()
            .with_prompt("Select an article")
            .items(&labels)
            .default(0)
            .interact()?;
        return Ok(vec![found[choice].clone()]);
    }

    let selected_count = num_articles.min(available);
    for article in &found[..selected_count] {
        println!("  - {}", crate::article_label(article));
    }
    println!("Analyzing first {selected_count} articles...");
    Ok(found[..selected_count].to_vec())
}

/// Wait for Enter between articles.
pub fn pause_between_articles() -> Result<()> {
    let _: String = Input::new()
        .with_prompt("Press Enter to continue to the next article")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}
