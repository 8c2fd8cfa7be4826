//! Run configuration for a fact-checking session.
//!
//! Everything the pipeline needs is carried in explicit values built once
//! at startup and passed into component constructors. No ambient lookups
//! inside core logic.

use serde::{Deserialize, Serialize};

/// How far back the news search should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecencyWindow {
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl RecencyWindow {
    /// The `tbs` recency code the search service expects.
    ///
    /// Month maps to `qdr:m1`, not `qdr:m`; the service treats them
    /// differently.
    pub fn as_tbs(&self) -> &'static str {
        match self {
            Self::Hour => "qdr:h",
            Self::Day => "qdr:d",
            Self::Week => "qdr:w",
            Self::Month => "qdr:m1",
            Self::Year => "qdr:y",
        }
    }

    /// Parse the single-letter form used by the CLI (`h`/`d`/`w`/`m`/`y`).
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "h" | "hour" => Some(Self::Hour),
            "d" | "day" => Some(Self::Day),
            "w" | "week" => Some(Self::Week),
            "m" | "month" => Some(Self::Month),
            "y" | "year" => Some(Self::Year),
            _ => None,
        }
    }
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self::Month
    }
}

/// How many evidence sources to collect per claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationDepth {
    /// 5 sources per claim (faster)
    Quick,
    /// 8 sources per claim (more accurate)
    Thorough,
}

impl VerificationDepth {
    pub fn sources_per_claim(&self) -> usize {
        match self {
            Self::Quick => 5,
            Self::Thorough => 8,
        }
    }
}

impl Default for VerificationDepth {
    fn default() -> Self {
        Self::Quick
    }
}

/// Configuration for one fact-checking run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// News topic to search for.
    pub topic: String,

    /// Restrict the article search to one site (None = all sites).
    pub site: Option<String>,

    /// Recency window for the article search.
    pub time_range: RecencyWindow,

    /// Maximum characters of article text sent to the model.
    pub max_chars: usize,

    /// Number of articles to analyze.
    pub num_articles: usize,

    /// Verification depth (controls evidence quota per claim).
    pub depth: VerificationDepth,
}

impl RunConfig {
    pub const DEFAULT_MAX_CHARS: usize = 3000;
    pub const DEFAULT_NUM_ARTICLES: usize = 1;

    /// Create a config for a topic with all defaults.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            site: None,
            time_range: RecencyWindow::default(),
            max_chars: Self::DEFAULT_MAX_CHARS,
            num_articles: Self::DEFAULT_NUM_ARTICLES,
            depth: VerificationDepth::default(),
        }
    }

    /// Restrict the article search to a single site.
    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    /// Set the recency window.
    pub fn with_time_range(mut self, window: RecencyWindow) -> Self {
        self.time_range = window;
        self
    }

    /// Set the per-article character cap.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Set the number of articles to analyze.
    pub fn with_num_articles(mut self, n: usize) -> Self {
        self.num_articles = n;
        self
    }

    /// Set the verification depth.
    pub fn with_depth(mut self, depth: VerificationDepth) -> Self {
        self.depth = depth;
        self
    }

    /// Evidence quota per claim implied by the chosen depth.
    pub fn sources_per_claim(&self) -> usize {
        self.depth.sources_per_claim()
    }
}
