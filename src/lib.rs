// Re-export modules
pub mod config;
pub mod crawler;
pub mod fetch;
pub mod filter;
pub mod output;
pub mod parsers;
pub mod results;
pub mod utils;
pub mod visited;

// Re-export commonly used types for convenience
pub use config::CrawlConfig;
pub use results::PageRecord;

use crate::crawler::CrawlContext;
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::filter::LinkResolver;
use scraper::Selector;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Configuration errors surfaced at the crawl boundary. Everything that
/// goes wrong past this point (dead links, malformed pages) is absorbed
/// into an empty branch instead.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("invalid selection rule '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("invalid link pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

/// Builder for one site crawl
///
/// ```no_run
/// # async fn demo() -> Result<(), harvest_page::HarvestError> {
/// let records = harvest_page::Harvest::new("https://example.com/")
///     .with_selector("article p")
///     .with_max_depth(2)
///     .run()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct Harvest {
    seed: String,
    config: CrawlConfig,
}

impl Harvest {
    /// Create a new crawl of the site rooted at `seed`
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            config: CrawlConfig::default(),
        }
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: CrawlConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, HarvestError> {
        self.config = CrawlConfig::from_file(path)?;
        Ok(self)
    }

    /// Override the selection rule
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.config.selector = selector.into();
        self
    }

    /// Override the crawl depth. Zero means no page is fetched.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Override the crawl-wide cap on in-flight fetches
    pub fn with_max_concurrency(mut self, value: usize) -> Self {
        self.config.max_concurrency = value;
        self
    }

    /// Override the per-request timeout
    pub fn with_request_timeout(mut self, seconds: u64) -> Self {
        self.config.request_timeout_secs = seconds;
        self
    }

    /// Run the crawl to completion and return every harvested record.
    /// The visited tracker lives and dies inside this call, so separate
    /// runs (and separate seeds) never interfere.
    pub async fn run(self) -> Result<Vec<PageRecord>, HarvestError> {
        let selection =
            Selector::parse(&self.config.selector).map_err(|err| HarvestError::Selector {
                selector: self.config.selector.clone(),
                message: err.to_string(),
            })?;

        let resolver =
            LinkResolver::new(&self.config.include_patterns, &self.config.exclude_patterns)?;

        let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpFetcher::new(
            &self.config.user_agent,
            Duration::from_secs(self.config.request_timeout_secs),
        )?);

        let ctx = Arc::new(CrawlContext::new(
            fetcher,
            selection,
            resolver,
            self.config.max_concurrency,
        ));

        Ok(crawler::crawl_site(ctx, self.seed, self.config.max_depth).await)
    }
}

/// One-call crawl with default settings for everything but the
/// selection rule and depth
pub async fn crawl(
    seed: &str,
    selector: &str,
    max_depth: usize,
) -> Result<Vec<PageRecord>, HarvestError> {
    Harvest::new(seed)
        .with_selector(selector)
        .with_max_depth(max_depth)
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_selector_is_surfaced() {
        let result = Harvest::new("https://a.test/").with_selector("p[").run().await;
        assert!(matches!(result, Err(HarvestError::Selector { .. })));
    }

    #[tokio::test]
    async fn test_invalid_pattern_is_surfaced() {
        let mut config = CrawlConfig::default();
        config.exclude_patterns.push("(".to_string());

        let result = Harvest::new("https://a.test/").with_config(config).run().await;
        assert!(matches!(result, Err(HarvestError::Pattern(_))));
    }

    #[tokio::test]
    async fn test_depth_zero_crawl_is_empty_without_network() {
        // No fetch happens at depth zero, so this cannot touch the
        // network even though the fetcher is real
        let records = Harvest::new("https://a.test/").with_max_depth(0).run().await.unwrap();
        assert!(records.is_empty());
    }
}
