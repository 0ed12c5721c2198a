use clap::{ArgGroup, Parser};
use harvest_page::config::{ConfigError, CrawlConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "harvest-page")]
#[command(about = "Crawler that harvests selected page content from a site")]
#[command(version)]
#[command(group(ArgGroup::new("seeds").required(true)))]
pub struct Args {
    /// URL to start crawling from
    #[arg(short, long, group = "seeds")]
    pub url: Option<String>,

    /// Path to a file with one seed URL per line
    #[arg(short, long, group = "seeds")]
    pub file: Option<PathBuf>,

    /// Maximum depth to crawl; zero or less crawls nothing [default: 2]
    #[arg(short, long, allow_negative_numbers = true)]
    pub depth: Option<i64>,

    /// CSS selector for content extraction [default: p]
    #[arg(short, long)]
    pub selector: Option<String>,

    /// Number of concurrent page fetches [default: 4]
    #[arg(short, long)]
    pub concurrency: Option<usize>,

    /// Directory per-seed output is written under
    #[arg(short, long, default_value = "storage")]
    pub output_dir: PathBuf,

    /// JSON config file; command-line flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Merge the config file (when given) with command-line overrides
    pub fn resolve_config(&self) -> Result<CrawlConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => CrawlConfig::from_file(path)?,
            None => CrawlConfig::default(),
        };

        if let Some(selector) = &self.selector {
            config.selector = selector.clone();
        }
        if let Some(depth) = self.depth {
            config.max_depth = usize::try_from(depth).unwrap_or_else(|_| {
                ::log::warn!("non-positive depth {} clamped to zero", depth);
                0
            });
        }
        if let Some(concurrency) = self.concurrency {
            config.max_concurrency = concurrency;
        }

        Ok(config)
    }
}
