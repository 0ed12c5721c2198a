use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Error loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration for one crawl
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// CSS selector picking the elements whose text is harvested
    #[serde(default = "default_selector")]
    pub selector: String,

    /// Maximum number of link hops followed from the seed
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Maximum number of in-flight page fetches across the whole crawl
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// User-agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Regex patterns resolved links must match to be crawled
    /// (empty means no restriction)
    #[serde(default)]
    pub include_patterns: Vec<String>,

    /// Regex patterns for resolved links to skip (these take precedence
    /// over include patterns)
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            selector: default_selector(),
            max_depth: default_max_depth(),
            max_concurrency: default_max_concurrency(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
        }
    }
}

impl CrawlConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

/// Default selection rule when none is supplied
fn default_selector() -> String {
    "p".to_string()
}

/// Default crawl depth
fn default_max_depth() -> usize {
    2
}

/// Default value for max_concurrency
fn default_max_concurrency() -> usize {
    4
}

/// Default per-request timeout
fn default_request_timeout_secs() -> u64 {
    10
}

/// Default user-agent string
fn default_user_agent() -> String {
    crate::fetch::USER_AGENT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CrawlConfig::default();
        assert_eq!(config.selector, "p");
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.max_concurrency, 4);
        assert_eq!(config.request_timeout_secs, 10);
        assert!(config.include_patterns.is_empty());
        assert!(config.exclude_patterns.is_empty());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: CrawlConfig = serde_json::from_str(r#"{"max_depth": 5}"#).unwrap();
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.selector, "p");
        assert_eq!(config.max_concurrency, 4);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"selector": "article", "exclude_patterns": ["\\.pdf$"]}}"#
        )
        .unwrap();

        let config = CrawlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.selector, "article");
        assert_eq!(config.exclude_patterns, vec![r"\.pdf$".to_string()]);
    }

    #[test]
    fn test_from_file_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(
            CrawlConfig::from_file(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
