//! Run configuration.
//!
//! Values are layered: command-line flags (and their environment variables)
//! win over the optional YAML file, which wins over built-in defaults. The
//! merged [`Config`] is validated once at startup; a missing API key stops
//! the run before any network call is made.
//!
//! ```yaml
//! api_key: sk-...
//! api_base: https://api.openai.com/v1
//! model: gpt-3.5-turbo
//! feed_url: https://www.livemint.com/rss/politics
//! max_items: 50
//! concurrency: 1
//! generation_retries: 0
//! http_timeout_secs: 30
//! sentiment_threshold: 0.2
//! ```

use crate::api::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::cli::Cli;
use crate::errors::{Error, Result};
use crate::feed::{DEFAULT_FEED_URL, DEFAULT_MAX_ITEMS, FeedQuery};
use crate::sentiment::DEFAULT_THRESHOLD;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, instrument};

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Settings read from `config.yaml`. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub api_base: Option<String>,
    pub model: Option<String>,
    pub feed_url: Option<String>,
    pub max_items: Option<usize>,
    pub concurrency: Option<usize>,
    pub generation_retries: Option<usize>,
    pub http_timeout_secs: Option<u64>,
    pub sentiment_threshold: Option<f64>,
}

impl FileConfig {
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        let config = Self::from_yaml(&text)?;
        info!("Loaded configuration file");
        Ok(config)
    }
}

/// Fully resolved settings for one run.
#[derive(Clone)]
pub struct Config {
    pub query: FeedQuery,
    pub feed_url: String,
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub concurrency: usize,
    pub generation_retries: usize,
    pub http_timeout: Duration,
    pub sentiment_threshold: f64,
    pub xlsx_output: PathBuf,
    pub json_output_dir: Option<PathBuf>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("query", &self.query)
            .field("feed_url", &self.feed_url)
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("concurrency", &self.concurrency)
            .field("generation_retries", &self.generation_retries)
            .field("http_timeout", &self.http_timeout)
            .field("sentiment_threshold", &self.sentiment_threshold)
            .field("xlsx_output", &self.xlsx_output)
            .field("json_output_dir", &self.json_output_dir)
            .finish()
    }
}

impl Config {
    /// Merge CLI values over file values over defaults. `today` stands in
    /// for a missing `--end-date`.
    pub fn resolve(cli: Cli, file: FileConfig, today: NaiveDate) -> Self {
        let max_items = cli.max_items.or(file.max_items).unwrap_or(DEFAULT_MAX_ITEMS);
        let timeout_secs = cli
            .http_timeout_secs
            .or(file.http_timeout_secs)
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        Self {
            query: FeedQuery::new(cli.start_date, cli.end_date.unwrap_or(today), max_items),
            feed_url: cli
                .feed_url
                .or(file.feed_url)
                .unwrap_or_else(|| DEFAULT_FEED_URL.to_string()),
            api_key: cli.api_key.or(file.api_key).unwrap_or_default(),
            api_base: cli
                .api_base
                .or(file.api_base)
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            model: cli
                .model
                .or(file.model)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            concurrency: cli.concurrency.or(file.concurrency).unwrap_or(1),
            generation_retries: cli
                .generation_retries
                .or(file.generation_retries)
                .unwrap_or(0),
            http_timeout: Duration::from_secs(timeout_secs),
            sentiment_threshold: file.sentiment_threshold.unwrap_or(DEFAULT_THRESHOLD),
            xlsx_output: cli.xlsx_output,
            json_output_dir: cli.json_output_dir,
        }
    }

    /// Parse-time layering plus validation: the entry point used by `main`.
    pub fn load(cli: Cli, today: NaiveDate) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        let config = Self::resolve(cli, file, today);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Config(
                "missing API key: pass --api-key, set OPENAI_API_KEY, or add api_key to the config file"
                    .to_string(),
            ));
        }
        if self.concurrency == 0 {
            return Err(Error::Config("concurrency must be at least 1".to_string()));
        }
        if self.http_timeout.is_zero() {
            return Err(Error::Config("http_timeout_secs must be at least 1".to_string()));
        }
        if !self.sentiment_threshold.is_finite() || self.sentiment_threshold < 0.0 {
            return Err(Error::Config(
                "sentiment_threshold must be a non-negative number".to_string(),
            ));
        }
        url::Url::parse(&self.feed_url)
            .map_err(|e| Error::Config(format!("invalid feed_url {}: {e}", self.feed_url)))?;
        url::Url::parse(&self.api_base)
            .map_err(|e| Error::Config(format!("invalid api_base {}: {e}", self.api_base)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    /// Built directly so exported OPENAI_* variables cannot leak in.
    fn base_cli() -> Cli {
        Cli {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: None,
            feed_url: None,
            max_items: None,
            xlsx_output: PathBuf::from("news_data_with_sentiment.xlsx"),
            json_output_dir: None,
            config: None,
            api_key: None,
            api_base: None,
            model: None,
            concurrency: None,
            generation_retries: None,
            http_timeout_secs: None,
        }
    }

    fn cli_with_key(key: &str) -> Cli {
        Cli {
            api_key: Some(key.to_string()),
            ..base_cli()
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::resolve(cli_with_key("k"), FileConfig::default(), today());
        assert_eq!(config.query.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(config.query.end_date, today());
        assert_eq!(config.query.max_items, DEFAULT_MAX_ITEMS);
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.concurrency, 1);
        assert_eq!(config.generation_retries, 0);
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert_eq!(config.sentiment_threshold, DEFAULT_THRESHOLD);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_overlay_and_cli_precedence() {
        let file = FileConfig::from_yaml(
            "api_key: from-file\nmodel: file-model\nmax_items: 7\nconcurrency: 3\nsentiment_threshold: 0.3\n",
        )
        .unwrap();
        let config = Config::resolve(
            Cli {
                concurrency: Some(2),
                ..cli_with_key("from-cli")
            },
            file,
            today(),
        );
        assert_eq!(config.api_key, "from-cli");
        assert_eq!(config.model, "file-model");
        assert_eq!(config.query.max_items, 7);
        assert_eq!(config.concurrency, 2);
        assert_eq!(config.sentiment_threshold, 0.3);
    }

    #[test]
    fn test_validate_rejects_blank_key_and_zero_concurrency() {
        let mut config = Config::resolve(cli_with_key("k"), FileConfig::default(), today());
        config.api_key = "   ".to_string();
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        config.api_key = "k".to_string();
        config.concurrency = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_unknown_yaml_key_is_rejected() {
        assert!(matches!(
            FileConfig::from_yaml("modle: typo\n"),
            Err(Error::Yaml(_))
        ));
        assert_eq!(FileConfig::from_yaml("").unwrap(), FileConfig::default());
    }

    #[test]
    fn test_load_reads_file_and_reports_missing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key: sk-file").unwrap();
        writeln!(file, "feed_url: https://feeds.example.com/world").unwrap();

        let with_file = Cli {
            config: Some(file.path().to_path_buf()),
            ..base_cli()
        };
        let config = Config::load(with_file, today()).unwrap();
        assert_eq!(config.feed_url, "https://feeds.example.com/world");
        assert_eq!(config.api_key, "sk-file");

        let missing = Cli {
            config: Some(PathBuf::from("/nonexistent/config.yaml")),
            ..base_cli()
        };
        let missing = Config::load(missing, today());
        assert!(matches!(missing, Err(Error::Config(_))));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::resolve(cli_with_key("sk-secret"), FileConfig::default(), today());
        assert!(!format!("{config:?}").contains("sk-secret"));
    }
}
