//! Command-line interface definitions for Counter News.
//!
//! Credentials and endpoint settings can also come from environment
//! variables. Options left unset fall back to the YAML config file (if any)
//! and then to built-in defaults; see [`crate::config`].

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the Counter News application.
///
/// # Examples
///
/// ```sh
/// # Everything published in March 2024, key from the environment
/// OPENAI_API_KEY=sk-... counter_news --start-date 2024-03-01 --end-date 2024-03-31
///
/// # Also dump JSON and process four articles at a time
/// counter_news -j ./json --concurrency 4 --max-items 20
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// First publication date to include (YYYY-MM-DD, UTC)
    #[arg(long, default_value = "2024-01-01")]
    pub start_date: NaiveDate,

    /// Last publication date to include, whole day (YYYY-MM-DD, UTC; defaults to today)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// Syndication feed to read
    #[arg(long)]
    pub feed_url: Option<String>,

    /// Stop after this many matching feed entries
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Spreadsheet written after the run
    #[arg(short = 'o', long, default_value = "news_data_with_sentiment.xlsx")]
    pub xlsx_output: PathBuf,

    /// Optional output directory for a JSON dump of the results
    #[arg(short, long)]
    pub json_output_dir: Option<PathBuf>,

    /// Optional path to config.yaml file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// API key for the chat-completions service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, env = "OPENAI_API_BASE")]
    pub api_base: Option<String>,

    /// Chat model used for the counter articles
    #[arg(long, env = "OPENAI_MODEL")]
    pub model: Option<String>,

    /// Articles processed at once (results keep feed order)
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Retries per generation request after the first attempt
    #[arg(long)]
    pub generation_retries: Option<usize>,

    /// Per-request HTTP timeout in seconds
    #[arg(long)]
    pub http_timeout_secs: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "counter_news",
            "--start-date",
            "2024-03-01",
            "--end-date",
            "2024-03-31",
            "--max-items",
            "10",
            "--json-output-dir",
            "./json",
            "--api-key",
            "sk-test",
            "--concurrency",
            "4",
        ]);

        assert_eq!(cli.start_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(cli.end_date, NaiveDate::from_ymd_opt(2024, 3, 31));
        assert_eq!(cli.max_items, Some(10));
        assert_eq!(cli.json_output_dir, Some(PathBuf::from("./json")));
        assert_eq!(cli.api_key.as_deref(), Some("sk-test"));
        assert_eq!(cli.concurrency, Some(4));
    }

    #[test]
    fn test_cli_defaults_and_short_flags() {
        let cli = Cli::parse_from(["counter_news", "-j", "/tmp/json", "-c", "/tmp/config.yaml"]);

        assert_eq!(cli.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(cli.end_date, None);
        assert_eq!(cli.xlsx_output, PathBuf::from("news_data_with_sentiment.xlsx"));
        assert_eq!(cli.json_output_dir, Some(PathBuf::from("/tmp/json")));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.yaml")));
        assert_eq!(cli.max_items, None);
    }

    #[test]
    fn test_cli_rejects_bad_date() {
        assert!(Cli::try_parse_from(["counter_news", "--start-date", "03/01/2024"]).is_err());
    }
}
