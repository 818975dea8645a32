//! # Counter News
//!
//! Reads recent items from a news feed, scrapes each article, classifies
//! its sentiment, asks a chat model for a counter-narrative with the
//! opposite sentiment, and classifies that rewrite too.
//!
//! ## Usage
//!
//! ```sh
//! OPENAI_API_KEY=sk-... counter_news --start-date 2024-03-01 --end-date 2024-03-31
//! ```
//!
//! ## Architecture
//!
//! 1. **Feed**: read the feed and keep entries inside the date window
//! 2. **Content**: download each article and extract its paragraphs
//! 3. **Classification**: label headline and body, combine into one label
//! 4. **Generation**: rewrite the body with the opposing sentiment, relabel
//! 5. **Output**: Markdown table on stdout, spreadsheet, optional JSON dump

use chrono::Utc;
use clap::Parser;
use reqwest::Client;
use std::error::Error;
use std::time::Duration as StdDuration;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cli;
mod config;
mod errors;
mod feed;
mod models;
mod narrative;
mod outputs;
mod pipeline;
mod scrapers;
mod sentiment;
mod utils;

#[cfg(test)]
mod test_support;

use api::{OpenAiChat, RetryAsk};
use cli::Cli;
use config::Config;
use feed::FeedReader;
use narrative::NarrativeGenerator;
use outputs::table;
use pipeline::{Pipeline, Session, TracingProgress};
use scrapers::article::ArticleFetcher;
use sentiment::SentimentClassifier;
use utils::ensure_writable_dir;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("counter_news starting up");

    let args = Cli::parse();
    let today = Utc::now().date_naive();
    let config = match Config::load(args, today) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };
    debug!(?config, "Resolved configuration");

    // Early check: ensure JSON output dir is writable
    if let Some(dir) = &config.json_output_dir {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir.display(),
                error = %e,
                "JSON output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e.into());
        }
    }

    let client = Client::builder()
        .timeout(config.http_timeout)
        .user_agent(USER_AGENT)
        .build()?;

    let chat = OpenAiChat::new(
        client.clone(),
        config.api_key.clone(),
        config.api_base.clone(),
        config.model.clone(),
    );
    let api = RetryAsk::new(chat, config.generation_retries, StdDuration::from_secs(1));
    let pipeline = Pipeline::new(ArticleFetcher::new(client.clone()), NarrativeGenerator::new(api))
        .with_classifier(SentimentClassifier::with_threshold(config.sentiment_threshold))
        .with_concurrency(config.concurrency);
    let mut session = Session::new(FeedReader::new(client, config.feed_url.clone()), pipeline);

    info!(
        feed_url = %config.feed_url,
        start = %config.query.start_date,
        end = %config.query.end_date,
        max_items = config.query.max_items,
        model = %config.model,
        "Fetching and processing news"
    );
    let mut progress = TracingProgress;
    session.fetch_and_process(&config.query, &mut progress).await;
    let Some(results) = session.results() else {
        warn!("No feed entries to process; nothing exported");
        return Ok(());
    };
    if results.is_empty() {
        warn!("Every article was skipped; exporting an empty result set");
    }

    println!("{}", table::render(results));

    outputs::export(
        results,
        &config.xlsx_output,
        config.json_output_dir.as_deref(),
        today,
    )
    .await?;

    info!(
        records = results.len(),
        elapsed_ms = start_time.elapsed().as_millis() as u128,
        "counter_news finished"
    );

    Ok(())
}
