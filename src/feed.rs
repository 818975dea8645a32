//! Syndication feed reader.
//!
//! Downloads one feed, keeps the entries published inside a calendar-date
//! window and stops after `max_items` matches. Matching is a scan in the
//! feed's own order, not a "latest N" selection: if the feed is not sorted
//! by time, the entries it lists first win.

use crate::errors::{Error, Result};
use crate::models::FeedEntry;
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use reqwest::Client;
use tracing::{debug, info, instrument};

/// Politics feed used when no `--feed-url` is given.
pub const DEFAULT_FEED_URL: &str = "https://www.livemint.com/rss/politics";

/// Scan limit used when no `--max-items` is given.
pub const DEFAULT_MAX_ITEMS: usize = 50;

/// Date window and scan limit for one feed read.
///
/// Both dates are whole UTC calendar days; `end_date` is inclusive of its
/// full day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub max_items: usize,
}

impl FeedQuery {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, max_items: usize) -> Self {
        Self {
            start_date,
            end_date,
            max_items,
        }
    }

    /// True when `published` falls in `[start 00:00, end + 1 day 00:00)`.
    pub fn contains(&self, published: &DateTime<Utc>) -> bool {
        let start = self.start_date.and_time(NaiveTime::MIN).and_utc();
        if *published < start {
            return false;
        }
        match self.end_date.checked_add_days(Days::new(1)) {
            Some(next_day) => *published < next_day.and_time(NaiveTime::MIN).and_utc(),
            None => true,
        }
    }
}

/// Source of feed entries for the pipeline.
pub trait FetchFeed {
    /// Read the feed and return the qualifying entries in feed order.
    ///
    /// # Arguments
    /// * `query` - Date window and scan limit.
    ///
    /// # Returns
    /// Entries published inside the window, at most `query.max_items` of
    /// them. Transport and parse failures are errors.
    async fn fetch_entries(&self, query: &FeedQuery) -> Result<Vec<FeedEntry>>;
}

/// HTTP-backed feed reader for a single feed URL.
#[derive(Debug, Clone)]
pub struct FeedReader {
    client: Client,
    feed_url: String,
}

impl FeedReader {
    /// # Arguments
    /// * `client` - Shared HTTP client carrying timeout and user agent.
    /// * `feed_url` - RSS, Atom or JSON Feed address.
    pub fn new(client: Client, feed_url: impl Into<String>) -> Self {
        Self {
            client,
            feed_url: feed_url.into(),
        }
    }
}

impl FetchFeed for FeedReader {
    #[instrument(level = "info", skip_all, fields(feed_url = %self.feed_url))]
    async fn fetch_entries(&self, query: &FeedQuery) -> Result<Vec<FeedEntry>> {
        let body = self
            .client
            .get(&self.feed_url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        debug!(bytes = body.len(), "Downloaded feed");

        let entries = select_entries(&body, query)?;
        info!(
            count = entries.len(),
            start = %query.start_date,
            end = %query.end_date,
            max_items = query.max_items,
            "Selected feed entries"
        );
        Ok(entries)
    }
}

/// Parse a feed document and apply the date window and scan limit.
///
/// # Arguments
/// * `document` - Raw feed bytes in any format `feed-rs` understands.
/// * `query` - Date window and scan limit.
///
/// # Returns
/// Matching entries in feed order. Entries without a publication timestamp
/// or without a link are skipped; a missing title becomes the empty string.
pub fn select_entries(document: &[u8], query: &FeedQuery) -> Result<Vec<FeedEntry>> {
    let feed = feed_rs::parser::parse(document).map_err(|e| Error::Feed(e.to_string()))?;

    let mut selected = Vec::new();
    for entry in feed.entries {
        if selected.len() >= query.max_items {
            break;
        }
        let Some(published_date) = entry.published else {
            debug!(id = %entry.id, "Skipping entry without publication date");
            continue;
        };
        if !query.contains(&published_date) {
            continue;
        }
        let Some(link) = entry.links.first().map(|l| l.href.clone()) else {
            debug!(id = %entry.id, "Skipping entry without link");
            continue;
        };
        selected.push(FeedEntry {
            title: entry.title.map(|t| t.content).unwrap_or_default(),
            link,
            published_date,
        });
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spawn_server;
    use axum::{Router, http::StatusCode, routing::get};
    use chrono::TimeZone;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Politics</title>
    <link>https://news.example.com/politics</link>
    <description>Politics feed</description>
    <item>
      <title>Budget passes</title>
      <link>https://news.example.com/budget</link>
      <pubDate>Fri, 01 Mar 2024 10:00:00 GMT</pubDate>
    </item>
    <item>
      <title>No date here</title>
      <link>https://news.example.com/undated</link>
    </item>
    <item>
      <title>Late night vote</title>
      <link>https://news.example.com/vote</link>
      <pubDate>Sun, 03 Mar 2024 23:59:59 GMT</pubDate>
    </item>
    <item>
      <title>Next week</title>
      <link>https://news.example.com/next</link>
      <pubDate>Mon, 04 Mar 2024 00:00:00 GMT</pubDate>
    </item>
    <item>
      <title>Old story</title>
      <link>https://news.example.com/old</link>
      <pubDate>Wed, 28 Feb 2024 12:00:00 GMT</pubDate>
    </item>
  </channel>
</rss>"#;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn titles(entries: &[FeedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_window_includes_whole_end_day() {
        let query = FeedQuery::new(date(2024, 3, 1), date(2024, 3, 3), 50);
        let entries = select_entries(FEED.as_bytes(), &query).unwrap();
        assert_eq!(titles(&entries), vec!["Budget passes", "Late night vote"]);
        assert_eq!(
            entries[0].published_date,
            Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
        );
        assert_eq!(entries[0].link, "https://news.example.com/budget");
    }

    #[test]
    fn test_entries_without_timestamp_are_skipped() {
        let query = FeedQuery::new(date(2000, 1, 1), date(2100, 1, 1), 50);
        let entries = select_entries(FEED.as_bytes(), &query).unwrap();
        assert_eq!(entries.len(), 4);
        assert!(!titles(&entries).contains(&"No date here"));
    }

    #[test]
    fn test_start_after_end_is_empty() {
        let query = FeedQuery::new(date(2024, 3, 4), date(2024, 3, 1), 50);
        let entries = select_entries(FEED.as_bytes(), &query).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_max_items_is_a_scan_limit_in_feed_order() {
        let query = FeedQuery::new(date(2000, 1, 1), date(2100, 1, 1), 2);
        let entries = select_entries(FEED.as_bytes(), &query).unwrap();
        assert_eq!(titles(&entries), vec!["Budget passes", "Late night vote"]);

        let none = FeedQuery::new(date(2000, 1, 1), date(2100, 1, 1), 0);
        assert!(select_entries(FEED.as_bytes(), &none).unwrap().is_empty());
    }

    #[test]
    fn test_unparseable_document_is_an_error() {
        let query = FeedQuery::new(date(2024, 1, 1), date(2024, 12, 31), 50);
        let result = select_entries(b"this is not a feed", &query);
        assert!(matches!(result, Err(Error::Feed(_))));
    }

    #[test]
    fn test_contains_boundaries() {
        let query = FeedQuery::new(date(2024, 3, 1), date(2024, 3, 1), 1);
        assert!(query.contains(&Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()));
        assert!(query.contains(&Utc.with_ymd_and_hms(2024, 3, 1, 23, 59, 59).unwrap()));
        assert!(!query.contains(&Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap()));
        assert!(!query.contains(&Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap()));
    }

    #[tokio::test]
    async fn test_reader_fetches_over_http() {
        let app = Router::new().route("/rss/politics", get(|| async { FEED }));
        let base = spawn_server(app).await;
        let reader = FeedReader::new(Client::new(), format!("{base}/rss/politics"));

        let query = FeedQuery::new(date(2024, 3, 1), date(2024, 3, 3), 50);
        let entries = reader.fetch_entries(&query).await.unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[tokio::test]
    async fn test_reader_reports_http_failure() {
        let app = Router::new().route(
            "/rss/politics",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        );
        let base = spawn_server(app).await;
        let reader = FeedReader::new(Client::new(), format!("{base}/rss/politics"));

        let query = FeedQuery::new(date(2024, 3, 1), date(2024, 3, 3), 50);
        assert!(reader.fetch_entries(&query).await.is_err());
    }
}
