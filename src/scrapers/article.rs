//! Article body scraper.
//!
//! Downloads an article page and keeps the visible paragraph text. Every
//! failure (network, HTTP status, no paragraphs) is logged and reported as
//! `None` so the caller can skip the item and keep going.

use reqwest::Client;
use scraper::{Html, Selector};
use std::error::Error;
use tracing::{debug, info, instrument, warn};

/// Source of article body text for the pipeline.
pub trait FetchContent {
    /// Return the article text, or `None` when it could not be retrieved.
    async fn fetch_content(&self, url: &str) -> Option<String>;
}

/// HTTP-backed article fetcher. No retries and no caching: every call is a
/// fresh GET.
#[derive(Debug, Clone)]
pub struct ArticleFetcher {
    client: Client,
}

impl ArticleFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn download(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}

impl FetchContent for ArticleFetcher {
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn fetch_content(&self, url: &str) -> Option<String> {
        let body = match self.download(url).await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "Article fetch failed");
                return None;
            }
        };

        let text = extract_paragraph_text(&body);
        if text.is_empty() {
            warn!(bytes = body.len(), "Article has no paragraph text");
            return None;
        }

        info!(bytes = text.len(), "Parsed article");
        Some(text)
    }
}

/// Join the text of every non-blank `<p>` element with single spaces.
pub fn extract_paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let paragraph_selector = Selector::parse("p").unwrap();

    let paragraphs = document
        .select(&paragraph_selector)
        .map(|element| element.text().collect::<String>())
        .filter(|text| !text.trim().is_empty())
        .map(|text| text.trim().to_string())
        .collect::<Vec<_>>();

    debug!(paragraphs = paragraphs.len(), "Extracted paragraphs");
    paragraphs.join(" ")
}
