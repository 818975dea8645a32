//! Batch orchestration: feed → content → classify → generate → reclassify.
//!
//! [`Pipeline`] carries every feed entry through the stages and collects the
//! completed [`ArticleRecord`]s. An entry whose content cannot be retrieved
//! or whose counter article cannot be generated ends as a [`Notice`] instead
//! of a record; it never stops the batch.
//!
//! [`Session`] owns the feed source and the result set of one run. Once a
//! result set exists, triggering another run returns it unchanged without
//! touching the network.

use crate::api::AskAsync;
use crate::feed::{FeedQuery, FetchFeed};
use crate::models::{ArticleRecord, FeedEntry, ResultSet, Sentiment};
use crate::narrative::NarrativeGenerator;
use crate::scrapers::article::FetchContent;
use crate::sentiment::SentimentClassifier;
use futures::stream::{self, StreamExt};
use std::fmt;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// A user-visible, non-fatal message raised while processing a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    FeedUnavailable { error: String },
    ContentMissing { headline: String, link: String },
    GenerationFailed { headline: String, error: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::FeedUnavailable { error } => write!(f, "Feed unavailable: {error}"),
            Notice::ContentMissing { headline, link } => {
                write!(f, "Could not fetch content for \"{headline}\" ({link})")
            }
            Notice::GenerationFailed { headline, error } => {
                write!(f, "Could not generate counter article for \"{headline}\": {error}")
            }
        }
    }
}

/// Receiver for progress updates and notices.
pub trait Progress {
    /// Called once per entry, after it finished, with `done` counting up to `total`.
    fn advance(&mut self, done: usize, total: usize);
    fn notice(&mut self, notice: &Notice);
}

/// Renders progress and notices as log lines.
#[derive(Debug, Default)]
pub struct TracingProgress;

impl Progress for TracingProgress {
    fn advance(&mut self, done: usize, total: usize) {
        let fraction = if total == 0 {
            1.0
        } else {
            done as f64 / total as f64
        };
        let percent = (fraction * 100.0).round() as u64;
        info!(done, total, percent, "Progress");
    }

    fn notice(&mut self, notice: &Notice) {
        warn!("{notice}");
    }
}

enum Outcome {
    Recorded(ArticleRecord),
    Skipped(Notice),
}

pub struct Pipeline<C, A> {
    fetcher: C,
    generator: NarrativeGenerator<A>,
    classifier: SentimentClassifier,
    concurrency: usize,
}

impl<C, A> Pipeline<C, A>
where
    C: FetchContent,
    A: AskAsync,
{
    /// Build a sequential pipeline with the default classifier.
    ///
    /// # Arguments
    /// * `fetcher` - Source of article bodies, one request per entry.
    /// * `generator` - Counter-narrative generator wrapping the chat backend.
    ///
    /// # Returns
    /// A pipeline processing one entry at a time; see [`Self::with_concurrency`].
    pub fn new(fetcher: C, generator: NarrativeGenerator<A>) -> Self {
        Self {
            fetcher,
            generator,
            classifier: SentimentClassifier::new(),
            concurrency: 1,
        }
    }

    pub fn with_classifier(mut self, classifier: SentimentClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Number of entries in flight at once.
    ///
    /// Progress and notices are reported as entries finish; the result set
    /// is still assembled in feed order.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    #[instrument(level = "info", skip_all, fields(index = index, headline = %entry.title))]
    async fn process_entry(&self, index: usize, entry: &FeedEntry) -> Outcome {
        let Some(content) = self.fetcher.fetch_content(&entry.link).await else {
            return Outcome::Skipped(Notice::ContentMissing {
                headline: entry.title.clone(),
                link: entry.link.clone(),
            });
        };

        let title_sentiment = self.classifier.classify(&entry.title);
        let content_sentiment = self.classifier.classify(&content);
        let original_sentiment = Sentiment::overall(title_sentiment, content_sentiment);
        debug!(
            %title_sentiment,
            %content_sentiment,
            %original_sentiment,
            "Classified original"
        );

        let counter_article = match self.generator.generate(&content, original_sentiment).await {
            Ok(text) => text,
            Err(e) => {
                return Outcome::Skipped(Notice::GenerationFailed {
                    headline: entry.title.clone(),
                    error: e.to_string(),
                });
            }
        };
        let counter_sentiment = self.classifier.classify(&counter_article);
        info!(%original_sentiment, %counter_sentiment, "Processed article");

        Outcome::Recorded(ArticleRecord {
            published_date: entry.published_date,
            headline: entry.title.clone(),
            original_content: content,
            original_sentiment,
            counter_article,
            counter_sentiment,
        })
    }

    /// Run every entry through the stages and collect the completed records.
    ///
    /// # Arguments
    /// * `entries` - Feed entries in feed order.
    /// * `progress` - Receives one `advance` per finished entry and every notice.
    ///
    /// # Returns
    /// The records that made it through every stage, in feed order. Skipped
    /// entries only show up as notices.
    pub async fn process(&self, entries: &[FeedEntry], progress: &mut impl Progress) -> ResultSet {
        let t0 = Instant::now();
        let total = entries.len();
        info!(total, concurrency = self.concurrency, "Starting article processing");

        let mut outcomes = stream::iter(entries.iter().enumerate())
            .map(|(index, entry)| async move { (index, self.process_entry(index, entry).await) })
            .buffer_unordered(self.concurrency);

        let mut indexed = Vec::with_capacity(total);
        let mut done = 0usize;
        while let Some((index, outcome)) = outcomes.next().await {
            done += 1;
            match outcome {
                Outcome::Recorded(record) => indexed.push((index, record)),
                Outcome::Skipped(notice) => progress.notice(&notice),
            }
            progress.advance(done, total);
        }
        indexed.sort_by_key(|(index, _)| *index);
        let records: Vec<ArticleRecord> = indexed.into_iter().map(|(_, record)| record).collect();

        info!(
            total,
            recorded = records.len(),
            skipped = total - records.len(),
            elapsed_ms = t0.elapsed().as_millis() as u128,
            "Finished article processing"
        );
        ResultSet::new(records)
    }
}

/// One interactive run: a feed source, a pipeline and at most one result set.
pub struct Session<F, C, A> {
    feed: F,
    pipeline: Pipeline<C, A>,
    results: Option<ResultSet>,
}

impl<F, C, A> Session<F, C, A>
where
    F: FetchFeed,
    C: FetchContent,
    A: AskAsync,
{
    /// # Arguments
    /// * `feed` - Feed source read on the first trigger.
    /// * `pipeline` - Stages every entry goes through.
    pub fn new(feed: F, pipeline: Pipeline<C, A>) -> Self {
        Self {
            feed,
            pipeline,
            results: None,
        }
    }

    pub fn results(&self) -> Option<&ResultSet> {
        self.results.as_ref()
    }

    /// Read the feed and process it, unless this session already holds a
    /// result set, in which case that set is returned untouched.
    ///
    /// # Arguments
    /// * `query` - Date window and item cap for the feed read.
    /// * `progress` - Receives progress updates and notices.
    ///
    /// # Returns
    /// The session's result set. A feed that cannot be read is reported as a
    /// notice and treated as empty. When the feed yields no entries nothing
    /// is stored and `None` is returned, so a later call may try again.
    #[instrument(level = "info", skip_all, fields(start = %query.start_date, end = %query.end_date))]
    pub async fn fetch_and_process(
        &mut self,
        query: &FeedQuery,
        progress: &mut impl Progress,
    ) -> Option<&ResultSet> {
        if self.results.is_some() {
            info!("Results already computed for this session; skipping");
            return self.results.as_ref();
        }

        let entries = match self.feed.fetch_entries(query).await {
            Ok(entries) => entries,
            Err(e) => {
                progress.notice(&Notice::FeedUnavailable {
                    error: e.to_string(),
                });
                Vec::new()
            }
        };
        if entries.is_empty() {
            info!("No feed entries in the selected window");
            return None;
        }

        let results = self.pipeline.process(&entries, progress).await;
        self.results = Some(results);
        self.results.as_ref()
    }
}
