//! Data models shared by the pipeline stages.
//!
//! - [`FeedEntry`]: one syndicated item as read from the feed
//! - [`Sentiment`]: the three-way label produced by the classifier
//! - [`ArticleRecord`]: a fully processed item (original + counter article)
//! - [`ResultSet`]: the ordered records of one run
//!
//! `ArticleRecord` serializes with the spreadsheet column titles as keys so
//! the JSON dump and the workbook read the same way.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A feed item that carried a parsed publication timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
    pub published_date: DateTime<Utc>,
}

/// Three-way sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }

    /// Combine the headline and body labels of one article.
    ///
    /// Positive wins over Negative when the two disagree; Neutral only when
    /// neither side carries a polarity.
    pub fn overall(title: Sentiment, content: Sentiment) -> Sentiment {
        if content == Sentiment::Positive || title == Sentiment::Positive {
            Sentiment::Positive
        } else if content == Sentiment::Negative || title == Sentiment::Negative {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One completed row of the result table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    #[serde(rename = "Published Date")]
    pub published_date: DateTime<Utc>,
    #[serde(rename = "Headline")]
    pub headline: String,
    #[serde(rename = "Original Content")]
    pub original_content: String,
    #[serde(rename = "Original Sentiment")]
    pub original_sentiment: Sentiment,
    #[serde(rename = "Counter Article")]
    pub counter_article: String,
    #[serde(rename = "Counter Sentiment")]
    pub counter_sentiment: Sentiment,
}

/// Column titles, in export order.
pub const COLUMNS: [&str; 6] = [
    "Published Date",
    "Headline",
    "Original Content",
    "Original Sentiment",
    "Counter Article",
    "Counter Sentiment",
];

impl ArticleRecord {
    /// Cell values in [`COLUMNS`] order.
    pub fn cells(&self) -> [String; 6] {
        [
            self.published_date.format("%Y-%m-%d %H:%M:%S").to_string(),
            self.headline.clone(),
            self.original_content.clone(),
            self.original_sentiment.to_string(),
            self.counter_article.clone(),
            self.counter_sentiment.to_string(),
        ]
    }
}

/// Records of a single run, in processing (feed) order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    records: Vec<ArticleRecord>,
}

impl ResultSet {
    pub fn new(records: Vec<ArticleRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArticleRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ArticleRecord;
    type IntoIter = std::slice::Iter<'a, ArticleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record() -> ArticleRecord {
        ArticleRecord {
            published_date: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
            headline: "Economy grows 5%".to_string(),
            original_content: "The economy grew strongly.".to_string(),
            original_sentiment: Sentiment::Positive,
            counter_article: "Growth hides deep problems.".to_string(),
            counter_sentiment: Sentiment::Negative,
        }
    }

    #[test]
    fn test_overall_positive_has_priority() {
        assert_eq!(
            Sentiment::overall(Sentiment::Positive, Sentiment::Negative),
            Sentiment::Positive
        );
        assert_eq!(
            Sentiment::overall(Sentiment::Negative, Sentiment::Positive),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_overall_negative_and_neutral() {
        assert_eq!(
            Sentiment::overall(Sentiment::Neutral, Sentiment::Negative),
            Sentiment::Negative
        );
        assert_eq!(
            Sentiment::overall(Sentiment::Negative, Sentiment::Neutral),
            Sentiment::Negative
        );
        assert_eq!(
            Sentiment::overall(Sentiment::Neutral, Sentiment::Neutral),
            Sentiment::Neutral
        );
    }

    #[test]
    fn test_sentiment_display() {
        assert_eq!(Sentiment::Positive.to_string(), "Positive");
        assert_eq!(Sentiment::Neutral.as_str(), "Neutral");
    }

    #[test]
    fn test_record_serializes_with_column_titles() {
        let json = serde_json::to_value(record()).unwrap();
        for column in COLUMNS {
            assert!(json.get(column).is_some(), "missing key {column}");
        }
        assert_eq!(json["Original Sentiment"], "Positive");
    }

    #[test]
    fn test_record_cells_follow_column_order() {
        let cells = record().cells();
        assert_eq!(cells[0], "2024-03-01 09:30:00");
        assert_eq!(cells[1], "Economy grows 5%");
        assert_eq!(cells[3], "Positive");
        assert_eq!(cells[5], "Negative");
    }

    #[test]
    fn test_result_set_serializes_as_array() {
        let set = ResultSet::new(vec![record()]);
        let json = serde_json::to_value(&set).unwrap();
        assert!(json.is_array());
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }
}
