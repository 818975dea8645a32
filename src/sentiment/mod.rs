//! Hybrid lexical sentiment classification.
//!
//! Two independent scorers run over the same normalized text:
//!
//! | Module | Signal |
//! |--------|--------|
//! | [`polarity`] | Mean adjective polarity with intensifiers and negation |
//! | [`compound`] | Valence sum with boosters, negation, "but" and emphasis |
//!
//! The label comes from their sum compared against a symmetric threshold.
//! Everything here is pure and deterministic; the lexicons in [`lexicon`]
//! are built once and shared.

pub mod compound;
pub mod lexicon;
pub mod polarity;
pub mod preprocess;

use crate::models::Sentiment;

/// Threshold applied to `polarity + compound`.
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Raw scores behind one classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScores {
    pub polarity: f64,
    pub compound: f64,
    pub combined: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct SentimentClassifier {
    threshold: f64,
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentClassifier {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold: threshold.abs(),
        }
    }

    /// Score `text` after normalization.
    pub fn scores(&self, text: &str) -> SentimentScores {
        let normalized = preprocess::normalize(text);
        let tokens: Vec<&str> = normalized.split(' ').filter(|t| !t.is_empty()).collect();

        let polarity = polarity::polarity(&tokens);
        let compound = compound::compound(&tokens);
        SentimentScores {
            polarity,
            compound,
            combined: polarity + compound,
        }
    }

    /// Label `text`. Blank input is Neutral without scoring.
    pub fn classify(&self, text: &str) -> Sentiment {
        if text.trim().is_empty() {
            return Sentiment::Neutral;
        }
        let combined = self.scores(text).combined;
        if combined > self.threshold {
            Sentiment::Positive
        } else if combined < -self.threshold {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}
