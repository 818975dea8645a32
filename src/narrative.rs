//! Counter-narrative generation.
//!
//! Wraps an [`AskAsync`] backend with the fixed rewriting instructions. One
//! request per article, no chunking: the article text goes into the prompt
//! as-is.

use crate::api::{AskAsync, ChatPrompt};
use crate::errors::Result;
use crate::models::Sentiment;
use tracing::{debug, instrument};

const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant that rewrites news articles to present an opposing sentiment while maintaining factual accuracy.";

/// Build the two-message prompt for one article.
///
/// # Arguments
/// * `article_text` - Scraped article body, embedded verbatim.
/// * `sentiment` - Label of the original article, named in the instruction.
///
/// # Returns
/// A [`ChatPrompt`] with the fixed system instruction and the rewrite request.
pub fn counter_prompt(article_text: &str, sentiment: Sentiment) -> ChatPrompt {
    ChatPrompt {
        system: SYSTEM_INSTRUCTION.to_string(),
        user: format!(
            "Rewrite the following news article to present an opposing view while keeping the factual information intact. Original sentiment: {sentiment}. News article: {article_text}"
        ),
    }
}

#[derive(Debug)]
pub struct NarrativeGenerator<A> {
    api: A,
}

impl<A: AskAsync> NarrativeGenerator<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Rewrite `article_text` with the sentiment opposite to `sentiment`.
    ///
    /// # Arguments
    /// * `article_text` - Article body to rewrite.
    /// * `sentiment` - Label of the original; the model is asked for the opposite.
    ///
    /// # Returns
    /// The trimmed reply. Transport, status and response-shape failures come
    /// back as errors for the caller to handle per item.
    #[instrument(level = "info", skip_all, fields(sentiment = %sentiment, chars = article_text.len()))]
    pub async fn generate(&self, article_text: &str, sentiment: Sentiment) -> Result<String> {
        let prompt = counter_prompt(article_text, sentiment);
        let reply = self.api.ask(&prompt).await?;
        let counter = reply.trim().to_string();
        debug!(chars = counter.len(), "Generated counter article");
        Ok(counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct Recording {
        prompts: Mutex<Vec<ChatPrompt>>,
        reply: Option<String>,
    }

    impl AskAsync for &Recording {
        async fn ask(&self, prompt: &ChatPrompt) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.clone());
            self.reply
                .clone()
                .ok_or_else(|| Error::MalformedResponse("no reply".to_string()))
        }
    }

    #[test]
    fn test_prompt_wording() {
        let prompt = counter_prompt("Economy grows 5%.", Sentiment::Positive);
        assert_eq!(prompt.system, SYSTEM_INSTRUCTION);
        assert_eq!(
            prompt.user,
            "Rewrite the following news article to present an opposing view while keeping the factual information intact. Original sentiment: Positive. News article: Economy grows 5%."
        );
    }

    #[tokio::test]
    async fn test_generate_trims_reply_and_sends_one_request() {
        let api = Recording {
            reply: Some("\n  Growth masks deeper problems.  \n".to_string()),
            ..Default::default()
        };
        let generator = NarrativeGenerator::new(&api);

        let counter = generator
            .generate("Economy grows 5%.", Sentiment::Positive)
            .await
            .unwrap();
        assert_eq!(counter, "Growth masks deeper problems.");

        let prompts = api.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].user.contains("Original sentiment: Positive."));
    }

    #[tokio::test]
    async fn test_generate_propagates_failure() {
        let api = Recording::default();
        let generator = NarrativeGenerator::new(&api);
        let result = generator.generate("text", Sentiment::Neutral).await;
        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }
}
