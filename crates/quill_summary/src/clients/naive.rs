use async_trait::async_trait;
use quill_core::{Result, Summarizer};
use tracing::debug;

const SENTENCES: usize = 3;

/// Offline summarizer: takes the first few sentences of the text. The
/// default where no model endpoint is configured.
#[derive(Debug, Default)]
pub struct NaiveSummarizer;

impl NaiveSummarizer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Summarizer for NaiveSummarizer {
    fn name(&self) -> &str {
        "naive"
    }

    async fn summarize(&self, text: &str) -> Result<String> {
        let sentences: Vec<&str> = text
            .split(|c| c == '.' || c == '!' || c == '?')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .take(SENTENCES)
            .collect();

        if sentences.is_empty() {
            return Ok(String::new());
        }

        let summary = sentences.join(". ") + ".";
        debug!("Generated summary from leading sentences: {}", summary);
        Ok(summary)
    }
}
