use std::fmt;

use async_trait::async_trait;
use quill_core::{Error, Result, Summarizer};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::Config;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const MODEL: &str = "gpt-4o-mini";
const SYSTEM_PROMPT: &str = "You are a helpful assistant that generates concise summaries of \
                             blog posts. Keep summaries under 150 characters.";

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

/// Direct chat-completions client for the hosted model.
pub struct OpenAiSummarizer {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiSummarizer {
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| Error::Summarization("OpenAI API key is required".to_string()))?;
        let client = Client::builder().timeout(config.timeout).build()?;
        let base_url = config
            .base_url
            .as_ref()
            .map(|u| u.as_str().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }
}

impl fmt::Debug for OpenAiSummarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiSummarizer")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    fn name(&self) -> &str {
        "openai"
    }

    async fn summarize(&self, text: &str) -> Result<String> {
        let request = ChatRequest {
            model: MODEL.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: format!("Generate a brief summary of this blog post: {}", text),
                },
            ],
            max_tokens: 150,
            temperature: 0.7,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await?;

        Ok(response
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .unwrap_or_else(|| "No summary generated".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_an_api_key() {
        let result = OpenAiSummarizer::new(&Config::default());
        assert!(result.is_err());

        let config = Config {
            api_key: Some("test-key".to_string()),
            ..Config::default()
        };
        assert!(OpenAiSummarizer::new(&config).is_ok());
    }

    #[test]
    fn debug_output_redacts_the_key() {
        let config = Config {
            api_key: Some("sk-very-secret".to_string()),
            ..Config::default()
        };
        let summarizer = OpenAiSummarizer::new(&config).unwrap();
        let rendered = format!("{:?}", summarizer);
        assert!(!rendered.contains("sk-very-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
