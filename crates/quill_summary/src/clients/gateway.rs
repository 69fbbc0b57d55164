use async_trait::async_trait;
use quill_core::{Error, Result, Summarizer};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::Config;

#[derive(Serialize)]
struct SummaryRequest<'a> {
    content: &'a str,
}

#[derive(Deserialize)]
struct SummaryResponse {
    summary: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Client for the quill_web summary gateway: submit text, get a short
/// summary back or the gateway's error string.
#[derive(Debug)]
pub struct GatewaySummarizer {
    client: Client,
    endpoint: Url,
}

impl GatewaySummarizer {
    pub fn new(config: &Config) -> Result<Self> {
        let base = config
            .base_url
            .clone()
            .ok_or_else(|| Error::Summarization("Gateway base URL is required".to_string()))?;
        let endpoint = base
            .join("api/generate-summary")
            .map_err(|e| Error::Summarization(format!("Invalid gateway URL: {}", e)))?;
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl Summarizer for GatewaySummarizer {
    fn name(&self) -> &str {
        "gateway"
    }

    async fn summarize(&self, text: &str) -> Result<String> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&SummaryRequest { content: text })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| format!("gateway returned {}", status));
            return Err(Error::Summarization(message));
        }

        Ok(response.json::<SummaryResponse>().await?.summary)
    }
}
