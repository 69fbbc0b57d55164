use std::time::Duration;

use url::Url;

pub mod clients;

pub use clients::create_summarizer;

/// Client configuration shared by the summarizer implementations.
/// Transport details live here; the callers only see the trait.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: Option<Url>,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout: Duration::from_secs(30),
        }
    }
}

pub mod prelude {
    pub use super::clients::{
        create_summarizer, GatewaySummarizer, NaiveSummarizer, OpenAiSummarizer,
    };
    pub use super::Config;
    pub use quill_core::{Result, Summarizer};
}
