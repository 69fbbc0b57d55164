use std::sync::Arc;

use quill_core::{Error, Result, Summarizer};

use crate::Config;

pub mod gateway;
pub mod naive;
pub mod openai;

pub use gateway::GatewaySummarizer;
pub use naive::NaiveSummarizer;
pub use openai::OpenAiSummarizer;

/// Builds a summarizer by name: "naive" (offline), "openai" (direct model
/// access), or "gateway" (through the quill_web endpoint).
pub fn create_summarizer(name: &str, config: &Config) -> Result<Arc<dyn Summarizer>> {
    match name {
        "naive" => Ok(Arc::new(NaiveSummarizer::new())),
        "openai" => Ok(Arc::new(OpenAiSummarizer::new(config)?)),
        "gateway" => Ok(Arc::new(GatewaySummarizer::new(config)?)),
        other => Err(Error::Summarization(format!(
            "Unknown summarizer: {}",
            other
        ))),
    }
}
