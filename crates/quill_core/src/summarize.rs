use async_trait::async_trait;

use crate::Result;

/// External collaborator that condenses plain text into a short summary.
#[async_trait]
pub trait Summarizer: Send + Sync {
    fn name(&self) -> &str;

    /// Submit text, get a short summary back or a failure. One attempt per
    /// call; retry policy belongs to the caller.
    async fn summarize(&self, text: &str) -> Result<String>;
}
