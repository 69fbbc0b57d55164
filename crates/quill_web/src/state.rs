use std::sync::Arc;

use quill_core::Summarizer;

pub struct AppState {
    pub summarizer: Arc<dyn Summarizer>,
}
