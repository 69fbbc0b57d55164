use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use quill_core::Summarizer;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateSummaryRequest {
    #[serde(default)]
    pub content: String,
}

pub async fn root() -> &'static str {
    "quill summary gateway"
}

/// Forwards the text to the summarization collaborator and maps the
/// outcome onto HTTP statuses. No retry, no caching; one attempt per call.
pub async fn generate_summary(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateSummaryRequest>,
) -> impl IntoResponse {
    if request.content.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Content is required" })),
        );
    }

    info!(
        "Generating summary for {} characters of content",
        request.content.len()
    );
    match state.summarizer.summarize(&request.content).await {
        Ok(summary) => (StatusCode::OK, Json(json!({ "summary": summary }))),
        Err(e) => {
            error!("Summary generation failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to generate summary",
                    "details": e.to_string(),
                })),
            )
        }
    }
}
