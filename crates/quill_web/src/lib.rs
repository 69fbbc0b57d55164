use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// The summary gateway: one pass-through endpoint plus a liveness root.
pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::root))
        .route("/api/generate-summary", post(handlers::generate_summary))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use super::AppState;
    pub use quill_core::{Error, Result, Summarizer};
}
