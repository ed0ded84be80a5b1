//! Food Diary Insights API
//!
//! HTTP service that runs the trigger engine over a DayLog history the caller
//! already fetched from storage. Bind to 127.0.0.1 by default (internal only).

mod config;
mod error;
mod handlers;
mod state;
mod types;

use std::sync::Arc;

use axum::{routing::get, routing::post, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, ServiceConfig};
pub use error::ApiError;
pub use handlers::{analyze, correlations, default_symptoms, health, safe_foods, summary};
pub use state::AppState;
pub use types::{JsonBody, SummaryRequest};

/// All routes, ready to serve.
pub fn router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(health))
    .route("/symptoms/defaults", get(default_symptoms))
    .route("/analyze", post(analyze))
    .route("/correlations", post(correlations))
    .route("/summary", post(summary))
    .route("/safe-foods", post(safe_foods))
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}
