//! HTTP handlers for the insights API.

use axum::{extract::State, Json};
use std::sync::Arc;

use trigger_engine::types::SymptomType;
use trigger_engine::{catalog, stats};
use trigger_engine::{AnalysisReport, AnalysisRequest, FoodCorrelation, SummaryStats};

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{JsonBody, SummaryRequest};

pub async fn health() -> &'static str {
  "ok"
}

pub async fn default_symptoms() -> Json<Vec<SymptomType>> {
  Json(catalog::default_symptoms())
}

pub async fn analyze(
  State(state): State<Arc<AppState>>,
  JsonBody(req): JsonBody<AnalysisRequest>,
) -> Result<Json<AnalysisReport>, ApiError> {
  state.check_size(req.logs.len())?;
  let report = state.engine.analyze_request(&req)?;
  tracing::info!(
    logs = req.logs.len(),
    correlations = report.correlations.len(),
    digest = %report.history_digest,
    "analyzed history"
  );
  Ok(Json(report))
}

pub async fn correlations(
  State(state): State<Arc<AppState>>,
  JsonBody(req): JsonBody<AnalysisRequest>,
) -> Result<Json<Vec<FoodCorrelation>>, ApiError> {
  state.check_size(req.logs.len())?;
  let engine = state.engine.with_lag_override(req.lag_hours)?;
  Ok(Json(engine.correlations(&req.logs)?))
}

pub async fn summary(
  State(state): State<Arc<AppState>>,
  JsonBody(req): JsonBody<SummaryRequest>,
) -> Result<Json<SummaryStats>, ApiError> {
  state.check_size(req.logs.len())?;
  Ok(Json(stats::summarize(&req.logs, state.engine.config().top_limit)))
}

pub async fn safe_foods(
  State(state): State<Arc<AppState>>,
  JsonBody(correlations): JsonBody<Vec<FoodCorrelation>>,
) -> Json<Vec<FoodCorrelation>> {
  Json(trigger_engine::safe_foods::select_safe_foods(
    &correlations,
    state.engine.config(),
  ))
}
