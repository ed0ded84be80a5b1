//! Request types specific to the HTTP surface.

use axum::extract::FromRequest;
use serde::Deserialize;
use trigger_engine::DayLog;

use crate::error::ApiError;

/// `axum::Json` whose rejections answer with an `ErrorOutput` body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Body for `POST /summary`.
#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
  pub logs: Vec<DayLog>,
}
