//! HTTP error mapping.

use axum::{
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use thiserror::Error;
use trigger_engine::types::ErrorOutput;
use trigger_engine::EngineError;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Engine(#[from] EngineError),

  #[error("invalid request body: {}", .0.body_text())]
  Body(#[from] JsonRejection),

  #[error("history too large: {got} logs (max {max})")]
  TooLarge { got: usize, max: usize },
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, body) = match &self {
      ApiError::Engine(e) => (StatusCode::BAD_REQUEST, ErrorOutput::from(e)),
      ApiError::Body(rejection) => {
        let status = match rejection {
          JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
            StatusCode::BAD_REQUEST
          }
          other => other.status(),
        };
        (status, ErrorOutput::new(rejection.body_text()))
      }
      ApiError::TooLarge { .. } => (
        StatusCode::PAYLOAD_TOO_LARGE,
        ErrorOutput::new(self.to_string()).with_field("logs"),
      ),
    };
    tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
    (status, Json(body)).into_response()
  }
}
