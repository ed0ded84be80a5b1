//! Shared, read-only service state.

use trigger_engine::Engine;

use crate::config::ServiceConfig;
use crate::error::ApiError;

pub struct AppState {
  pub engine: Engine,
  pub max_logs: usize,
}

impl AppState {
  pub fn new(config: &ServiceConfig) -> Self {
    Self {
      engine: Engine::new(config.engine.clone()),
      max_logs: config.max_logs,
    }
  }

  /// Reject histories larger than the configured bound.
  pub fn check_size(&self, logs: usize) -> Result<(), ApiError> {
    if logs > self.max_logs {
      return Err(ApiError::TooLarge {
        got: logs,
        max: self.max_logs,
      });
    }
    Ok(())
  }
}
