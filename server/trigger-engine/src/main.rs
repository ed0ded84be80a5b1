//! Binary entrypoint: read one AnalysisRequest JSON from stdin, write one
//! AnalysisReport JSON to stdout.
//!
//! Invalid input produces an ErrorOutput line on stdout and exit code 1.
//! I/O failures exit with code 2. Diagnostics go to stderr, filtered by RUST_LOG.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use trigger_engine::types::ErrorOutput;
use trigger_engine::{AnalysisRequest, Engine, EngineError};

#[derive(Debug, Error)]
enum RunError {
  #[error(transparent)]
  Input(#[from] EngineError),

  #[error("read stdin: {0}")]
  Read(#[source] io::Error),

  #[error("write stdout: {0}")]
  Write(#[source] io::Error),
}

fn main() -> ExitCode {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(io::stderr)
    .try_init();

  match run_binary() {
    Ok(()) => ExitCode::SUCCESS,
    Err(RunError::Input(e)) => {
      tracing::warn!(error = %e, "rejected input");
      let mut out = io::stdout().lock();
      let _ = serde_json::to_writer(&mut out, &ErrorOutput::from(&e));
      let _ = writeln!(out);
      ExitCode::from(1)
    }
    Err(e) => {
      tracing::error!(error = %e, "i/o failure");
      ExitCode::from(2)
    }
  }
}

fn run_binary() -> Result<(), RunError> {
  let mut raw = String::new();
  io::stdin()
    .lock()
    .read_to_string(&mut raw)
    .map_err(RunError::Read)?;
  let request: AnalysisRequest = serde_json::from_str(&raw).map_err(EngineError::from)?;

  let report = Engine::with_defaults().analyze_request(&request)?;
  let json = serde_json::to_vec(&report).map_err(EngineError::from)?;

  let mut out = io::stdout().lock();
  out
    .write_all(&json)
    .and_then(|_| writeln!(out))
    .map_err(RunError::Write)?;
  Ok(())
}
