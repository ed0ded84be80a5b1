//! Core engine: runs every analysis over one history snapshot.

use chrono::{Local, TimeZone};

use crate::config::Config;
use crate::correlation;
use crate::error::EngineError;
use crate::normalize;
use crate::safe_foods;
use crate::stats;
use crate::types::*;

/// Stateless across calls; holds only its configuration.
#[derive(Debug, Clone)]
pub struct Engine {
  config: Config,
}

impl Engine {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// This engine with its lag window replaced, if `lag_hours` is given.
  pub fn with_lag_override(&self, lag_hours: Option<f64>) -> Result<Engine, EngineError> {
    match lag_hours {
      Some(lag) if !lag.is_finite() || lag < 0.0 => Err(EngineError::validation(
        "lagHours",
        "must be a non-negative number",
      )),
      Some(lag) => Ok(Engine::new(Config {
        lag_hours: lag,
        ..self.config.clone()
      })),
      None => Ok(self.clone()),
    }
  }

  /// Analyze a request, honouring its lag override.
  pub fn analyze_request(&self, req: &AnalysisRequest) -> Result<AnalysisReport, EngineError> {
    self.with_lag_override(req.lag_hours)?.analyze(&req.logs)
  }

  /// Just the ranked correlations (local day boundaries).
  pub fn correlations(&self, logs: &[DayLog]) -> Result<Vec<FoodCorrelation>, EngineError> {
    correlation::correlate(logs, &self.config)
  }

  /// Analyze a history using local day boundaries.
  pub fn analyze(&self, logs: &[DayLog]) -> Result<AnalysisReport, EngineError> {
    self.analyze_in(&Local, logs)
  }

  pub fn analyze_in<Tz: TimeZone>(
    &self,
    tz: &Tz,
    logs: &[DayLog],
  ) -> Result<AnalysisReport, EngineError> {
    let history = normalize::flatten_in(tz, logs)?;
    let correlations = correlation::score_history(&history, &self.config);
    let safe_foods = safe_foods::select_safe_foods(&correlations, &self.config);
    let symptoms = stats::symptom_summaries(logs);
    let foods = stats::food_summaries(logs);
    let summary = stats::summary_from(logs, &symptoms, &foods, self.config.top_limit);

    let report = AnalysisReport {
      history_digest: history_digest(logs)?,
      lag_hours: self.config.lag_hours,
      correlations,
      safe_foods,
      summary,
      symptoms,
      foods,
    };

    tracing::debug!(
      digest = %report.history_digest,
      correlations = report.correlations.len(),
      safe_foods = report.safe_foods.len(),
      "analysis complete"
    );

    Ok(report)
  }
}

/// Stable id for a history snapshot: same logs in the same order, same id.
pub fn history_digest(logs: &[DayLog]) -> Result<String, EngineError> {
  let canonical = serde_json::to_vec(logs)?;
  let hex = blake3::hash(&canonical).to_hex();
  Ok(format!("hist-{}", &hex[..16]))
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Utc;

  fn log(date: &str, food: &str, food_time: &str, symptom: Option<(&str, &str)>) -> DayLog {
    DayLog {
      date: date.into(),
      foods: vec![FoodEntry {
        id: format!("food_{}", date),
        name: food.into(),
        timestamp: food_time.into(),
        meal_type: Some(MealType::Breakfast),
        notes: None,
      }],
      symptoms: symptom
        .map(|(label, ts)| {
          vec![SymptomEntry {
            id: format!("{}_{}", label, date),
            symptom_id: Some(label.to_lowercase()),
            label: label.into(),
            icon: "🎈".into(),
            severity: Some(4),
            timestamp: ts.into(),
          }]
        })
        .unwrap_or_default(),
      notes: None,
    }
  }

  fn history() -> Vec<DayLog> {
    vec![
      log("2025-01-10", "milk", "8:00 AM", Some(("Bloating", "10:00 AM"))),
      log("2025-01-12", "milk", "8:00 AM", Some(("Bloating", "10:00 AM"))),
      log("2025-01-14", "oats", "8:00 AM", None),
      log("2025-01-16", "oats", "8:00 AM", None),
      log("2025-01-18", "oats", "8:00 AM", None),
    ]
  }

  #[test]
  fn report_bundles_all_views() {
    let engine = Engine::with_defaults();
    let report = engine.analyze_in(&Utc, &history()).unwrap();

    assert_eq!(report.lag_hours, 24.0);
    assert_eq!(report.correlations[0].food, "milk");
    assert_eq!(report.correlations[0].suspicion_score, 100.0);
    assert_eq!(report.safe_foods.len(), 1);
    assert_eq!(report.safe_foods[0].food, "oats");
    assert_eq!(report.summary.total_days, 5);
    assert_eq!(report.summary.symptom_rate, 40);
    assert_eq!(report.symptoms[0].label, "Bloating");
    assert_eq!(report.foods[0].name, "oats");
    assert!(report.history_digest.starts_with("hist-"));
  }

  #[test]
  fn report_top_lists_agree_with_breakdowns() {
    let engine = Engine::new(Config {
      top_limit: 1,
      ..Config::default()
    });
    let report = engine.analyze_in(&Utc, &history()).unwrap();

    assert_eq!(report.summary, stats::summarize(&history(), 1));
    assert_eq!(report.summary.top_foods.len(), 1);
    assert_eq!(report.summary.top_foods[0].name, report.foods[0].name);
    assert_eq!(report.summary.top_foods[0].count, report.foods[0].count);
    assert_eq!(report.foods.len(), 2);
    assert_eq!(report.summary.top_symptoms[0].label, report.symptoms[0].label);
  }

  #[test]
  fn digest_is_stable_and_input_sensitive() {
    let a = history_digest(&history()).unwrap();
    let b = history_digest(&history()).unwrap();
    assert_eq!(a, b);

    let mut changed = history();
    changed[0].foods[0].name = "cheese".into();
    assert_ne!(a, history_digest(&changed).unwrap());
  }

  #[test]
  fn request_lag_override() {
    let engine = Engine::with_defaults();
    let req = AnalysisRequest {
      logs: history(),
      lag_hours: Some(1.0),
    };
    let report = engine.analyze_request(&req).unwrap();
    assert_eq!(report.lag_hours, 1.0);
    assert!(report.correlations.iter().all(|c| c.suspicion_score == 0.0));
  }

  #[test]
  fn request_rejects_negative_lag() {
    let engine = Engine::with_defaults();
    let req = AnalysisRequest {
      logs: history(),
      lag_hours: Some(-3.0),
    };
    let err = engine.analyze_request(&req).unwrap_err();
    assert_eq!(err.field(), Some("lagHours"));
  }

  #[test]
  fn invalid_log_date_is_rejected() {
    let mut logs = history();
    logs[2].date = "2025-13-01".into();
    let err = Engine::with_defaults().analyze_in(&Utc, &logs).unwrap_err();
    assert_eq!(err.field(), Some("logs[2].date"));
  }
}
