//! Validate DayLogs and flatten them into timestamped occurrences.

use std::collections::HashSet;

use chrono::{Local, TimeZone};

use crate::error::EngineError;
use crate::timestamp;
use crate::types::*;

/// Normalize a food name for matching: lowercase + trim.
pub fn food_key(name: &str) -> String {
  name.trim().to_lowercase()
}

/// Flatten a history using the local timezone for day boundaries.
pub fn flatten(logs: &[DayLog]) -> Result<History, EngineError> {
  flatten_in(&Local, logs)
}

/// Flatten every log's foods and symptoms into absolute instants.
///
/// Rejects logs whose date isn't `YYYY-MM-DD` and histories that repeat a date.
pub fn flatten_in<Tz: TimeZone>(tz: &Tz, logs: &[DayLog]) -> Result<History, EngineError> {
  let mut history = History::default();
  let mut seen_dates: HashSet<&str> = HashSet::with_capacity(logs.len());

  for (i, log) in logs.iter().enumerate() {
    let date = timestamp::parse_date(&log.date).map_err(|e| match e {
      EngineError::Validation { reason, .. } => {
        EngineError::validation(&format!("logs[{}].date", i), &reason)
      }
      other => other,
    })?;
    if !seen_dates.insert(log.date.as_str()) {
      return Err(EngineError::validation(
        &format!("logs[{}].date", i),
        &format!("duplicate date {}", log.date),
      ));
    }

    for food in &log.foods {
      history.foods.push(FoodOccurrence {
        name: food_key(&food.name),
        instant_ms: timestamp::to_instant_in(tz, date, &food.timestamp),
        date: log.date.clone(),
      });
    }
    for symptom in &log.symptoms {
      history.symptoms.push(SymptomOccurrence {
        label: symptom.label.clone(),
        icon: symptom.icon.clone(),
        instant_ms: timestamp::to_instant_in(tz, date, &symptom.timestamp),
        date: log.date.clone(),
      });
    }
  }

  tracing::debug!(
    logs = logs.len(),
    foods = history.foods.len(),
    symptoms = history.symptoms.len(),
    "flattened history"
  );

  Ok(history)
}
