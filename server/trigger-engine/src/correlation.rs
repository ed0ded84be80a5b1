//! Correlate foods with the symptoms that follow them.
//!
//! For every symptom occurrence, each food eaten within the lag window before
//! it counts once toward that food's `times_before_symptom`. The per-label
//! breakdown in `related_symptoms` counts every (food occurrence, symptom
//! occurrence) pair instead, so a food eaten twice before one symptom adds 2
//! there but 1 to the aggregate.

use std::collections::HashMap;

use crate::config::Config;
use crate::error::EngineError;
use crate::normalize;
use crate::types::{DayLog, FoodCorrelation, History, RelatedSymptom};

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Per-food accumulator, kept in first-seen order.
struct FoodTally {
  name: String,
  times_eaten: u32,
  times_before_symptom: u32,
  related: Vec<RelatedSymptom>,
}

fn bump(related: &mut Vec<RelatedSymptom>, label: &str) {
  match related.iter_mut().find(|r| r.symptom == label) {
    Some(r) => r.count += 1,
    None => related.push(RelatedSymptom {
      symptom: label.to_string(),
      count: 1,
    }),
  }
}

/// Rank foods by suspicion for a history, looking back `lag_hours` from each symptom.
pub fn calculate_correlations(
  logs: &[DayLog],
  lag_hours: f64,
) -> Result<Vec<FoodCorrelation>, EngineError> {
  correlate(logs, &Config::with_lag_hours(lag_hours))
}

/// Flatten `logs` (local timezone) and score them with `config`.
pub fn correlate(logs: &[DayLog], config: &Config) -> Result<Vec<FoodCorrelation>, EngineError> {
  let history = normalize::flatten(logs)?;
  Ok(score_history(&history, config))
}

/// Score an already flattened history.
///
/// Returns foods eaten at least `min_times_eaten` times, sorted by score
/// descending; ties keep first-seen order.
pub fn score_history(history: &History, config: &Config) -> Vec<FoodCorrelation> {
  let mut tallies: Vec<FoodTally> = Vec::new();
  let mut index: HashMap<&str, usize> = HashMap::new();

  // Tally index for every food occurrence, parallel to history.foods.
  let food_idx: Vec<usize> = history
    .foods
    .iter()
    .map(|food| {
      let idx = *index.entry(food.name.as_str()).or_insert_with(|| {
        tallies.push(FoodTally {
          name: food.name.clone(),
          times_eaten: 0,
          times_before_symptom: 0,
          related: Vec::new(),
        });
        tallies.len() - 1
      });
      tallies[idx].times_eaten += 1;
      idx
    })
    .collect();

  let lag_ms = config.lag_hours * MS_PER_HOUR;
  let mut seen = vec![false; tallies.len()];
  let mut touched: Vec<usize> = Vec::new();

  for symptom in &history.symptoms {
    for (food, &idx) in history.foods.iter().zip(&food_idx) {
      let diff = symptom.instant_ms as f64 - food.instant_ms as f64;
      if diff > 0.0 && diff <= lag_ms {
        if !seen[idx] {
          seen[idx] = true;
          touched.push(idx);
        }
        bump(&mut tallies[idx].related, &symptom.label);
      }
    }

    // Once per food per symptom occurrence.
    for idx in touched.drain(..) {
      tallies[idx].times_before_symptom += 1;
      seen[idx] = false;
    }
  }

  let total_symptoms = history.symptoms.len();
  let mut correlations: Vec<FoodCorrelation> = tallies
    .into_iter()
    .filter(|t| t.times_eaten >= config.min_times_eaten)
    .map(|t| {
      let suspicion_score = if t.times_eaten > 0 && total_symptoms > 0 {
        t.times_before_symptom as f64 / t.times_eaten as f64 * 100.0
      } else {
        0.0
      };
      let mut related_symptoms = t.related;
      related_symptoms.sort_by(|a, b| b.count.cmp(&a.count));

      FoodCorrelation {
        food: t.name,
        times_eaten: t.times_eaten,
        times_before_symptom: t.times_before_symptom,
        suspicion_score,
        related_symptoms,
      }
    })
    .collect();

  correlations.sort_by(|a, b| {
    b.suspicion_score
      .partial_cmp(&a.suspicion_score)
      .unwrap_or(std::cmp::Ordering::Equal)
  });

  tracing::debug!(
    lag_hours = config.lag_hours,
    kept = correlations.len(),
    "scored correlations"
  );

  correlations
}
