//! Foods eaten often that rarely precede a symptom.

use crate::config::Config;
use crate::types::FoodCorrelation;

/// Safe foods with the default thresholds.
pub fn safe_foods(correlations: &[FoodCorrelation]) -> Vec<FoodCorrelation> {
  select_safe_foods(correlations, &Config::default())
}

/// Keep well-sampled, low-scoring foods, least suspicious first.
pub fn select_safe_foods(correlations: &[FoodCorrelation], config: &Config) -> Vec<FoodCorrelation> {
  let mut safe: Vec<FoodCorrelation> = correlations
    .iter()
    .filter(|c| c.times_eaten >= config.safe_min_times_eaten && c.suspicion_score < config.safe_max_score)
    .cloned()
    .collect();

  safe.sort_by(|a, b| {
    a.suspicion_score
      .partial_cmp(&b.suspicion_score)
      .unwrap_or(std::cmp::Ordering::Equal)
  });
  safe.truncate(config.safe_limit);
  safe
}
