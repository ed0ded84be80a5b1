//! Engine configuration with sane defaults.

/// Default look-back window between eating a food and a symptom.
pub const DEFAULT_LAG_HOURS: f64 = 24.0;

/// Tunable thresholds for correlation and the derived views.
#[derive(Debug, Clone)]
pub struct Config {
  /// Hours before a symptom in which a food counts as "preceding" it.
  pub lag_hours: f64,
  /// Foods eaten fewer times than this are dropped from correlations.
  pub min_times_eaten: u32,
  /// Safe foods must have been eaten at least this often.
  pub safe_min_times_eaten: u32,
  /// Safe foods must score strictly below this.
  pub safe_max_score: f64,
  /// Max safe foods returned.
  pub safe_limit: usize,
  /// Max entries in the summary's top-symptom / top-food lists.
  pub top_limit: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      lag_hours: DEFAULT_LAG_HOURS,
      min_times_eaten: 2,
      safe_min_times_eaten: 3,
      safe_max_score: 20.0,
      safe_limit: 5,
      top_limit: 5,
    }
  }
}

impl Config {
  pub fn with_lag_hours(lag_hours: f64) -> Self {
    Self {
      lag_hours,
      ..Self::default()
    }
  }
}
