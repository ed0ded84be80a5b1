//! Core types for the trigger engine (JSON contracts + internal models).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Journal records (JSON contract: the storage collaborator's document shape)
// ---------------------------------------------------------------------------

/// One calendar day of a user's diary. Unknown fields are silently ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayLog {
  /// `YYYY-MM-DD`, unique within a history.
  pub date: String,
  /// Logging order, not time order.
  pub symptoms: Vec<SymptomEntry>,
  pub foods: Vec<FoodEntry>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodEntry {
  pub id: String,
  pub name: String,
  /// 12-hour clock, e.g. `"2:30 PM"`.
  pub timestamp: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub meal_type: Option<MealType>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomEntry {
  pub id: String,
  /// Catalog type this entry was logged from.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub symptom_id: Option<String>,
  pub label: String,
  pub icon: String,
  /// 1-10 scale.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub severity: Option<u8>,
  pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
  Breakfast,
  Lunch,
  Dinner,
  Snack,
}

/// A symptom kind the user can log (built-in or custom).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomType {
  pub id: String,
  pub icon: String,
  pub label: String,
  #[serde(default, skip_serializing_if = "std::ops::Not::not")]
  pub is_custom: bool,
}

// ---------------------------------------------------------------------------
// Internal flattened occurrences (live for one engine call)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct FoodOccurrence {
  /// Lowercased, trimmed.
  pub name: String,
  pub instant_ms: i64,
  pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SymptomOccurrence {
  pub label: String,
  pub icon: String,
  pub instant_ms: i64,
  pub date: String,
}

/// Every food and symptom in a history, each pinned to an absolute instant.
#[derive(Debug, Clone, Default)]
pub struct History {
  pub foods: Vec<FoodOccurrence>,
  pub symptoms: Vec<SymptomOccurrence>,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract: what we emit)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedSymptom {
  pub symptom: String,
  pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodCorrelation {
  pub food: String,
  pub times_eaten: u32,
  /// Symptom occurrences with this food in the window before them.
  pub times_before_symptom: u32,
  /// Higher = more likely trigger. Can exceed 100.
  pub suspicion_score: f64,
  pub related_symptoms: Vec<RelatedSymptom>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomCount {
  pub label: String,
  pub icon: String,
  pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodCount {
  pub name: String,
  pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
  pub total_days: u32,
  pub total_symptoms: u32,
  pub total_foods: u32,
  pub days_with_symptoms: u32,
  /// Percent of logged days with any symptom, rounded.
  pub symptom_rate: u32,
  pub top_symptoms: Vec<SymptomCount>,
  pub top_foods: Vec<FoodCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomSummary {
  pub label: String,
  pub icon: String,
  pub count: u32,
  pub dates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodSummary {
  pub name: String,
  pub count: u32,
  pub dates: Vec<String>,
}

/// Everything the engine derives from one history snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
  pub history_digest: String,
  pub lag_hours: f64,
  pub correlations: Vec<FoodCorrelation>,
  pub safe_foods: Vec<FoodCorrelation>,
  pub summary: SummaryStats,
  pub symptoms: Vec<SymptomSummary>,
  pub foods: Vec<FoodSummary>,
}

// ---------------------------------------------------------------------------
// Stream wrappers (binary and HTTP surfaces)
// ---------------------------------------------------------------------------

/// One analysis call: the history plus an optional lag override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
  pub logs: Vec<DayLog>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub lag_hours: Option<f64>,
}

/// Structured error output for invalid input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}

impl From<&crate::error::EngineError> for ErrorOutput {
  fn from(e: &crate::error::EngineError) -> Self {
    match e {
      crate::error::EngineError::Validation { field, reason } => {
        ErrorOutput::new(reason.clone()).with_field(field.clone())
      }
      other => ErrorOutput::new(other.to_string()),
    }
  }
}
