//! Symptom kinds a user can log: the built-in set plus their own.

use chrono::{DateTime, TimeZone};

use crate::error::EngineError;
use crate::journal::unique_id;
use crate::types::SymptomType;

const DEFAULT_SYMPTOMS: &[(&str, &str, &str)] = &[
  ("bloating", "🎈", "Bloating"),
  ("gas", "💨", "Gas"),
  ("cramping", "⚡", "Cramping"),
  ("nausea", "🤢", "Nausea"),
  ("diarrhea", "💧", "Diarrhea"),
  ("constipation", "🧱", "Constipation"),
  ("fatigue", "🔋", "Fatigue"),
  ("headache", "🤕", "Headache"),
  ("pain", "😣", "Pain"),
];

/// The built-in symptom kinds, in display order.
pub fn default_symptoms() -> Vec<SymptomType> {
  DEFAULT_SYMPTOMS
    .iter()
    .map(|(id, icon, label)| SymptomType {
      id: (*id).to_string(),
      icon: (*icon).to_string(),
      label: (*label).to_string(),
      is_custom: false,
    })
    .collect()
}

#[derive(Debug, Clone, Default)]
pub struct SymptomCatalog {
  custom: Vec<SymptomType>,
}

impl SymptomCatalog {
  pub fn new(custom: Vec<SymptomType>) -> Self {
    Self { custom }
  }

  /// Defaults first, then custom kinds in creation order.
  pub fn all(&self) -> Vec<SymptomType> {
    let mut all = default_symptoms();
    all.extend(self.custom.iter().cloned());
    all
  }

  pub fn custom(&self) -> &[SymptomType] {
    &self.custom
  }

  pub fn find(&self, id: &str) -> Option<SymptomType> {
    self.all().into_iter().find(|s| s.id == id)
  }

  /// Register a custom kind with id `custom_<millis>`.
  pub fn add_custom<Tz: TimeZone>(
    &mut self,
    icon: &str,
    label: &str,
    at: &DateTime<Tz>,
  ) -> Result<&SymptomType, EngineError> {
    let label = label.trim();
    if label.is_empty() {
      return Err(EngineError::validation("label", "must not be empty"));
    }

    let id = unique_id(format!("custom_{}", at.timestamp_millis()), |id| {
      self.custom.iter().any(|s| s.id == id)
    });

    self.custom.push(SymptomType {
      id,
      icon: icon.to_string(),
      label: label.to_string(),
      is_custom: true,
    });
    Ok(&self.custom[self.custom.len() - 1])
  }
}
