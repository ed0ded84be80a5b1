//! In-memory edits to a DayLog and the food-name autocomplete list.
//!
//! Persisting the edited log is the caller's job.

use chrono::{DateTime, NaiveDate, TimeZone};

use crate::error::EngineError;
use crate::normalize::food_key;
use crate::timestamp;
use crate::types::*;

fn non_blank(s: Option<&str>) -> Option<String> {
  s.filter(|v| !v.trim().is_empty()).map(str::to_string)
}

/// `base`, or `base_2`, `base_3`, ... if already taken.
pub(crate) fn unique_id(base: String, taken: impl Fn(&str) -> bool) -> String {
  if !taken(&base) {
    return base;
  }
  let mut n = 2u32;
  loop {
    let candidate = format!("{}_{}", base, n);
    if !taken(&candidate) {
      return candidate;
    }
    n += 1;
  }
}

impl DayLog {
  /// Empty log for a date.
  pub fn new(date: NaiveDate) -> Self {
    Self {
      date: timestamp::format_date(date),
      symptoms: Vec::new(),
      foods: Vec::new(),
      notes: None,
    }
  }

  /// Append a food stamped with `at`'s wall-clock time.
  pub fn add_food<Tz: TimeZone>(
    &mut self,
    name: &str,
    meal_type: Option<MealType>,
    notes: Option<&str>,
    at: &DateTime<Tz>,
  ) -> &FoodEntry {
    let id = unique_id(format!("food_{}", at.timestamp_millis()), |id| {
      self.foods.iter().any(|f| f.id == id)
    });
    self.foods.push(FoodEntry {
      id,
      name: name.to_string(),
      timestamp: timestamp::format_clock(at.time()),
      meal_type,
      notes: non_blank(notes),
    });
    &self.foods[self.foods.len() - 1]
  }

  /// Rename a food and replace its metadata; `None` clears a field.
  /// Returns false if no food has `id`.
  pub fn update_food(
    &mut self,
    id: &str,
    name: &str,
    meal_type: Option<MealType>,
    notes: Option<&str>,
  ) -> bool {
    match self.foods.iter_mut().find(|f| f.id == id) {
      Some(food) => {
        food.name = name.to_string();
        food.meal_type = meal_type;
        food.notes = non_blank(notes);
        true
      }
      None => false,
    }
  }

  pub fn remove_food(&mut self, id: &str) -> bool {
    let before = self.foods.len();
    self.foods.retain(|f| f.id != id);
    self.foods.len() != before
  }

  /// Append a symptom of `kind`. Severity, when given, must be 1-10.
  pub fn add_symptom<Tz: TimeZone>(
    &mut self,
    kind: &SymptomType,
    severity: Option<u8>,
    at: &DateTime<Tz>,
  ) -> Result<&SymptomEntry, EngineError> {
    if let Some(s) = severity {
      if !(1..=10).contains(&s) {
        return Err(EngineError::validation("severity", "must be between 1 and 10"));
      }
    }

    let id = unique_id(format!("{}_{}", kind.id, at.timestamp_millis()), |id| {
      self.symptoms.iter().any(|s| s.id == id)
    });
    self.symptoms.push(SymptomEntry {
      id,
      symptom_id: Some(kind.id.clone()),
      label: kind.label.clone(),
      icon: kind.icon.clone(),
      severity,
      timestamp: timestamp::format_clock(at.time()),
    });
    Ok(&self.symptoms[self.symptoms.len() - 1])
  }

  pub fn remove_symptom(&mut self, id: &str) -> bool {
    let before = self.symptoms.len();
    self.symptoms.retain(|s| s.id != id);
    self.symptoms.len() != before
  }
}

/// Distinct food names the user has typed, for autocomplete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodHistory {
  names: Vec<String>,
}

impl FoodHistory {
  pub fn new(names: Vec<String>) -> Self {
    Self { names }
  }

  /// Rebuild from every food in a history, first spelling wins.
  pub fn from_logs(logs: &[DayLog]) -> Self {
    let mut history = Self::default();
    for food in logs.iter().flat_map(|l| &l.foods) {
      history.remember(&food.name);
    }
    history
  }

  /// Store the trimmed name unless a case-insensitive match exists.
  /// Returns true if it was added.
  pub fn remember(&mut self, name: &str) -> bool {
    let key = food_key(name);
    if key.is_empty() || self.names.iter().any(|n| n.to_lowercase() == key) {
      return false;
    }
    self.names.push(name.trim().to_string());
    true
  }

  pub fn names(&self) -> &[String] {
    &self.names
  }
}
