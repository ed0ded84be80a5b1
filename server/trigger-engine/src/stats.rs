//! Frequency statistics over raw DayLogs: totals, symptom rate, top lists,
//! and per-symptom / per-food breakdowns with the dates they occurred.

use std::collections::HashMap;

use crate::config::Config;
use crate::normalize::food_key;
use crate::types::*;

/// Summary with the default top-list size.
pub fn summary_stats(logs: &[DayLog]) -> SummaryStats {
  summarize(logs, Config::default().top_limit)
}

/// Totals plus the `top_limit` most frequent symptoms and foods.
pub fn summarize(logs: &[DayLog], top_limit: usize) -> SummaryStats {
  summary_from(
    logs,
    &symptom_summaries(logs),
    &food_summaries(logs),
    top_limit,
  )
}

/// Like [`summarize`], with the top lists taken from breakdowns already built
/// over the same `logs`.
pub fn summary_from(
  logs: &[DayLog],
  symptoms: &[SymptomSummary],
  foods: &[FoodSummary],
  top_limit: usize,
) -> SummaryStats {
  let total_days = logs.len() as u32;
  let total_symptoms: usize = logs.iter().map(|l| l.symptoms.len()).sum();
  let total_foods: usize = logs.iter().map(|l| l.foods.len()).sum();
  let days_with_symptoms = logs.iter().filter(|l| !l.symptoms.is_empty()).count() as u32;

  let symptom_rate = if total_days > 0 {
    (days_with_symptoms as f64 / total_days as f64 * 100.0).round() as u32
  } else {
    0
  };

  let top_symptoms = symptoms
    .iter()
    .take(top_limit)
    .map(|s| SymptomCount {
      label: s.label.clone(),
      icon: s.icon.clone(),
      count: s.count,
    })
    .collect();

  let top_foods = foods
    .iter()
    .take(top_limit)
    .map(|f| FoodCount {
      name: f.name.clone(),
      count: f.count,
    })
    .collect();

  SummaryStats {
    total_days,
    total_symptoms: total_symptoms as u32,
    total_foods: total_foods as u32,
    days_with_symptoms,
    symptom_rate,
    top_symptoms,
    top_foods,
  }
}

/// Every symptom label, most frequent first. The icon is the first one logged
/// for that label; ties keep first-seen order.
pub fn symptom_summaries(logs: &[DayLog]) -> Vec<SymptomSummary> {
  let mut out: Vec<SymptomSummary> = Vec::new();
  let mut index: HashMap<&str, usize> = HashMap::new();

  for log in logs {
    for symptom in &log.symptoms {
      let idx = *index.entry(symptom.label.as_str()).or_insert_with(|| {
        out.push(SymptomSummary {
          label: symptom.label.clone(),
          icon: symptom.icon.clone(),
          count: 0,
          dates: Vec::new(),
        });
        out.len() - 1
      });
      let entry = &mut out[idx];
      entry.count += 1;
      if !entry.dates.contains(&log.date) {
        entry.dates.push(log.date.clone());
      }
    }
  }

  out.sort_by(|a, b| b.count.cmp(&a.count));
  out
}

/// Every normalized food name, most frequent first; ties keep first-seen order.
pub fn food_summaries(logs: &[DayLog]) -> Vec<FoodSummary> {
  let mut out: Vec<FoodSummary> = Vec::new();
  let mut index: HashMap<String, usize> = HashMap::new();

  for log in logs {
    for food in &log.foods {
      let key = food_key(&food.name);
      let idx = match index.get(&key) {
        Some(&i) => i,
        None => {
          out.push(FoodSummary {
            name: key.clone(),
            count: 0,
            dates: Vec::new(),
          });
          index.insert(key, out.len() - 1);
          out.len() - 1
        }
      };
      let entry = &mut out[idx];
      entry.count += 1;
      if !entry.dates.contains(&log.date) {
        entry.dates.push(log.date.clone());
      }
    }
  }

  out.sort_by(|a, b| b.count.cmp(&a.count));
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  fn day(date: &str, foods: &[&str], symptoms: &[(&str, &str)]) -> DayLog {
    DayLog {
      date: date.into(),
      foods: foods
        .iter()
        .map(|name| FoodEntry {
          id: format!("food_{}", name),
          name: (*name).into(),
          timestamp: "12:00 PM".into(),
          meal_type: None,
          notes: None,
        })
        .collect(),
      symptoms: symptoms
        .iter()
        .map(|(label, icon)| SymptomEntry {
          id: format!("{}_1", label),
          symptom_id: None,
          label: (*label).into(),
          icon: (*icon).into(),
          severity: None,
          timestamp: "3:00 PM".into(),
        })
        .collect(),
      notes: None,
    }
  }

  #[test]
  fn symptom_rate_ten_days_three_symptomatic() {
    let logs: Vec<DayLog> = (1..=10)
      .map(|d| {
        let date = format!("2025-01-{:02}", d);
        if d <= 3 {
          day(&date, &["rice"], &[("Gas", "g")])
        } else {
          day(&date, &["rice"], &[])
        }
      })
      .collect();
    let stats = summary_stats(&logs);
    assert_eq!(stats.total_days, 10);
    assert_eq!(stats.days_with_symptoms, 3);
    assert_eq!(stats.symptom_rate, 30);
    assert_eq!(stats.total_foods, 10);
    assert_eq!(stats.total_symptoms, 3);
  }

  #[test]
  fn symptom_rate_rounds() {
    let logs = vec![
      day("2025-01-01", &[], &[("Gas", "g")]),
      day("2025-01-02", &[], &[("Gas", "g")]),
      day("2025-01-03", &[], &[]),
    ];
    assert_eq!(summary_stats(&logs).symptom_rate, 67);
  }

  #[test]
  fn empty_logs_are_zeroed() {
    let stats = summary_stats(&[]);
    assert_eq!(stats.total_days, 0);
    assert_eq!(stats.symptom_rate, 0);
    assert!(stats.top_symptoms.is_empty());
    assert!(stats.top_foods.is_empty());
  }

  #[test]
  fn top_lists_capped_and_ranked() {
    let logs = vec![
      day(
        "2025-01-01",
        &["A", "b", "c", "d", "e", "f", "a "],
        &[("Nausea", "n1"), ("Pain", "p")],
      ),
      day("2025-01-02", &["b", "a"], &[("Nausea", "n2")]),
    ];
    let stats = summary_stats(&logs);
    assert_eq!(stats.top_foods.len(), 5);
    assert_eq!(stats.top_foods[0], FoodCount { name: "a".into(), count: 3 });
    assert_eq!(stats.top_foods[1], FoodCount { name: "b".into(), count: 2 });

    assert_eq!(stats.top_symptoms[0].label, "Nausea");
    assert_eq!(stats.top_symptoms[0].icon, "n1");
    assert_eq!(stats.top_symptoms[0].count, 2);
  }

  #[test]
  fn labels_are_case_sensitive() {
    let logs = vec![day("2025-01-01", &[], &[("Gas", "g"), ("gas", "g")])];
    assert_eq!(symptom_summaries(&logs).len(), 2);
  }

  #[test]
  fn summaries_collect_distinct_dates() {
    let logs = vec![
      day("2025-01-01", &["milk", "milk"], &[("Bloating", "b"), ("Bloating", "b")]),
      day("2025-01-03", &["milk"], &[("Bloating", "b")]),
    ];
    let foods = food_summaries(&logs);
    assert_eq!(foods[0].count, 3);
    assert_eq!(foods[0].dates, vec!["2025-01-01", "2025-01-03"]);

    let symptoms = symptom_summaries(&logs);
    assert_eq!(symptoms[0].count, 3);
    assert_eq!(symptoms[0].dates, vec!["2025-01-01", "2025-01-03"]);
  }
}
