//! Food Diary Trigger Engine: deterministic, rule-based food/symptom correlation.
//!
//! Takes a user's DayLog history, pins every food and symptom to an absolute
//! instant, and scores each food by how often it was eaten within a lag window
//! before a symptom. Also derives safe foods and frequency summaries.
//!
//! No DB, no network; pure computation over the caller's snapshot.

pub mod catalog;
pub mod config;
pub mod correlation;
pub mod engine;
pub mod error;
pub mod journal;
pub mod normalize;
pub mod safe_foods;
pub mod stats;
pub mod timestamp;
pub mod types;

pub use config::{Config, DEFAULT_LAG_HOURS};
pub use correlation::calculate_correlations;
pub use engine::Engine;
pub use error::EngineError;
pub use journal::FoodHistory;
pub use safe_foods::safe_foods;
pub use stats::summary_stats;
pub use types::{AnalysisReport, AnalysisRequest, DayLog, FoodCorrelation, SummaryStats};
