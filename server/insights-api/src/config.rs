//! Service configuration from environment variables.

use std::net::IpAddr;

use thiserror::Error;
use trigger_engine::Config;

#[derive(Debug, Error)]
#[error("config: {var}: {reason}")]
pub struct ConfigError {
  pub var: &'static str,
  pub reason: String,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
  pub bind: IpAddr,
  pub port: u16,
  /// Largest history (in DayLogs) one request may carry.
  pub max_logs: usize,
  pub engine: Config,
}

impl Default for ServiceConfig {
  fn default() -> Self {
    Self {
      bind: IpAddr::from([127, 0, 0, 1]),
      port: 5005,
      max_logs: 3660,
      engine: Config::default(),
    }
  }
}

fn parse_var<T: std::str::FromStr>(
  lookup: &impl Fn(&str) -> Option<String>,
  var: &'static str,
  default: T,
) -> Result<T, ConfigError>
where
  T::Err: std::fmt::Display,
{
  match lookup(var) {
    Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError {
      var,
      reason: format!("invalid value {:?}: {}", raw, e),
    }),
    None => Ok(default),
  }
}

impl ServiceConfig {
  /// Read PORT, INSIGHTS_BIND, INSIGHTS_LAG_HOURS and INSIGHTS_MAX_LOGS.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|k| std::env::var(k).ok())
  }

  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
    let defaults = Self::default();
    let lag_hours: f64 = parse_var(&lookup, "INSIGHTS_LAG_HOURS", defaults.engine.lag_hours)?;
    if !lag_hours.is_finite() || lag_hours < 0.0 {
      return Err(ConfigError {
        var: "INSIGHTS_LAG_HOURS",
        reason: "must be a non-negative number".into(),
      });
    }

    Ok(Self {
      bind: parse_var(&lookup, "INSIGHTS_BIND", defaults.bind)?,
      port: parse_var(&lookup, "PORT", defaults.port)?,
      max_logs: parse_var(&lookup, "INSIGHTS_MAX_LOGS", defaults.max_logs)?,
      engine: Config {
        lag_hours,
        ..defaults.engine
      },
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
    move |k: &str| map.get(k).cloned()
  }

  #[test]
  fn defaults_when_unset() {
    let cfg = ServiceConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, 5005);
    assert_eq!(cfg.bind.to_string(), "127.0.0.1");
    assert_eq!(cfg.engine.lag_hours, 24.0);
  }

  #[test]
  fn overrides_from_env() {
    let cfg = ServiceConfig::from_lookup(lookup(&[
      ("PORT", "8080"),
      ("INSIGHTS_BIND", "0.0.0.0"),
      ("INSIGHTS_LAG_HOURS", "6.5"),
      ("INSIGHTS_MAX_LOGS", "30"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.bind.to_string(), "0.0.0.0");
    assert_eq!(cfg.engine.lag_hours, 6.5);
    assert_eq!(cfg.max_logs, 30);
  }

  #[test]
  fn bad_values_name_the_variable() {
    let err = ServiceConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err.var, "PORT");
    let err = ServiceConfig::from_lookup(lookup(&[("INSIGHTS_LAG_HOURS", "-1")])).unwrap_err();
    assert_eq!(err.var, "INSIGHTS_LAG_HOURS");
  }
}
