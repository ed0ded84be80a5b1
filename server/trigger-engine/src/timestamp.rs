//! Turn diary dates and "2:30 PM" clock strings into comparable instants.
//!
//! Instants are epoch milliseconds and only ever ordered or subtracted,
//! never displayed.

use chrono::{Duration, Local, NaiveDate, NaiveTime, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::EngineError;

/// Hours assumed for a clock string that can't be parsed.
pub const FALLBACK_HOURS: f64 = 12.0;

const MS_PER_HOUR: f64 = 3_600_000.0;

static CLOCK_TIME: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"(?i)([0-9]+):([0-9]+)\s*(AM|PM)").expect("Valid clock time regex")
});

/// Parse a 12-hour clock string into fractional hours since midnight.
///
/// `12 AM` is 0, `12 PM` is 12, other PM hours get +12 and minutes add `m/60`.
/// Anything that doesn't look like `<h>:<mm> AM|PM` falls back to noon.
pub fn parse_time_to_hours(time: &str) -> f64 {
  let Some(caps) = CLOCK_TIME.captures(time) else {
    return FALLBACK_HOURS;
  };
  // Digit runs always parse as f64; absurd hours stay large instead of overflowing.
  let (Ok(mut hours), Ok(minutes)) = (caps[1].parse::<f64>(), caps[2].parse::<f64>()) else {
    return FALLBACK_HOURS;
  };
  let is_pm = caps[3].eq_ignore_ascii_case("PM");

  if is_pm && hours != 12.0 {
    hours += 12.0;
  }
  if !is_pm && hours == 12.0 {
    hours = 0.0;
  }

  hours + minutes / 60.0
}

/// Epoch milliseconds of local midnight on `date`, plus the parsed clock time.
pub fn to_instant(date: NaiveDate, time: &str) -> i64 {
  to_instant_in(&Local, date, time)
}

/// Same as [`to_instant`] with an explicit timezone.
pub fn to_instant_in<Tz: TimeZone>(tz: &Tz, date: NaiveDate, time: &str) -> i64 {
  let offset_ms = (parse_time_to_hours(time) * MS_PER_HOUR).round() as i64;
  midnight_ms_in(tz, date).saturating_add(offset_ms)
}

/// First valid local instant of `date`. A midnight swallowed by a DST jump
/// resolves to the end of the gap.
pub fn midnight_ms_in<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> i64 {
  let midnight = date.and_time(NaiveTime::MIN);
  (0..=2)
    .find_map(|h| tz.from_local_datetime(&(midnight + Duration::hours(h))).earliest())
    .map(|dt| dt.timestamp_millis())
    .unwrap_or_else(|| midnight.and_utc().timestamp_millis())
}

/// Parse a `YYYY-MM-DD` diary key.
pub fn parse_date(s: &str) -> Result<NaiveDate, EngineError> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| EngineError::validation("date", &format!("expected YYYY-MM-DD: {}", e)))
}

/// Format a date as a `YYYY-MM-DD` diary key.
pub fn format_date(date: NaiveDate) -> String {
  date.format("%Y-%m-%d").to_string()
}

/// Render a wall-clock time the way new entries are stamped, e.g. `"02:30 PM"`.
pub fn format_clock(time: NaiveTime) -> String {
  time.format("%I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Utc;

  fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
  }

  #[test]
  fn twelve_hour_conversion() {
    assert!(approx(parse_time_to_hours("12:00 AM"), 0.0));
    assert!(approx(parse_time_to_hours("1:15 AM"), 1.25));
    assert!(approx(parse_time_to_hours("11:59 AM"), 11.0 + 59.0 / 60.0));
    assert!(approx(parse_time_to_hours("12:30 PM"), 12.5));
    assert!(approx(parse_time_to_hours("2:30 PM"), 14.5));
    assert!(approx(parse_time_to_hours("11:00 PM"), 23.0));
  }

  #[test]
  fn marker_is_case_insensitive_and_spacing_optional() {
    assert!(approx(parse_time_to_hours("7:45pm"), 19.75));
    assert!(approx(parse_time_to_hours("07:05 am"), 7.0 + 5.0 / 60.0));
    assert!(approx(parse_time_to_hours("logged at 9:00 Pm today"), 21.0));
  }

  #[test]
  fn unparseable_falls_back_to_noon() {
    assert!(approx(parse_time_to_hours(""), 12.0));
    assert!(approx(parse_time_to_hours("14:30"), 12.0));
    assert!(approx(parse_time_to_hours("half past two"), 12.0));
  }

  #[test]
  fn huge_hours_are_arithmetic_not_overflow() {
    assert!(approx(parse_time_to_hours("4294967295:00 PM"), 4_294_967_307.0));
    assert!(approx(parse_time_to_hours("99999999999:30 AM"), 99_999_999_999.5));
    assert!(approx(parse_time_to_hours("13:00 PM"), 25.0));

    let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let far = to_instant_in(&Utc, day, &format!("{}:00 PM", "9".repeat(40)));
    assert_eq!(far, i64::MAX);
  }

  #[test]
  fn instant_crosses_midnight() {
    let day1 = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let day2 = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
    let late = to_instant_in(&Utc, day1, "11:00 PM");
    let early = to_instant_in(&Utc, day2, "1:00 AM");
    assert_eq!(early - late, 2 * 3_600_000);
  }

  #[test]
  fn instant_minutes_are_exact() {
    let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let a = to_instant_in(&Utc, day, "8:00 AM");
    let b = to_instant_in(&Utc, day, "8:01 AM");
    assert_eq!(b - a, 60_000);
  }

  #[test]
  fn date_round_trip_and_rejects_garbage() {
    let d = parse_date("2025-02-03").unwrap();
    assert_eq!(format_date(d), "2025-02-03");
    let err = parse_date("02/03/2025").unwrap_err();
    assert_eq!(err.field(), Some("date"));
  }

  #[test]
  fn clock_format_is_zero_padded_twelve_hour() {
    assert_eq!(format_clock(NaiveTime::from_hms_opt(14, 30, 0).unwrap()), "02:30 PM");
    assert_eq!(format_clock(NaiveTime::from_hms_opt(0, 5, 0).unwrap()), "12:05 AM");
  }
}
