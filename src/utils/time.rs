//! Time utilities: day arithmetic, wall-clock extraction, same-day checks.
//! All functions are pure and return new values; the input timestamp is
//! never mutated.

use chrono::{Datelike, Duration, NaiveDateTime, Timelike};

pub const DAYOFWEEK_SAT: u32 = 6;
pub const DAYOFWEEK_SUN: u32 = 7;

/// Shift a timestamp by `days` whole days (negative shifts backwards).
pub fn add_days(ts: NaiveDateTime, days: i64) -> NaiveDateTime {
    if days == 0 {
        return ts;
    }
    ts + Duration::days(days)
}

/// ISO-8601 weekday number: 1 = Monday .. 7 = Sunday.
pub fn day_of_week(ts: NaiveDateTime) -> u32 {
    ts.weekday().number_from_monday()
}

pub fn hour(ts: NaiveDateTime) -> u32 {
    ts.hour()
}

pub fn minute(ts: NaiveDateTime) -> u32 {
    ts.minute()
}

/// Replace the time-of-day, keeping the calendar date. Seconds are zeroed
/// so repeated calls with identical inputs are idempotent.
///
/// Panics when `hour`/`minute` are out of range; callers only pass
/// components already validated by the working window.
pub fn set_time(ts: NaiveDateTime, hour: u32, minute: u32) -> NaiveDateTime {
    ts.date()
        .and_hms_opt(hour, minute, 0)
        .expect("hour and minute are validated wall-clock components")
}

/// True when both timestamps fall on the same calendar date, ignoring
/// time-of-day.
pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// Signed difference `end - start` expressed in hours, second precision.
pub fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    let duration = end - start;
    duration.num_seconds() as f64 / 3600.0
}
