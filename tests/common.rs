#![allow(dead_code)]
use chrono::NaiveDateTime;
use workhours::WorkingHoursCalculator;

/// Parse a "YYYY-MM-DDTHH:MM" literal used throughout the test tables.
pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").expect("valid test timestamp")
}

/// The reference window used by most scenarios: 09:00-17:30, i.e. 8.5
/// working hours per day.
pub fn default_calc() -> WorkingHoursCalculator {
    WorkingHoursCalculator::new(9, 0, 17, 30).expect("valid reference window")
}
