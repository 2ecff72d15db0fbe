use workhours::utils::time::{
    add_days, day_of_week, hour, hours_between, is_same_day, minute, set_time,
};

mod common;
use common::dt;

#[test]
fn test_add_days_forward_and_backward() {
    let ts = dt("2022-01-14T17:30");
    assert_eq!(add_days(ts, 3), dt("2022-01-17T17:30"));
    assert_eq!(add_days(ts, -14), dt("2021-12-31T17:30"));
    assert_eq!(add_days(ts, 0), ts);
}

#[test]
fn test_add_days_crosses_month_boundary() {
    assert_eq!(add_days(dt("2022-01-31T08:00"), 1), dt("2022-02-01T08:00"));
}

#[test]
fn test_day_of_week_is_iso() {
    assert_eq!(day_of_week(dt("2022-01-10T00:00")), 1); // Monday
    assert_eq!(day_of_week(dt("2022-01-14T12:00")), 5); // Friday
    assert_eq!(day_of_week(dt("2022-01-15T12:00")), 6); // Saturday
    assert_eq!(day_of_week(dt("2022-01-16T23:59")), 7); // Sunday
}

#[test]
fn test_wall_clock_components() {
    let ts = dt("2022-01-20T16:05");
    assert_eq!(hour(ts), 16);
    assert_eq!(minute(ts), 5);
}

#[test]
fn test_set_time_keeps_date_and_zeroes_seconds() {
    let ts = dt("2022-01-20T16:05");
    let capped = set_time(ts, 9, 0);
    assert_eq!(capped, dt("2022-01-20T09:00"));
    // Idempotent on repeated application.
    assert_eq!(set_time(capped, 9, 0), capped);
}

#[test]
fn test_is_same_day() {
    assert!(is_same_day(dt("2022-01-20T00:00"), dt("2022-01-20T23:59")));
    assert!(!is_same_day(dt("2022-01-20T23:59"), dt("2022-01-21T00:00")));
}

#[test]
fn test_hours_between_is_signed() {
    let a = dt("2022-01-20T09:00");
    let b = dt("2022-01-20T10:30");
    assert!((hours_between(a, b) - 1.5).abs() < 1e-9);
    assert!((hours_between(b, a) + 1.5).abs() < 1e-9);
}
