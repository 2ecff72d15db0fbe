//! Clamping timestamps into the working window. Only the time-of-day
//! moves; the calendar date is never changed.

use crate::config::WorkingWindow;
use crate::utils::time::{hour, minute, set_time};
use chrono::NaiveDateTime;

/// Snap a timestamp into the window: earlier than the window start goes
/// to the start, at or later than the window end goes to the end.
pub fn clamp_to_window(ts: NaiveDateTime, window: &WorkingWindow) -> NaiveDateTime {
    let ts = clamp_lower(ts, window.start_hour, window.start_minute);
    clamp_upper(ts, window.end_hour, window.end_minute)
}

fn clamp_lower(ts: NaiveDateTime, hour_limit: u32, minute_limit: u32) -> NaiveDateTime {
    let h = hour(ts);
    let m = minute(ts);

    if h > hour_limit || (h == hour_limit && m >= minute_limit) {
        return ts;
    }

    set_time(ts, hour_limit, minute_limit)
}

fn clamp_upper(ts: NaiveDateTime, hour_limit: u32, minute_limit: u32) -> NaiveDateTime {
    let h = hour(ts);
    let m = minute(ts);

    if h < hour_limit || (h == hour_limit && m < minute_limit) {
        return ts;
    }

    set_time(ts, hour_limit, minute_limit)
}
