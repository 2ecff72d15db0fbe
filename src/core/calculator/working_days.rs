//! Whole-working-day counting between two dates, Saturday and Sunday
//! excluded. The weekend is hard-coded here; swapping `is_working_day`
//! for an injectable predicate is the seam for other calendars.

use crate::utils::time::{DAYOFWEEK_SAT, DAYOFWEEK_SUN, add_days, day_of_week, is_same_day, set_time};
use chrono::NaiveDateTime;

/// Count the working days strictly between the two dates, exclusive of
/// the end date. Time-of-day is ignored; weekends are skipped.
pub fn whole_working_days_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let start = set_time(start, 0, 0);
    let end = set_time(end, 0, 0);

    if end < start {
        return 0;
    }

    let mut current = next_working_day(start);
    if is_same_day(current, end) || current >= end {
        return 0;
    }

    let mut days = 0;
    loop {
        current = next_working_day(current);
        days += 1;
        if is_same_day(current, end) || current > end {
            break;
        }
    }

    days
}

/// The first working day strictly after the given day.
pub fn next_working_day(date: NaiveDateTime) -> NaiveDateTime {
    let mut date = add_days(date, 1);
    while !is_working_day(date) {
        date = add_days(date, 1);
    }
    date
}

pub fn is_working_day(date: NaiveDateTime) -> bool {
    let dow = day_of_week(date);
    !(dow == DAYOFWEEK_SAT || dow == DAYOFWEEK_SUN)
}
