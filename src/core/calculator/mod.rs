//! Working-hours calculation engine.
//!
//! A span within one calendar day is measured by direct subtraction,
//! deliberately ignoring the window and weekend status. A multi-day span
//! is clamped into the window on both ends, the working days strictly
//! between the two dates are counted at the full daily rate, and the two
//! boundary days contribute only their partial hours. Counting only the
//! days strictly between avoids double-counting the partial boundary
//! hours and makes a weekend-only gap come out at zero.

pub mod bounds;
pub mod working_days;

use crate::config::WorkingWindow;
use crate::errors::{WorkHoursError, WorkHoursResult};
use crate::utils::time::{hours_between, is_same_day, set_time};
use chrono::NaiveDateTime;

use bounds::clamp_to_window;
use working_days::whole_working_days_between;

/// Stateless calculation engine holding an immutable working window.
/// Instances are cheap to create and safe to share across threads.
#[derive(Debug, Clone, Copy)]
pub struct WorkingHoursCalculator {
    window: WorkingWindow,
}

impl WorkingHoursCalculator {
    /// Build a calculator for the given daily window, failing fast when
    /// the window is not a strictly positive slice of a day.
    pub fn new(
        start_hour: u32,
        start_minute: u32,
        end_hour: u32,
        end_minute: u32,
    ) -> WorkHoursResult<Self> {
        Self::from_window(WorkingWindow::new(
            start_hour,
            start_minute,
            end_hour,
            end_minute,
        ))
    }

    pub fn from_window(window: WorkingWindow) -> WorkHoursResult<Self> {
        window.validate()?;
        Ok(Self { window })
    }

    pub fn window(&self) -> &WorkingWindow {
        &self.window
    }

    /// Working hours elapsed between `start` and `end`.
    ///
    /// Fails with `InvalidSpan` when `start` is after `end`. A same-day
    /// span is returned as the plain difference in hours, window and
    /// weekend ignored; this asymmetry versus the multi-day path is the
    /// specified behavior, not an oversight.
    pub fn working_hours(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> WorkHoursResult<f64> {
        if start > end {
            return Err(WorkHoursError::InvalidSpan { start, end });
        }

        if is_same_day(start, end) {
            return Ok(hours_between(start, end));
        }

        // Multi-day: exclude non-working hours on both boundary days.
        let start = clamp_to_window(start, &self.window);
        let end = clamp_to_window(end, &self.window);

        let start_day_hours = self.hours_to_window_end(start);
        let end_day_hours = self.hours_from_window_start(end);

        let days_between = whole_working_days_between(start, end);
        if days_between < 1 {
            // Not the same day but no full working day between them,
            // e.g. an overnight span or a weekend-only gap.
            return Ok(start_day_hours + end_day_hours);
        }

        let between_hours = days_between as f64 * self.window.daily_hours();
        Ok(start_day_hours + between_hours + end_day_hours)
    }

    /// Hours from a clamped timestamp to the window end on its own day.
    fn hours_to_window_end(&self, ts: NaiveDateTime) -> f64 {
        let window_end = set_time(ts, self.window.end_hour, self.window.end_minute);
        hours_between(ts, window_end)
    }

    /// Hours from the window start to a clamped timestamp on its own day.
    fn hours_from_window_start(&self, ts: NaiveDateTime) -> f64 {
        let window_start = set_time(ts, self.window.start_hour, self.window.start_minute);
        hours_between(window_start, ts)
    }
}
