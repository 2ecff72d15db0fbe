//! Working window configuration: the daily start/end clock times during
//! which hours count toward a working-hours total.

use crate::errors::{WorkHoursError, WorkHoursResult};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingWindow {
    #[serde(default = "default_start_hour")]
    pub start_hour: u32,
    #[serde(default)]
    pub start_minute: u32,
    #[serde(default = "default_end_hour")]
    pub end_hour: u32,
    #[serde(default = "default_end_minute")]
    pub end_minute: u32,
}

fn default_start_hour() -> u32 {
    9
}
fn default_end_hour() -> u32 {
    17
}
fn default_end_minute() -> u32 {
    30
}

impl Default for WorkingWindow {
    fn default() -> Self {
        Self {
            start_hour: default_start_hour(),
            start_minute: 0,
            end_hour: default_end_hour(),
            end_minute: default_end_minute(),
        }
    }
}

impl WorkingWindow {
    pub fn new(start_hour: u32, start_minute: u32, end_hour: u32, end_minute: u32) -> Self {
        Self {
            start_hour,
            start_minute,
            end_hour,
            end_minute,
        }
    }

    /// Parse a window from a YAML document. Missing fields fall back to
    /// the 09:00-17:30 defaults.
    pub fn from_yaml_str(content: &str) -> WorkHoursResult<Self> {
        serde_yaml::from_str(content).map_err(|e| WorkHoursError::Config(e.to_string()))
    }

    /// Load a window from a YAML file, or return defaults if the file
    /// does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> WorkHoursResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| WorkHoursError::Config(e.to_string()))?;
        Self::from_yaml_str(&content)
    }

    /// Fail fast on nonsense windows: out-of-range wall-clock components,
    /// or a start not strictly before the end.
    pub fn validate(&self) -> WorkHoursResult<()> {
        if self.start_hour > 23 || self.end_hour > 23 {
            return Err(WorkHoursError::InvalidWindow(format!(
                "hour out of range: start {:02}, end {:02}",
                self.start_hour, self.end_hour
            )));
        }
        if self.start_minute > 59 || self.end_minute > 59 {
            return Err(WorkHoursError::InvalidWindow(format!(
                "minute out of range: start {:02}, end {:02}",
                self.start_minute, self.end_minute
            )));
        }
        if self.start_minutes_of_day() >= self.end_minutes_of_day() {
            return Err(WorkHoursError::InvalidWindow(format!(
                "start {:02}:{:02} is not before end {:02}:{:02}",
                self.start_hour, self.start_minute, self.end_hour, self.end_minute
            )));
        }
        Ok(())
    }

    pub fn start_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.start_hour, self.start_minute, 0)
            .expect("validated window start")
    }

    pub fn end_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.end_hour, self.end_minute, 0).expect("validated window end")
    }

    /// Width of the window in minutes.
    pub fn daily_minutes(&self) -> i64 {
        self.end_minutes_of_day() - self.start_minutes_of_day()
    }

    /// Width of the window in hours, the rate applied to each whole
    /// working day.
    pub fn daily_hours(&self) -> f64 {
        self.daily_minutes() as f64 / 60.0
    }

    fn start_minutes_of_day(&self) -> i64 {
        (self.start_hour as i64) * 60 + self.start_minute as i64
    }

    fn end_minutes_of_day(&self) -> i64 {
        (self.end_hour as i64) * 60 + self.end_minute as i64
    }
}
