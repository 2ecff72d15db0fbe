//! workhours library root.
//! Computes elapsed working hours between two timestamps given a daily
//! working window, skipping nights and Saturday/Sunday.

pub mod config;
pub mod core;
pub mod errors;
pub mod utils;

pub use crate::config::WorkingWindow;
pub use crate::core::calculator::WorkingHoursCalculator;
pub use crate::errors::{WorkHoursError, WorkHoursResult};
