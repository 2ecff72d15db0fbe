pub mod calculator;

pub use calculator::WorkingHoursCalculator;
