pub mod time;

pub use time::hours_between;
pub use time::is_same_day;
