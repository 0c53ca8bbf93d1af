pub mod day;
pub mod week;

pub use day::{DayIndicator, DayStatistics, IndicatorColor, SessionMarker};
pub use week::{KindSummary, WeeklyStatistics};

/// `part / total * 100`, or `0` for an empty total.
pub fn percent(part: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
