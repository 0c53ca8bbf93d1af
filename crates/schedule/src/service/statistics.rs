use model::{
    completion::CompletionSet,
    ids::{DayId, WeekId},
    statistics::{DayIndicator, DayStatistics, WeeklyStatistics},
};
use storage::SessionSource;

use super::calendar::Calendar;

/// Pure over its inputs: the same week, sessions and completion snapshot
/// always produce the same statistics.
pub fn compute_weekly_stats<S: SessionSource>(
    week: WeekId,
    calendar: &Calendar<S>,
    completed: &CompletionSet,
) -> WeeklyStatistics {
    let week = calendar.get_week(week);
    WeeklyStatistics::new(
        week.id,
        week.days.iter().map(|d| d.sessions.as_slice()),
        completed,
    )
}

pub fn compute_day_stats<S: SessionSource>(
    day: DayId,
    calendar: &Calendar<S>,
    completed: &CompletionSet,
) -> DayStatistics {
    DayStatistics::new(day, &calendar.sessions_on(day), completed)
}

pub fn day_indicator<S: SessionSource>(
    day: DayId,
    calendar: &Calendar<S>,
    completed: &CompletionSet,
) -> DayIndicator {
    DayIndicator::new(&calendar.sessions_on(day), completed)
}
