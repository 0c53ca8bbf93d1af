use log::debug;
use model::{
    completion::CompletionSet,
    ids::{DayId, SessionId, WeekId},
    session::Session,
    statistics::{DayIndicator, DayStatistics, WeeklyStatistics},
    DateError,
};
use service::{
    calendar::{Calendar, Week},
    completion::{CompletionListener, CompletionTracker},
    navigation::{Direction, Navigator, ViewMode},
    statistics,
};
use storage::SessionSource;

pub mod service;

/// Weekly training schedule: the injected sessions, the user's completion
/// state and the navigation of the schedule screen.
pub struct Schedule<S> {
    pub calendar: Calendar<S>,
    pub completion: CompletionTracker,
    pub navigator: Navigator,
}

impl<S: SessionSource> Schedule<S> {
    pub fn new(source: S, today: DayId) -> Result<Self, DateError> {
        Ok(Schedule {
            calendar: Calendar::new(source),
            completion: CompletionTracker::new(),
            navigator: Navigator::new(today)?,
        })
    }

    pub fn with_completed(mut self, completed: CompletionSet) -> Self {
        self.completion.restore(completed);
        self
    }

    pub fn week(&self) -> WeekId {
        self.navigator.week()
    }

    pub fn get_week(&self) -> Week {
        self.calendar.get_week(self.week())
    }

    pub fn visible_days(&self) -> Vec<DayId> {
        self.navigator.visible_days()
    }

    pub fn sessions_on(&self, day: DayId) -> Vec<Session> {
        self.calendar.sessions_on(day)
    }

    pub fn agenda(&self, day: DayId) -> Vec<AgendaItem> {
        self.calendar
            .agenda(day)
            .into_iter()
            .map(|session| AgendaItem {
                completed: self.completion.is_complete(session.id),
                session,
            })
            .collect()
    }

    pub fn advance_week(&mut self, direction: Direction) -> Result<WeekId, DateError> {
        self.navigator.advance_week(direction)
    }

    pub fn select_day(&mut self, day: DayId) -> Result<WeekId, DateError> {
        self.navigator.select_day(day)
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        debug!("View mode: {:?}", mode);
        self.navigator.set_view_mode(mode);
    }

    pub fn subscribe(&mut self, listener: impl CompletionListener + 'static) {
        self.completion.subscribe(listener);
    }

    pub fn mark_complete(&mut self, id: SessionId) -> bool {
        self.completion.mark_complete(id)
    }

    pub fn is_complete(&self, id: SessionId) -> bool {
        self.completion.is_complete(id)
    }

    pub fn weekly_stats(&self) -> WeeklyStatistics {
        self.weekly_stats_for(self.week())
    }

    pub fn weekly_stats_for(&self, week: WeekId) -> WeeklyStatistics {
        statistics::compute_weekly_stats(week, &self.calendar, self.completion.completed())
    }

    pub fn day_stats(&self, day: DayId) -> DayStatistics {
        statistics::compute_day_stats(day, &self.calendar, self.completion.completed())
    }

    pub fn selected_day_stats(&self) -> DayStatistics {
        self.day_stats(self.navigator.selected_day())
    }

    pub fn day_indicator(&self, day: DayId) -> DayIndicator {
        statistics::day_indicator(day, &self.calendar, self.completion.completed())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaItem {
    pub session: Session,
    pub completed: bool,
}
