use log::debug;
use model::{
    ids::{DayId, WeekId},
    DateError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Week,
    Day,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

impl Direction {
    pub fn weeks(&self) -> i64 {
        match self {
            Direction::Back => -1,
            Direction::Forward => 1,
        }
    }
}

/// Active week, selected day and view mode of the schedule screen.
///
/// Knows nothing about sessions or completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    reference: DayId,
    week: WeekId,
    selected_day: DayId,
    mode: ViewMode,
}

impl Navigator {
    pub fn new(today: DayId) -> Result<Self, DateError> {
        Ok(Navigator {
            reference: today,
            week: WeekId::new(today)?,
            selected_day: today,
            mode: ViewMode::default(),
        })
    }

    pub fn reference(&self) -> DayId {
        self.reference
    }

    pub fn week(&self) -> WeekId {
        self.week
    }

    pub fn selected_day(&self) -> DayId {
        self.selected_day
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn days(&self) -> [DayId; 7] {
        self.week.days()
    }

    /// Days the presentation layer should show for the current mode.
    pub fn visible_days(&self) -> Vec<DayId> {
        match self.mode {
            ViewMode::Week => self.week.days().to_vec(),
            ViewMode::Day => vec![self.selected_day],
        }
    }

    /// Moves the reference date by seven days. The selected day keeps its
    /// weekday in the new week. State is left untouched on error.
    pub fn advance_week(&mut self, direction: Direction) -> Result<WeekId, DateError> {
        let weeks = direction.weeks();
        let reference = self.reference.shift_weeks(weeks)?;
        let week = WeekId::new(reference)?;
        let selected_day = self.selected_day.shift_weeks(weeks)?;

        self.reference = reference;
        self.week = week;
        self.selected_day = selected_day;
        debug!("Moved to week {}", week);
        Ok(week)
    }

    pub fn select_day(&mut self, day: DayId) -> Result<WeekId, DateError> {
        if !self.week.contains(day) {
            self.week = WeekId::new(day)?;
            self.reference = day;
            debug!("Day {} is outside of the week, moved to {}", day, self.week);
        }
        self.selected_day = day;
        Ok(self.week)
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }
}
