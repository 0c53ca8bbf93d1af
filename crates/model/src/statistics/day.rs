use serde::Serialize;

use crate::{
    completion::CompletionSet,
    ids::DayId,
    session::{Intensity, Session},
};

use super::percent;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayStatistics {
    pub day: DayId,
    pub total_sessions: u32,
    pub completed_count: u32,
    pub total_duration_min: u64,
    pub progress_percent: f64,
    pub indicator: DayIndicator,
}

impl DayStatistics {
    pub fn new(day: DayId, sessions: &[Session], completed: &CompletionSet) -> DayStatistics {
        let total_sessions = sessions.len() as u32;
        let completed_count = sessions
            .iter()
            .filter(|s| completed.contains(s.id))
            .count() as u32;
        DayStatistics {
            day,
            total_sessions,
            completed_count,
            total_duration_min: sessions.iter().map(|s| u64::from(s.duration_min)).sum(),
            progress_percent: percent(completed_count, total_sessions),
            indicator: DayIndicator::new(sessions, completed),
        }
    }
}

/// Compact status of a day for the week strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DayIndicator {
    Empty,
    FullyComplete,
    Markers(Vec<SessionMarker>),
}

impl DayIndicator {
    pub fn new(sessions: &[Session], completed: &CompletionSet) -> DayIndicator {
        if sessions.is_empty() {
            return DayIndicator::Empty;
        }
        if sessions.iter().all(|s| completed.contains(s.id)) {
            return DayIndicator::FullyComplete;
        }
        DayIndicator::Markers(
            sessions
                .iter()
                .map(|s| SessionMarker::new(s, completed))
                .collect(),
        )
    }

    pub fn is_fully_complete(&self) -> bool {
        matches!(self, DayIndicator::FullyComplete)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SessionMarker {
    Completed,
    Low,
    Medium,
    High,
}

impl SessionMarker {
    /// Completion overrides intensity.
    pub fn new(session: &Session, completed: &CompletionSet) -> SessionMarker {
        if completed.contains(session.id) {
            SessionMarker::Completed
        } else {
            SessionMarker::from(session.intensity)
        }
    }

    pub fn color(&self) -> IndicatorColor {
        match self {
            SessionMarker::Completed => IndicatorColor::Green,
            SessionMarker::Low => IndicatorColor::Blue,
            SessionMarker::Medium => IndicatorColor::Amber,
            SessionMarker::High => IndicatorColor::Red,
        }
    }
}

impl From<Intensity> for SessionMarker {
    fn from(intensity: Intensity) -> Self {
        match intensity {
            Intensity::Low => SessionMarker::Low,
            Intensity::Medium => SessionMarker::Medium,
            Intensity::High => SessionMarker::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IndicatorColor {
    Green,
    Blue,
    Amber,
    Red,
}

impl IndicatorColor {
    pub fn hex(&self) -> &'static str {
        match self {
            IndicatorColor::Green => "#4CAF50",
            IndicatorColor::Blue => "#2196F3",
            IndicatorColor::Amber => "#FF9800",
            IndicatorColor::Red => "#F44336",
        }
    }
}
