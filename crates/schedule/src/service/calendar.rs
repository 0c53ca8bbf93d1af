use model::{
    ids::{DayId, WeekId},
    session::Session,
};
use storage::SessionSource;

/// Read-only view of the injected session source.
pub struct Calendar<S> {
    source: S,
}

impl<S: SessionSource> Calendar<S> {
    pub fn new(source: S) -> Self {
        Calendar { source }
    }

    /// The backing source, for lookups it offers beyond `sessions_on`.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Sessions in the order the source supplies them.
    pub fn sessions_on(&self, day: DayId) -> Vec<Session> {
        self.source.sessions_on(day)
    }

    /// Sessions of the day ordered by start time.
    pub fn agenda(&self, day: DayId) -> Vec<Session> {
        let mut sessions = self.sessions_on(day);
        sessions.sort_by_key(|s| s.start_at);
        sessions
    }

    pub fn get_week(&self, id: WeekId) -> Week {
        Week {
            id,
            days: id.days().map(|day| DaySessions {
                day,
                sessions: self.sessions_on(day),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Week {
    pub id: WeekId,
    pub days: [DaySessions; 7],
}

#[derive(Debug, Clone)]
pub struct DaySessions {
    pub day: DayId,
    pub sessions: Vec<Session>,
}
