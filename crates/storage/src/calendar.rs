use std::collections::HashMap;

use model::{
    ids::{DayId, SessionId},
    session::Session,
};

use crate::SessionSource;

/// In-memory date to sessions map.
#[derive(Debug, Clone, Default)]
pub struct CalendarStore {
    days: HashMap<DayId, Vec<Session>>,
}

impl CalendarStore {
    pub fn new() -> Self {
        CalendarStore::default()
    }

    pub fn add_session(&mut self, day: DayId, session: Session) {
        self.days.entry(day).or_default().push(session);
    }

    pub fn with_day(mut self, day: DayId, sessions: Vec<Session>) -> Self {
        self.days.entry(day).or_default().extend(sessions);
        self
    }

    pub fn get_day(&self, day: DayId) -> &[Session] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn find_session(&self, id: SessionId) -> Option<(DayId, &Session)> {
        self.days.iter().find_map(|(day, sessions)| {
            sessions
                .iter()
                .find(|s| s.id == id)
                .map(|session| (*day, session))
        })
    }

    pub fn days_count(&self) -> usize {
        self.days.values().filter(|s| !s.is_empty()).count()
    }

    pub fn sessions_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

impl SessionSource for CalendarStore {
    fn sessions_on(&self, day: DayId) -> Vec<Session> {
        self.get_day(day).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use model::session::{Intensity, SessionKind};

    use super::*;

    fn session(id: u64) -> Session {
        Session::new(
            SessionId::new(id),
            "Team Practice".to_owned(),
            "Coach Lee".to_owned(),
            NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            60,
            SessionKind::Team,
            Intensity::Medium,
            "Main Field".to_owned(),
        )
    }

    fn day(s: &str) -> DayId {
        s.parse().unwrap()
    }

    #[test]
    fn test_lookup() {
        let store = CalendarStore::new()
            .with_day(day("2024-08-26"), vec![session(1), session(2)])
            .with_day(day("2024-08-29"), vec![session(3)]);

        assert_eq!(store.sessions_on(day("2024-08-26")).len(), 2);
        assert_eq!(store.sessions_on(day("2024-08-29"))[0].id, SessionId::new(3));
        assert!(store.sessions_on(day("2024-08-27")).is_empty());
        assert_eq!(store.days_count(), 2);
        assert_eq!(store.sessions_count(), 3);
    }

    #[test]
    fn test_add_session_keeps_order() {
        let mut store = CalendarStore::new();
        store.add_session(day("2024-08-26"), session(5));
        store.add_session(day("2024-08-26"), session(4));
        let ids = store
            .get_day(day("2024-08-26"))
            .iter()
            .map(|s| s.id.value())
            .collect::<Vec<_>>();
        assert_eq!(ids, [5, 4]);
    }

    #[test]
    fn test_find_session() {
        let store = CalendarStore::new().with_day(day("2024-08-29"), vec![session(3)]);
        let (found_day, found) = store.find_session(SessionId::new(3)).unwrap();
        assert_eq!(found_day, day("2024-08-29"));
        assert_eq!(found.title, "Team Practice");
        assert!(store.find_session(SessionId::new(4)).is_none());
    }

    #[test]
    fn test_closure_source() {
        let target = day("2024-08-26");
        let source = move |d: DayId| if d == target { vec![session(9)] } else { vec![] };
        assert_eq!(source.sessions_on(target).len(), 1);
        assert!(source.sessions_on(day("2024-08-27")).is_empty());
    }
}
