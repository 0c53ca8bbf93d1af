pub mod calendar;
pub mod fixture;

pub use calendar::CalendarStore;
pub use fixture::FixtureError;

use model::{ids::DayId, session::Session};

/// Provider of the sessions scheduled on a day.
///
/// The schedule only ever reads through this trait, so the backing map can be
/// static fixtures, a database or a remote store.
pub trait SessionSource {
    fn sessions_on(&self, day: DayId) -> Vec<Session>;
}

impl<F> SessionSource for F
where
    F: Fn(DayId) -> Vec<Session>,
{
    fn sessions_on(&self, day: DayId) -> Vec<Session> {
        self(day)
    }
}
