use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::{Path, PathBuf},
};

use log::{info, warn};
use model::{
    ids::{DayId, SessionId},
    session::Session,
    DateError,
};
use thiserror::Error;

use crate::calendar::CalendarStore;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed fixture: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Bad date key in fixture: {0}")]
    Date(#[from] DateError),
    #[error("Session {0} is listed more than once")]
    DuplicateSession(SessionId),
}

impl CalendarStore {
    /// Parses `{"YYYY-MM-DD": [session, ...], ...}`.
    pub fn from_json(json: &str) -> Result<CalendarStore, FixtureError> {
        let raw: BTreeMap<String, Vec<Session>> = serde_json::from_str(json)?;
        let mut seen = HashSet::new();
        let mut store = CalendarStore::new();

        for (key, sessions) in raw {
            let day: DayId = key.parse()?;
            if sessions.is_empty() {
                warn!("Fixture day {} has no sessions", day);
            }
            for session in sessions {
                if !seen.insert(session.id) {
                    return Err(FixtureError::DuplicateSession(session.id));
                }
                store.add_session(day, session);
            }
        }
        Ok(store)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<CalendarStore, FixtureError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = CalendarStore::from_json(&json)?;
        info!(
            "Loaded {} sessions on {} days from {}",
            store.sessions_count(),
            store.days_count(),
            path.display()
        );
        Ok(store)
    }
}
