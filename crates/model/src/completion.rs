use std::collections::HashSet;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::ids::SessionId;

/// Ids of the sessions the user has marked done. Add-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionSet {
    ids: HashSet<SessionId>,
}

impl CompletionSet {
    pub fn new() -> Self {
        CompletionSet::default()
    }

    /// Returns `true` if the id was not in the set yet.
    pub fn insert(&mut self, id: SessionId) -> bool {
        self.ids.insert(id)
    }

    pub fn contains(&self, id: SessionId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Adds every id of `other`. Ids already present stay.
    pub fn merge(&mut self, other: CompletionSet) {
        self.ids.extend(other.ids);
    }
}

impl FromIterator<SessionId> for CompletionSet {
    fn from_iter<T: IntoIterator<Item = SessionId>>(iter: T) -> Self {
        CompletionSet {
            ids: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCompleted {
    pub session_id: SessionId,
    pub completed_at: DateTime<Local>,
}

impl SessionCompleted {
    pub fn new(session_id: SessionId, completed_at: DateTime<Local>) -> Self {
        SessionCompleted {
            session_id,
            completed_at,
        }
    }
}
