use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    completion::CompletionSet,
    ids::WeekId,
    session::{Session, SessionKind},
};

use super::percent;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyStatistics {
    pub week: WeekId,
    pub total_sessions: u32,
    pub completed_count: u32,
    pub total_duration_min: u64,
    pub progress_percent: f64,
    pub active_day_count: u32,
    pub by_kind: BTreeMap<SessionKind, KindSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct KindSummary {
    pub sessions: u32,
    pub completed: u32,
    pub duration_min: u64,
}

impl WeeklyStatistics {
    /// Folds the sessions of each day of `week`. Duration is counted whether
    /// or not a session is complete. Minutes are summed as `u64`.
    pub fn new<'s>(
        week: WeekId,
        days: impl IntoIterator<Item = &'s [Session]>,
        completed: &CompletionSet,
    ) -> WeeklyStatistics {
        let mut stat = days.into_iter().fold(
            WeeklyStatistics::empty(week),
            |mut acc, sessions| {
                if !sessions.is_empty() {
                    acc.active_day_count += 1;
                }
                for session in sessions {
                    let done = completed.contains(session.id);
                    acc.total_sessions += 1;
                    let minutes = u64::from(session.duration_min);
                    acc.total_duration_min += minutes;
                    let kind = acc.by_kind.entry(session.kind).or_default();
                    kind.sessions += 1;
                    kind.duration_min += minutes;
                    if done {
                        acc.completed_count += 1;
                        kind.completed += 1;
                    }
                }
                acc
            },
        );

        stat.progress_percent = percent(stat.completed_count, stat.total_sessions);
        stat
    }

    pub fn empty(week: WeekId) -> WeeklyStatistics {
        WeeklyStatistics {
            week,
            total_sessions: 0,
            completed_count: 0,
            total_duration_min: 0,
            progress_percent: 0.0,
            active_day_count: 0,
            by_kind: BTreeMap::new(),
        }
    }

    pub fn progress_rounded(&self) -> u32 {
        self.progress_percent.round() as u32
    }

    pub fn remaining_count(&self) -> u32 {
        self.total_sessions - self.completed_count
    }
}
