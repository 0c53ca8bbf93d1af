use std::{fmt, sync::mpsc::Sender};

use chrono::Local;
use log::{info, warn};
use model::{
    completion::{CompletionSet, SessionCompleted},
    ids::SessionId,
};

/// Receives an event the first time a session is marked complete.
pub trait CompletionListener {
    fn on_completed(&self, event: &SessionCompleted);
}

impl<F> CompletionListener for F
where
    F: Fn(&SessionCompleted),
{
    fn on_completed(&self, event: &SessionCompleted) {
        self(event)
    }
}

impl CompletionListener for Sender<SessionCompleted> {
    fn on_completed(&self, event: &SessionCompleted) {
        if self.send(event.clone()).is_err() {
            warn!(
                "Completion of session {} was not forwarded: receiver is gone",
                event.session_id
            );
        }
    }
}

/// Owner of the completion set.
#[derive(Default)]
pub struct CompletionTracker {
    completed: CompletionSet,
    listeners: Vec<Box<dyn CompletionListener>>,
}

impl CompletionTracker {
    pub fn new() -> Self {
        CompletionTracker::default()
    }

    /// Adds a restored set to the current one, keeping the subscribed
    /// listeners. No events are emitted for these ids.
    pub fn restore(&mut self, completed: CompletionSet) {
        self.completed.merge(completed);
    }

    pub fn subscribe(&mut self, listener: impl CompletionListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Returns `false` and emits nothing if the session was already complete.
    /// Ids are not checked against any registry.
    pub fn mark_complete(&mut self, id: SessionId) -> bool {
        if !self.completed.insert(id) {
            return false;
        }
        info!("Session {} completed", id);
        let event = SessionCompleted::new(id, Local::now());
        for listener in &self.listeners {
            listener.on_completed(&event);
        }
        true
    }

    pub fn is_complete(&self, id: SessionId) -> bool {
        self.completed.contains(id)
    }

    pub fn completed(&self) -> &CompletionSet {
        &self.completed
    }
}

impl fmt::Debug for CompletionTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionTracker")
            .field("completed", &self.completed)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
