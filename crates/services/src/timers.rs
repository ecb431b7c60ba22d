use chrono::{DateTime, Utc};

use tour_core::model::TimerId;

/// One-shot timers keyed by the id the tour state allocated for them.
#[derive(Debug, Default)]
pub struct TimerQueue {
    entries: Vec<(DateTime<Utc>, TimerId)>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `timer`, replacing any earlier deadline for the same id.
    pub fn schedule(&mut self, timer: TimerId, deadline: DateTime<Utc>) {
        self.cancel(timer);
        self.entries.push((deadline, timer));
    }

    /// Returns `true` if the timer was still pending.
    pub fn cancel(&mut self, timer: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(_, id)| *id != timer);
        self.entries.len() != before
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.entries.iter().map(|(deadline, _)| *deadline).min()
    }

    /// Remove and return every timer due at `now`, earliest first.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Vec<TimerId> {
        let (mut due, pending): (Vec<_>, Vec<_>) = self
            .entries
            .drain(..)
            .partition(|(deadline, _)| *deadline <= now);
        self.entries = pending;
        due.sort_by_key(|(deadline, id)| (*deadline, *id));
        due.into_iter().map(|(_, id)| id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
