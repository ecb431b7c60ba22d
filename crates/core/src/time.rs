use chrono::{DateTime, Duration, Utc};

/// Time source for tour timers. `Manual` only moves when told to.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Manual(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn manual(at: DateTime<Utc>) -> Self {
        Self::Manual(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Manual(t) => *t,
        }
    }

    /// Time left until `deadline`; negative once it has passed.
    #[must_use]
    pub fn until(&self, deadline: DateTime<Utc>) -> Duration {
        deadline - self.now()
    }

    /// Move a manual clock forward. No effect on `Clock::System`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Manual(t) = self {
            *t += delta;
        }
    }
}

/// Start of manual clocks in tests (2023-11-14T22:13:20Z).
pub const TEST_EPOCH_SECS: i64 = 1_700_000_000;

/// # Panics
///
/// Panics if `TEST_EPOCH_SECS` cannot be represented.
#[must_use]
pub fn test_epoch() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(TEST_EPOCH_SECS, 0).expect("test epoch should be valid")
}

/// A manual clock starting at `test_epoch()`.
#[must_use]
pub fn manual_clock() -> Clock {
    Clock::manual(test_epoch())
}
