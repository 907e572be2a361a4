use chrono::{DateTime, Utc};

/// Where `created_at` and progress `timestamp` values come from.
///
/// Services read the wall clock in production; tests pin it so serialized
/// records compare byte for byte.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    /// Every call to `now` yields `at`.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }
}

/// Seconds since the epoch of the pinned instant, 2024-03-01T09:00:00Z.
pub const FIXED_TEST_TIMESTAMP: i64 = 1_709_283_600;

/// The pinned instant as a `DateTime<Utc>`.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0).unwrap_or_default()
}

/// Clock pinned to [`fixed_now`], shared by unit and HTTP tests.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}
