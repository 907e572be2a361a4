use chrono::{DateTime, Utc};

use crate::model::ids::{ProgressId, UserRef};
use crate::model::profile::{AgeGroup, Level, Operation};

/// Points awarded per correctly answered exercise.
pub const POINTS_PER_CORRECT_ANSWER: u32 = 10;

/// Unsaved progress for a finished practice session, as reported by a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressDraft {
    pub user_id: UserRef,
    pub age_group: AgeGroup,
    pub operation: Operation,
    pub level: Level,
    pub score: u32,
    pub stars: u32,
    pub completed_exercises: u32,
}

impl ProgressDraft {
    #[must_use]
    pub fn into_progress(self, id: ProgressId, timestamp: DateTime<Utc>) -> Progress {
        Progress {
            id,
            user_id: self.user_id,
            age_group: self.age_group,
            operation: self.operation,
            level: self.level,
            score: self.score,
            stars: self.stars,
            completed_exercises: self.completed_exercises,
            timestamp,
        }
    }
}

/// Append-only record of one completed practice session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    id: ProgressId,
    user_id: UserRef,
    age_group: AgeGroup,
    operation: Operation,
    level: Level,
    score: u32,
    stars: u32,
    completed_exercises: u32,
    timestamp: DateTime<Utc>,
}

impl Progress {
    /// Rehydrate a progress record from persisted storage.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn from_persisted(
        id: ProgressId,
        user_id: UserRef,
        age_group: AgeGroup,
        operation: Operation,
        level: Level,
        score: u32,
        stars: u32,
        completed_exercises: u32,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            age_group,
            operation,
            level,
            score,
            stars,
            completed_exercises,
            timestamp,
        }
    }

    #[must_use]
    pub fn id(&self) -> ProgressId {
        self.id
    }

    #[must_use]
    pub fn user_id(&self) -> &UserRef {
        &self.user_id
    }

    #[must_use]
    pub fn age_group(&self) -> AgeGroup {
        self.age_group
    }

    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn stars(&self) -> u32 {
        self.stars
    }

    #[must_use]
    pub fn completed_exercises(&self) -> u32 {
        self.completed_exercises
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Share of the maximum attainable score, rounded to a whole percent.
    ///
    /// Returns 0 when no exercises were completed.
    #[must_use]
    pub fn accuracy_percent(&self) -> u32 {
        if self.completed_exercises == 0 {
            return 0;
        }
        let max = u64::from(self.completed_exercises) * u64::from(POINTS_PER_CORRECT_ANSWER);
        let scaled = u64::from(self.score) * 100;
        // round half up
        let pct = (scaled * 2 + max) / (max * 2);
        u32::try_from(pct).unwrap_or(u32::MAX)
    }
}
