use lego_core::ExerciseGenerator;
use lego_core::model::{Exercise, ExerciseProfile};
use rand::Rng;
use tracing::debug;

use crate::error::ExerciseServiceError;

/// Exercises generated when a request does not say how many it wants.
pub const DEFAULT_EXERCISE_COUNT: u32 = 10;

/// Upper bound on exercises generated by a single request.
pub const MAX_EXERCISES_PER_REQUEST: u32 = 100;

/// Produces batches of independent exercises for a profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExerciseService {
    generator: ExerciseGenerator,
}

impl ExerciseService {
    #[must_use]
    pub fn new(generator: ExerciseGenerator) -> Self {
        Self { generator }
    }

    /// Generate `count` exercises using the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseServiceError::TooMany` if `count` exceeds
    /// `MAX_EXERCISES_PER_REQUEST`.
    pub fn generate_batch(
        &self,
        profile: ExerciseProfile,
        count: u32,
    ) -> Result<Vec<Exercise>, ExerciseServiceError> {
        self.generate_batch_with(profile, count, &mut rand::rng())
    }

    /// Generate `count` exercises drawing from the given RNG.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseServiceError::TooMany` if `count` exceeds
    /// `MAX_EXERCISES_PER_REQUEST`.
    pub fn generate_batch_with<R: Rng + ?Sized>(
        &self,
        profile: ExerciseProfile,
        count: u32,
        rng: &mut R,
    ) -> Result<Vec<Exercise>, ExerciseServiceError> {
        if count > MAX_EXERCISES_PER_REQUEST {
            return Err(ExerciseServiceError::TooMany {
                requested: count,
                max: MAX_EXERCISES_PER_REQUEST,
            });
        }

        let exercises: Vec<Exercise> = (0..count)
            .map(|_| self.generator.generate(profile, &mut *rng))
            .collect();
        debug!(
            age_group = %profile.age_group,
            operation = %profile.operation,
            level = %profile.level,
            count,
            "generated exercises"
        );
        Ok(exercises)
    }
}
