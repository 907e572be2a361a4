mod exercise;
mod ids;
mod profile;
mod progress;
mod user;

pub use exercise::Exercise;
pub use ids::{ParseIdError, ProgressId, UserId, UserRef};
pub use profile::{AgeGroup, ExerciseProfile, Level, Operation, ProfileError};
pub use progress::{POINTS_PER_CORRECT_ANSWER, Progress, ProgressDraft};
pub use user::{Age, User, UserError, normalize_name};
