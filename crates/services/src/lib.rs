#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod exercise_service;
pub mod progress_service;
pub mod user_service;

pub use lego_core::Clock;

pub use app_services::AppServices;
pub use error::{ExerciseServiceError, ProgressServiceError, UserServiceError};
pub use exercise_service::{DEFAULT_EXERCISE_COUNT, ExerciseService, MAX_EXERCISES_PER_REQUEST};
pub use progress_service::ProgressService;
pub use user_service::UserService;
