use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::exercise_service::ExerciseService;
use crate::progress_service::ProgressService;
use crate::user_service::UserService;

/// Assembles the request-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    users: Arc<UserService>,
    progress: Arc<ProgressService>,
    exercises: ExerciseService,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, clock: Clock) -> Self {
        Self {
            users: Arc::new(UserService::new(clock, Arc::clone(&storage.users))),
            progress: Arc::new(ProgressService::new(clock, Arc::clone(&storage.progress))),
            exercises: ExerciseService::default(),
        }
    }

    /// Services over a fresh in-memory store.
    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::new(&Storage::in_memory(), clock)
    }

    #[must_use]
    pub fn users(&self) -> Arc<UserService> {
        Arc::clone(&self.users)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn exercises(&self) -> ExerciseService {
        self.exercises
    }
}
