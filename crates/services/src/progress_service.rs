use std::sync::Arc;

use lego_core::model::{Progress, ProgressDraft, ProgressId, UserRef};
use storage::repository::ProgressRepository;
use tracing::info;

use crate::Clock;
use crate::error::ProgressServiceError;

/// Records finished practice sessions and lists them per learner.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    progress: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, progress: Arc<dyn ProgressRepository>) -> Self {
        Self { clock, progress }
    }

    /// Stamp the draft with a fresh id and the current time, then append it.
    ///
    /// The user id is not checked against registered users.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if persistence fails.
    pub async fn record(&self, draft: ProgressDraft) -> Result<Progress, ProgressServiceError> {
        let progress = draft.into_progress(ProgressId::generate(), self.clock.now());
        self.progress.append_progress(&progress).await?;
        info!(
            user_id = %progress.user_id(),
            operation = %progress.operation(),
            score = progress.score(),
            "recorded progress"
        );
        Ok(progress)
    }

    /// All progress recorded under `user_id`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if repository access fails.
    pub async fn list_for_user(
        &self,
        user_id: &UserRef,
    ) -> Result<Vec<Progress>, ProgressServiceError> {
        Ok(self.progress.find_progress_by_user(user_id).await?)
    }
}
