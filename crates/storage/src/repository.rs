use async_trait::async_trait;
use lego_core::model::{Age, Progress, User, UserId, UserRef};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for learner profiles.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look up a user by the (name, age) natural key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the lookup cannot be performed.
    async fn find_user(&self, name: &str, age: Age) -> Result<Option<User>, StorageError>;

    /// Fetch a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the lookup cannot be performed.
    async fn get_user(&self, id: UserId) -> Result<Option<User>, StorageError>;

    /// Insert a new user.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if a user with the same name and age
    /// already exists, or other storage errors.
    async fn create_user(&self, user: &User) -> Result<(), StorageError>;
}

/// Append-only log of completed practice sessions.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Append a progress record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn append_progress(&self, progress: &Progress) -> Result<(), StorageError>;

    /// All progress recorded under a user reference, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the query fails.
    async fn find_progress_by_user(
        &self,
        user_id: &UserRef,
    ) -> Result<Vec<Progress>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    users: Arc<Mutex<HashMap<UserId, User>>>,
    progress: Arc<Mutex<Vec<Progress>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn find_user(&self, name: &str, age: Age) -> Result<Option<User>, StorageError> {
        let guard = self
            .users
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let found = guard
            .values()
            .find(|u| u.name() == name && u.age() == age)
            .cloned();
        Ok(found)
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>, StorageError> {
        let guard = self
            .users
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&id).cloned())
    }

    async fn create_user(&self, user: &User) -> Result<(), StorageError> {
        let mut guard = self
            .users
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let duplicate = guard
            .values()
            .any(|u| u.id() == user.id() || (u.name() == user.name() && u.age() == user.age()));
        if duplicate {
            return Err(StorageError::Conflict);
        }
        guard.insert(user.id(), user.clone());
        Ok(())
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn append_progress(&self, progress: &Progress) -> Result<(), StorageError> {
        let mut guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        if guard.iter().any(|p| p.id() == progress.id()) {
            return Err(StorageError::Conflict);
        }
        guard.push(progress.clone());
        Ok(())
    }

    async fn find_progress_by_user(
        &self,
        user_id: &UserRef,
    ) -> Result<Vec<Progress>, StorageError> {
        let guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard
            .iter()
            .filter(|p| p.user_id() == user_id)
            .cloned()
            .collect())
    }
}

/// Aggregates user and progress repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub users: Arc<dyn UserRepository>,
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let users: Arc<dyn UserRepository> = Arc::new(repo.clone());
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo);
        Self { users, progress }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lego_core::model::{AgeGroup, Level, Operation, ProgressDraft, ProgressId};
    use lego_core::time::fixed_now;

    fn build_user(name: &str, age: i64) -> User {
        User::new(UserId::generate(), name, Age::new(age).unwrap(), fixed_now()).unwrap()
    }

    fn build_progress(user_id: &UserRef, score: u32) -> Progress {
        ProgressDraft {
            user_id: user_id.clone(),
            age_group: AgeGroup::ThreeToFive,
            operation: Operation::Suma,
            level: Level::Facil,
            score,
            stars: 1,
            completed_exercises: 10,
        }
        .into_progress(ProgressId::generate(), fixed_now())
    }

    #[tokio::test]
    async fn finds_user_by_natural_key() {
        let repo = InMemoryRepository::new();
        let user = build_user("Lucía", 5);
        repo.create_user(&user).await.unwrap();

        let found = repo.find_user("Lucía", Age::new(5).unwrap()).await.unwrap();
        assert_eq!(found, Some(user.clone()));

        let other_age = repo.find_user("Lucía", Age::new(6).unwrap()).await.unwrap();
        assert!(other_age.is_none());

        assert_eq!(repo.get_user(user.id()).await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn duplicate_natural_key_conflicts() {
        let repo = InMemoryRepository::new();
        repo.create_user(&build_user("Mateo", 8)).await.unwrap();
        let err = repo.create_user(&build_user("Mateo", 8)).await.unwrap_err();
        assert!(matches!(err, StorageError::Conflict));
    }

    #[tokio::test]
    async fn progress_keeps_insertion_order_per_user() {
        let repo = InMemoryRepository::new();
        let a = UserRef::from(UserId::generate());
        let b = UserRef::new("guest");
        repo.append_progress(&build_progress(&a, 30)).await.unwrap();
        repo.append_progress(&build_progress(&b, 50)).await.unwrap();
        repo.append_progress(&build_progress(&a, 10)).await.unwrap();

        let scores: Vec<u32> = repo
            .find_progress_by_user(&a)
            .await
            .unwrap()
            .iter()
            .map(Progress::score)
            .collect();
        assert_eq!(scores, vec![30, 10]);
        assert_eq!(repo.find_progress_by_user(&b).await.unwrap().len(), 1);
        assert!(repo.find_progress_by_user(&UserRef::new("nadie")).await.unwrap().is_empty());
    }
}
