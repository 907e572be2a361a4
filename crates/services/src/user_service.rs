use std::sync::Arc;

use lego_core::model::{Age, User, UserId, normalize_name};
use storage::repository::{StorageError, UserRepository};
use tracing::{debug, info};

use crate::Clock;
use crate::error::UserServiceError;

/// Registers learners and looks them up.
#[derive(Clone)]
pub struct UserService {
    clock: Clock,
    users: Arc<dyn UserRepository>,
}

impl UserService {
    #[must_use]
    pub fn new(clock: Clock, users: Arc<dyn UserRepository>) -> Self {
        Self { clock, users }
    }

    /// Return the user registered under (name, age), creating it on first use.
    ///
    /// Repeated registrations with the same name and age return the record
    /// created first. If a concurrent registration wins the insert, its row is
    /// re-read and returned.
    ///
    /// # Errors
    ///
    /// Returns `UserServiceError::Invalid` if the age is outside 3..=12 or the
    /// name is blank.
    /// Returns `UserServiceError::Storage` if persistence fails.
    pub async fn register(&self, name: String, age: i64) -> Result<User, UserServiceError> {
        let age = Age::new(age)?;
        let name = normalize_name(name)?;

        if let Some(existing) = self.users.find_user(&name, age).await? {
            debug!(user_id = %existing.id(), "returning existing user");
            return Ok(existing);
        }

        let user = User::new(UserId::generate(), name, age, self.clock.now())?;
        match self.users.create_user(&user).await {
            Ok(()) => {
                info!(user_id = %user.id(), age = age.value(), "registered user");
                Ok(user)
            }
            Err(StorageError::Conflict) => {
                debug!("concurrent registration won, re-reading");
                let winner = self
                    .users
                    .find_user(user.name(), age)
                    .await?
                    .ok_or(StorageError::NotFound)?;
                Ok(winner)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Fetch a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `UserServiceError::NotFound` when no such user exists.
    /// Returns `UserServiceError::Storage` if repository access fails.
    pub async fn get_user(&self, id: UserId) -> Result<User, UserServiceError> {
        self.users
            .get_user(id)
            .await?
            .ok_or(UserServiceError::NotFound)
    }
}
