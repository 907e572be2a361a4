//! Request and response bodies for the JSON API.

use chrono::{DateTime, Utc};
use lego_core::model::{AgeGroup, Exercise, Level, Operation, Progress, User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub age: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().to_owned(),
            age: user.age().value(),
            created_at: user.created_at(),
        }
    }
}

/// Progress as posted by the client; profile fields stay raw until validated.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProgressRequest {
    pub user_id: String,
    pub age_group: String,
    pub operation: String,
    pub level: String,
    pub score: u32,
    pub stars: u32,
    pub completed_exercises: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub id: String,
    pub user_id: String,
    pub age_group: AgeGroup,
    pub operation: Operation,
    pub level: Level,
    pub score: u32,
    pub stars: u32,
    pub completed_exercises: u32,
    pub timestamp: DateTime<Utc>,
    /// Percent of the maximum score, see `Progress::accuracy_percent`.
    pub accuracy: u32,
}

impl From<&Progress> for ProgressResponse {
    fn from(p: &Progress) -> Self {
        Self {
            id: p.id().to_string(),
            user_id: p.user_id().to_string(),
            age_group: p.age_group(),
            operation: p.operation(),
            level: p.level(),
            score: p.score(),
            stars: p.stars(),
            completed_exercises: p.completed_exercises(),
            timestamp: p.timestamp(),
            accuracy: p.accuracy_percent(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseQuery {
    pub age_group: String,
    pub operation: String,
    pub level: String,
    pub count: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExercisesResponse {
    pub exercises: Vec<Exercise>,
}
