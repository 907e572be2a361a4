//! API routes, all mounted under `/api`.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use lego_core::model::{ExerciseProfile, ProgressDraft, UserId, UserRef};
use services::DEFAULT_EXERCISE_COUNT;
use tracing::debug;

use crate::dto::{
    CreateProgressRequest, CreateUserRequest, ExerciseQuery, ExercisesResponse, MessageResponse,
    ProgressResponse, UserResponse,
};
use crate::error::ApiError;
use crate::state::AppState;

pub const GREETING: &str = "Matemáticas LEGO API";

// ============================================================================
// Health
// ============================================================================

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
}

async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: GREETING.to_owned(),
    })
}

// ============================================================================
// Users
// ============================================================================

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", post(create_user))
        .route("/api/users/{user_id}", get(get_user))
        .route("/api/users/{user_id}/progress", get(get_user_progress))
}

async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.services.users().register(req.name, req.age).await?;
    Ok(Json(UserResponse::from(&user)))
}

async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id: UserId = user_id.parse().map_err(|_| {
        debug!(%user_id, "malformed user id");
        services::UserServiceError::NotFound
    })?;
    let user = state.services.users().get_user(user_id).await?;
    Ok(Json(UserResponse::from(&user)))
}

async fn get_user_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<ProgressResponse>>, ApiError> {
    let history = state
        .services
        .progress()
        .list_for_user(&UserRef::new(user_id))
        .await?;
    Ok(Json(history.iter().map(ProgressResponse::from).collect()))
}

// ============================================================================
// Progress
// ============================================================================

pub fn progress_routes() -> Router<AppState> {
    Router::new().route("/api/progress", post(save_progress))
}

async fn save_progress(
    State(state): State<AppState>,
    Json(req): Json<CreateProgressRequest>,
) -> Result<Json<ProgressResponse>, ApiError> {
    let profile = ExerciseProfile::parse(&req.age_group, &req.operation, &req.level)?;

    let draft = ProgressDraft {
        user_id: UserRef::new(req.user_id),
        age_group: profile.age_group,
        operation: profile.operation,
        level: profile.level,
        score: req.score,
        stars: req.stars,
        completed_exercises: req.completed_exercises,
    };
    let progress = state.services.progress().record(draft).await?;
    Ok(Json(ProgressResponse::from(&progress)))
}

// ============================================================================
// Exercises
// ============================================================================

pub fn exercise_routes() -> Router<AppState> {
    Router::new().route("/api/exercises", get(get_exercises))
}

/// `count` defaults to `DEFAULT_EXERCISE_COUNT`; above
/// `MAX_EXERCISES_PER_REQUEST` the request is rejected with 400.
async fn get_exercises(
    State(state): State<AppState>,
    Query(query): Query<ExerciseQuery>,
) -> Result<Json<ExercisesResponse>, ApiError> {
    let profile = ExerciseProfile::parse(&query.age_group, &query.operation, &query.level)?;
    let count = query.count.unwrap_or(DEFAULT_EXERCISE_COUNT);
    let exercises = state.services.exercises().generate_batch(profile, count)?;
    Ok(Json(ExercisesResponse { exercises }))
}
