//! HTTP surface for the Matemáticas LEGO backend.
//!
//! | method | path | body / query |
//! |---|---|---|
//! | GET | `/api/` | |
//! | POST | `/api/users` | `{name, age}` |
//! | GET | `/api/users/{user_id}` | |
//! | GET | `/api/users/{user_id}/progress` | |
//! | POST | `/api/progress` | `{user_id, age_group, operation, level, score, stars, completed_exercises}` |
//! | GET | `/api/exercises` | `age_group`, `operation`, `level`, `count` |
//!
//! `count` defaults to 10 and may not exceed
//! [`services::MAX_EXERCISES_PER_REQUEST`] (100); larger values are answered
//! with 400 and a `detail` naming the limit. Progress is stored for any
//! `user_id` string, registered or not, and listed back under the same id.

#![forbid(unsafe_code)]

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::ApiError;
pub use state::AppState;

/// Build the full application router.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::user_routes())
        .merge(routes::progress_routes())
        .merge(routes::exercise_routes())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
