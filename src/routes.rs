use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::db::DbPool;
use crate::handlers::{exercises, health, users};

/// JSON API plus the health probe. Static assets are attached separately
/// with [`with_static_assets`].
pub fn create_router(
    users_state: users::UsersState,
    exercises_state: exercises::ExercisesState,
    pool: DbPool,
) -> Router {
    Router::new()
        // Users
        .route("/api/users", get(users::list).post(users::create))
        .with_state(users_state)
        // Exercises
        .route("/api/users/{id}/exercises", post(exercises::add))
        .route("/api/users/{id}/logs", get(exercises::log))
        .with_state(exercises_state)
        .route("/health", get(health::health_check))
        .with_state(pool)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Serves the landing page at `/` and falls back to files under `public_dir`.
pub fn with_static_assets(router: Router, public_dir: &Path, index_page: &Path) -> Router {
    router
        .route_service("/", ServeFile::new(index_page))
        .fallback_service(ServeDir::new(public_dir))
}
