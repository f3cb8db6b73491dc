use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;

use crate::error::{AppError, Result};
use crate::middleware::FormOrJson;
use crate::models::{AddExerciseResponse, CreateExercise, ExerciseLogResponse, LogQuery, User};
use crate::repositories::{ExerciseRepository, UserRepository};

#[derive(Clone)]
pub struct ExercisesState {
    pub user_repo: UserRepository,
    pub exercise_repo: ExerciseRepository,
}

impl ExercisesState {
    async fn require_user(&self, id: &str) -> Result<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}

pub async fn add(
    State(state): State<ExercisesState>,
    Path(user_id): Path<String>,
    body: std::result::Result<FormOrJson<CreateExercise>, AppError>,
) -> Result<Json<AddExerciseResponse>> {
    // An unknown user is a 404 whatever the body looks like.
    let user = state.require_user(&user_id).await?;
    let FormOrJson(form) = body?;

    let new_exercise = form.into_new_exercise(&user.id, Utc::now().date_naive());
    let exercise = state.exercise_repo.create(new_exercise).await?;
    tracing::info!(user_id = %user.id, exercise_id = %exercise.id, "Added exercise");

    Ok(Json(AddExerciseResponse::new(user, exercise)))
}

pub async fn log(
    State(state): State<ExercisesState>,
    Path(user_id): Path<String>,
    Query(query): Query<LogQuery>,
) -> Result<Json<ExerciseLogResponse>> {
    let user = state.require_user(&user_id).await?;

    let filter = query.into_filter(&user.id);
    tracing::debug!(?filter, "Querying exercise log");
    let entries = state.exercise_repo.find_by_filter(&filter).await?;

    Ok(Json(ExerciseLogResponse::new(user, entries)))
}
