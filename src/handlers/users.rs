use axum::{extract::State, Json};

use crate::error::{AppError, Result};
use crate::middleware::FormOrJson;
use crate::models::{CreateUser, UserSummary};
use crate::repositories::UserRepository;

#[derive(Clone)]
pub struct UsersState {
    pub user_repo: UserRepository,
}

pub async fn create(
    State(state): State<UsersState>,
    FormOrJson(form): FormOrJson<CreateUser>,
) -> Result<Json<UserSummary>> {
    if form.username.trim().is_empty() {
        return Err(AppError::InvalidInput("Username is required".to_string()));
    }

    let user = state.user_repo.create(&form.username).await?;
    tracing::info!(user_id = %user.id, "Created user");

    Ok(Json(user.into()))
}

pub async fn list(State(state): State<UsersState>) -> Result<Json<Vec<UserSummary>>> {
    let users = state.user_repo.find_all().await?;
    Ok(Json(users.into_iter().map(UserSummary::from).collect()))
}
