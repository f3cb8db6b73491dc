#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use exercise_tracker::db::{create_memory_pool, DbPool};
use exercise_tracker::handlers::{exercises, users};
use exercise_tracker::migrations::run_migrations_for_tests;
use exercise_tracker::models::{Exercise, NewExercise, User};
use exercise_tracker::repositories::{ExerciseRepository, UserRepository};

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

pub fn create_test_app(pool: DbPool) -> Router {
    let user_repo = UserRepository::new(pool.clone());
    let exercise_repo = ExerciseRepository::new(pool.clone());

    let users_state = users::UsersState {
        user_repo: user_repo.clone(),
    };
    let exercises_state = exercises::ExercisesState {
        user_repo,
        exercise_repo,
    };

    exercise_tracker::routes::create_router(users_state, exercises_state, pool)
}

pub async fn create_test_user(pool: &DbPool, username: &str) -> User {
    let user_repo = UserRepository::new(pool.clone());
    user_repo.create(username).await.unwrap()
}

pub async fn create_test_exercise(
    pool: &DbPool,
    user_id: &str,
    description: &str,
    duration: i64,
    date: NaiveDate,
) -> Exercise {
    let exercise_repo = ExerciseRepository::new(pool.clone());
    exercise_repo
        .create(NewExercise {
            user_id: user_id.to_string(),
            description: description.to_string(),
            duration: Some(duration),
            date,
        })
        .await
        .unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    read_json(response).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    read_json(response).await
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}
