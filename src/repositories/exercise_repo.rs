use chrono::Utc;
use rusqlite::types::Value;
use rusqlite::OptionalExtension;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{Exercise, ExerciseFilter, ExerciseLogEntry, FromSqliteRow, NewExercise};

#[derive(Clone)]
pub struct ExerciseRepository {
    pool: DbPool,
}

impl ExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Exercise>> {
        let pool = self.pool.clone();
        let id = id.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare("SELECT * FROM exercises WHERE id = ?")?;
            let result = stmt.query_row([&id], Exercise::from_row).optional()?;
            Ok(result)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Stores the exercise as given. The caller is responsible for checking
    /// that `user_id` refers to an existing user.
    pub async fn create(&self, new_exercise: NewExercise) -> Result<Exercise> {
        let exercise = Exercise {
            id: Uuid::new_v4().to_string(),
            user_id: new_exercise.user_id,
            description: new_exercise.description,
            duration: new_exercise.duration,
            date: new_exercise.date,
            created_at: Utc::now(),
        };
        let exercise_clone = exercise.clone();

        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<()> {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO exercises (id, user_id, description, duration, date, created_at)
                 VALUES (?, ?, ?, ?, ?, ?)",
                rusqlite::params![
                    exercise_clone.id,
                    exercise_clone.user_id,
                    exercise_clone.description,
                    exercise_clone.duration,
                    exercise_clone.date,
                    exercise_clone.created_at
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

        Ok(exercise)
    }

    /// Log entries matching `filter`, in insertion order.
    pub async fn find_by_filter(&self, filter: &ExerciseFilter) -> Result<Vec<ExerciseLogEntry>> {
        let (sql, params) = build_log_query(filter);

        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(&sql)?;
            let entries = stmt
                .query_map(rusqlite::params_from_iter(params), ExerciseLogEntry::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(entries)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}

fn build_log_query(filter: &ExerciseFilter) -> (String, Vec<Value>) {
    let mut sql =
        String::from("SELECT description, duration, date FROM exercises WHERE user_id = ?");
    let mut params = vec![Value::Text(filter.user_id.clone())];

    // Dates are stored as YYYY-MM-DD text, so string comparison is date order.
    if let Some(from) = filter.from {
        sql.push_str(" AND date >= ?");
        params.push(Value::Text(from.format("%Y-%m-%d").to_string()));
    }
    if let Some(to) = filter.to {
        sql.push_str(" AND date <= ?");
        params.push(Value::Text(to.format("%Y-%m-%d").to_string()));
    }

    sql.push_str(" ORDER BY rowid");

    if let Some(limit) = filter.limit {
        sql.push_str(" LIMIT ?");
        params.push(Value::Integer(i64::from(limit)));
    }

    (sql, params)
}
