use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::coerce::{format_date, parse_date, parse_leading_int, truncate_float};
use super::{FromSqliteRow, User};

#[derive(Debug, Clone, Serialize)]
pub struct Exercise {
    pub id: String,
    pub user_id: String,
    pub description: String,
    pub duration: Option<i64>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl FromSqliteRow for Exercise {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            description: row.get("description")?,
            duration: row.get("duration")?,
            date: row.get("date")?,
            created_at: row.get("created_at")?,
        })
    }
}

/// An exercise ready to be stored, with every field already resolved.
#[derive(Debug, Clone)]
pub struct NewExercise {
    pub user_id: String,
    pub description: String,
    pub duration: Option<i64>,
    pub date: NaiveDate,
}

/// A number as it arrives from a JSON or form body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

impl LooseNumber {
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            LooseNumber::Int(value) => Some(*value),
            LooseNumber::Float(value) => truncate_float(*value),
            LooseNumber::Text(value) => parse_leading_int(value),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateExercise {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: Option<LooseNumber>,
    #[serde(default)]
    pub date: Option<String>,
}

impl CreateExercise {
    /// Resolves the body into a storable exercise. A missing or unparsable
    /// date falls back to `today`; a non-numeric duration is kept as `None`.
    pub fn into_new_exercise(self, user_id: &str, today: NaiveDate) -> NewExercise {
        NewExercise {
            user_id: user_id.to_string(),
            description: self.description,
            duration: self.duration.as_ref().and_then(LooseNumber::to_integer),
            date: self.date.as_deref().and_then(parse_date).unwrap_or(today),
        }
    }
}

/// The projected columns of an exercise returned by a log query.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseLogEntry {
    pub description: String,
    pub duration: Option<i64>,
    pub date: NaiveDate,
}

impl FromSqliteRow for ExerciseLogEntry {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            description: row.get("description")?,
            duration: row.get("duration")?,
            date: row.get("date")?,
        })
    }
}

/// Selection of a user's exercises. Both date bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub user_id: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<u32>,
}

impl ExerciseFilter {
    pub fn for_user(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            from: None,
            to: None,
            limit: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

impl LogQuery {
    /// Malformed bounds are dropped and any limit below one means no limit.
    pub fn into_filter(self, user_id: &str) -> ExerciseFilter {
        ExerciseFilter {
            user_id: user_id.to_string(),
            from: self.from.as_deref().and_then(parse_date),
            to: self.to.as_deref().and_then(parse_date),
            limit: self
                .limit
                .as_deref()
                .and_then(parse_leading_int)
                .filter(|limit| *limit > 0)
                .map(|limit| u32::try_from(limit).unwrap_or(u32::MAX)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddExerciseResponse {
    pub id: String,
    pub username: String,
    pub date: String,
    pub duration: Option<i64>,
    pub description: String,
}

impl AddExerciseResponse {
    pub fn new(user: User, exercise: Exercise) -> Self {
        Self {
            id: user.id,
            username: user.username,
            date: format_date(exercise.date),
            duration: exercise.duration,
            description: exercise.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LogEntryResponse {
    pub description: String,
    pub duration: Option<i64>,
    pub date: String,
}

impl From<ExerciseLogEntry> for LogEntryResponse {
    fn from(entry: ExerciseLogEntry) -> Self {
        Self {
            description: entry.description,
            duration: entry.duration,
            date: format_date(entry.date),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExerciseLogResponse {
    pub username: String,
    pub count: usize,
    pub id: String,
    pub log: Vec<LogEntryResponse>,
}

impl ExerciseLogResponse {
    pub fn new(user: User, entries: Vec<ExerciseLogEntry>) -> Self {
        let log: Vec<LogEntryResponse> = entries.into_iter().map(Into::into).collect();
        Self {
            username: user.username,
            count: log.len(),
            id: user.id,
            log,
        }
    }
}
