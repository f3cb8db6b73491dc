pub mod coerce;
pub mod exercise;
pub mod from_row;
pub mod user;

pub use exercise::{
    AddExerciseResponse, CreateExercise, Exercise, ExerciseFilter, ExerciseLogEntry,
    ExerciseLogResponse, LogEntryResponse, LogQuery, LooseNumber, NewExercise,
};
pub use from_row::FromSqliteRow;
pub use user::{CreateUser, User, UserSummary};
