use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::db::DbPool;
use crate::version::GIT_VERSION;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: &'static str,
    git_version: &'static str,
}

/// Reports the build version and whether a pooled connection answers a query.
pub async fn health_check(State(pool): State<DbPool>) -> (StatusCode, Json<HealthResponse>) {
    let database_ok = tokio::task::spawn_blocking(move || {
        pool.get()
            .ok()
            .and_then(|conn| conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0)).ok())
            .is_some()
    })
    .await
    .unwrap_or(false);

    if !database_ok {
        tracing::warn!("Health check could not reach the database");
    }

    let (status, database) = if database_ok {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    (
        status,
        Json(HealthResponse {
            status: if database_ok { "ok" } else { "degraded" },
            database,
            git_version: GIT_VERSION,
        }),
    )
}
