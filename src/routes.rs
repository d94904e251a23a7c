//! Router construction: student CRUD routes plus common operational
//! routes (health, readiness, version).

use crate::handlers::{
    delete_student_by_id, get_all_students, get_student_by_key, get_students_by_class,
    save_student, update_student,
};
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

/// Student CRUD routes. Mount under the API base path. `/:key` carries
/// both the by-id and by-name lookups (see handlers::get_student_by_key);
/// the static `/class/:id` segment never collides with it.
pub fn student_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(get_all_students).post(save_student).put(update_student),
        )
        .route("/class/:id", get(get_students_by_class))
        .route("/:key", get(get_student_by_key).delete(delete_student_by_id))
        .with_state(state)
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(
    State(state): State<AppState>,
) -> Result<Json<ReadyBody>, (axum::http::StatusCode, Json<ReadyBody>)> {
    if sqlx::query("SELECT 1").fetch_optional(&state.pool).await.is_err() {
        return Err((
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: Some("unavailable"),
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok",
        database: Some("ok"),
    }))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Common routes including readiness with DB check: GET /health,
/// GET /ready, GET /version.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
