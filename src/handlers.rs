//! HTTP handlers: one per student endpoint, mapping service results to
//! status codes. Present value → 200; absent value or empty match for
//! the by-id, by-name, by-class, and update operations → 404.

use crate::error::AppError;
use crate::model::StudentRecord;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};

pub async fn get_all_students(State(state): State<AppState>) -> Result<Response, AppError> {
    let students = state.service.get_all_students().await?;
    Ok(Json(students).into_response())
}

/// GET /{key}: the source exposed by-id and by-name at the same path
/// template, distinguished only by parameter type. A numeric segment is
/// treated as an id lookup, anything else as a name lookup.
pub async fn get_student_by_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response, AppError> {
    if let Ok(id) = key.parse::<i64>() {
        let student = state
            .service
            .get_student_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(key))?;
        return Ok(Json(student).into_response());
    }
    let students = state.service.get_student_by_name(&key).await?;
    if students.is_empty() {
        return Err(AppError::NotFound(key));
    }
    Ok(Json(students).into_response())
}

pub async fn get_students_by_class(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let students = state.service.get_student_by_class(id).await?;
    if students.is_empty() {
        return Err(AppError::NotFound(format!("class {}", id)));
    }
    Ok(Json(students).into_response())
}

pub async fn save_student(
    State(state): State<AppState>,
    Json(record): Json<StudentRecord>,
) -> Result<Response, AppError> {
    let saved = state.service.save_student(record).await?;
    Ok(Json(saved).into_response())
}

pub async fn update_student(
    State(state): State<AppState>,
    Json(record): Json<StudentRecord>,
) -> Result<Response, AppError> {
    let id = record.id.unwrap_or_default();
    let updated = state
        .service
        .update_student(record)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("student {}", id)))?;
    Ok(Json(updated).into_response())
}

/// Delete is unconditional: the confirmation is returned whether or not
/// a row existed.
pub async fn delete_student_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    state.service.delete_student_by_id(id).await?;
    Ok("Deleted student successfully".into_response())
}
