//! Handlers for the `/students` resource.
//!
//! Search, sort, and filter are separate single-parameter operations
//! (the form submits one at a time); each shapes the store's read-all
//! snapshot through `roster_core::query` and echoes the request's own
//! parameters back in the response.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use roster_core::error::CoreError;
use roster_core::student::{Student, StudentDraft};
use roster_core::types::DbId;
use roster_core::{query, validation};
use roster_db::repositories::StudentRepo;

use crate::error::{AppError, AppResult};
use crate::response::{RejectedSubmission, StudentList};
use crate::state::AppState;

/// GET /api/v1/students -- full roster in insertion order.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<StudentList>> {
    let students = StudentRepo::list_all(&state.pool).await?;
    Ok(Json(StudentList::plain(students)))
}

/// GET /api/v1/students/{id} -- fetch one record (edit-form prefill).
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    Ok(Json(student))
}

/// POST /api/v1/students
///
/// Validation gate: a rejected draft is returned as a 400 with the
/// per-field errors and the entered values; the store is never called.
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<StudentDraft>,
) -> AppResult<Response> {
    let report = validation::validate(&draft);
    if !report.is_valid {
        return Ok(rejected(draft, report));
    }

    let student = StudentRepo::create(&state.pool, &draft.to_record()).await?;
    tracing::info!(id = student.id, "Student created");
    Ok((StatusCode::CREATED, Json(student)).into_response())
}

/// PUT /api/v1/students/{id}
///
/// Same validation gate as create. The target id comes from the path,
/// never from the body; a vanished row is a distinct 404.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(draft): Json<StudentDraft>,
) -> AppResult<Response> {
    let report = validation::validate(&draft);
    if !report.is_valid {
        return Ok(rejected(draft, report));
    }

    let student = StudentRepo::update(&state.pool, id, &draft.to_record())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    tracing::info!(id, "Student updated");
    Ok(Json(student).into_response())
}

/// DELETE /api/v1/students/{id} -- no validation, identified by id only.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = StudentRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Student deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Read-shaping operations
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub keyword: Option<String>,
}

/// GET /api/v1/students/search?keyword=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<StudentList>> {
    let students = StudentRepo::list_all(&state.pool).await?;
    let outcome = query::search(students, params.keyword.as_deref());
    Ok(Json(StudentList {
        keyword: Some(outcome.keyword),
        ..StudentList::plain(outcome.records)
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortParams {
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// GET /api/v1/students/sorted?sortBy=&order=
pub async fn sorted(
    State(state): State<AppState>,
    Query(params): Query<SortParams>,
) -> AppResult<Json<StudentList>> {
    let students = StudentRepo::list_all(&state.pool).await?;
    let outcome = query::sorted(students, params.sort_by.as_deref(), params.order.as_deref());
    Ok(Json(StudentList {
        sort_by: outcome.sort_by,
        order: outcome.order,
        ..StudentList::plain(outcome.records)
    }))
}

#[derive(Debug, Deserialize)]
pub struct FilterParams {
    pub major: Option<String>,
}

/// GET /api/v1/students/filter?major=
pub async fn filter_by_major(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> AppResult<Json<StudentList>> {
    let students = StudentRepo::list_all(&state.pool).await?;
    let outcome = query::filter_by_major(students, params.major.as_deref());
    Ok(Json(StudentList {
        selected_major: outcome.selected_major,
        ..StudentList::plain(outcome.records)
    }))
}

fn rejected(draft: StudentDraft, report: validation::ValidationResult) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(RejectedSubmission {
            errors: report.errors,
            student: draft,
        }),
    )
        .into_response()
}
