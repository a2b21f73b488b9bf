use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use super::dto::{CreateExamRequest, ExamQueryParams, ExamResponse, UpdateExamRequest};
use crate::entities::exam_schedule;
use crate::error::{AppError, AppResult};
use crate::extractor::{AppJson, AppPath, AppQuery, CurrentUser};
use crate::policy::{self, ADMIN_ONLY};
use crate::repositories::{CourseRepository, ExamFilter, ExamRepository};
use crate::routes::MessageResponse;
use crate::services::booking::validate_interval;
use crate::state::AppState;
use crate::utils::pagination::{Paged, Pagination};

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/exam/create", post(create_exam))
        .route("/exam/update/{exam_id}", put(update_exam))
        .route("/exam/delete/{exam_id}", delete(delete_exam))
        .route("/exam/filter", get(filter_exams))
}

async fn ensure_course_exists(state: &AppState, course_id: Option<Uuid>) -> AppResult<()> {
    if let Some(course_id) = course_id {
        CourseRepository::new(&state.db)
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::not_found("Course not found"))?;
    }
    Ok(())
}

#[utoipa::path(
    post,
    path = "/exam/create",
    request_body = CreateExamRequest,
    responses(
        (status = 201, description = "Exam scheduled", body = exam_schedule::Model),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Course not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Exam"
)]
pub async fn create_exam(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppJson(payload): AppJson<CreateExamRequest>,
) -> AppResult<(StatusCode, Json<exam_schedule::Model>)> {
    policy::require_role(&caller, ADMIN_ONLY)?;
    validate_interval(payload.start_time, payload.end_time)?;
    ensure_course_exists(&state, payload.course_id).await?;

    let exam = ExamRepository::new(&state.db).create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(exam)))
}

#[utoipa::path(
    put,
    path = "/exam/update/{exam_id}",
    params(("exam_id" = Uuid, Path, description = "Exam id")),
    request_body = UpdateExamRequest,
    responses(
        (status = 200, description = "Exam updated", body = exam_schedule::Model),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Exam not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Exam"
)]
pub async fn update_exam(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(exam_id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateExamRequest>,
) -> AppResult<Json<exam_schedule::Model>> {
    policy::require_role(&caller, ADMIN_ONLY)?;

    let exam_repo = ExamRepository::new(&state.db);
    let exam = exam_repo
        .find_by_id(exam_id)
        .await?
        .ok_or_else(|| AppError::not_found("Exam not found."))?;

    let updates = payload.into_update()?;
    validate_interval(
        updates.start_time.unwrap_or(exam.start_time),
        updates.end_time.unwrap_or(exam.end_time),
    )?;
    if let Some(course_id) = updates.course_id {
        ensure_course_exists(&state, course_id).await?;
    }

    let updated = exam_repo.update(exam, updates).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/exam/delete/{exam_id}",
    params(("exam_id" = Uuid, Path, description = "Exam id")),
    responses(
        (status = 200, description = "Exam deleted", body = MessageResponse),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Exam not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Exam"
)]
pub async fn delete_exam(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(exam_id): AppPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    policy::require_role(&caller, ADMIN_ONLY)?;

    let exam_repo = ExamRepository::new(&state.db);
    exam_repo
        .find_by_id(exam_id)
        .await?
        .ok_or_else(|| AppError::not_found("Exam not found."))?;
    exam_repo.delete(exam_id).await?;

    Ok(Json(MessageResponse::new("Exam deleted successfully")))
}

/// Public exam timetable.
#[utoipa::path(
    get,
    path = "/exam/filter",
    params(ExamQueryParams),
    responses((status = 200, description = "Exams page", body = Paged<ExamResponse>)),
    tag = "Exam"
)]
pub async fn filter_exams(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ExamQueryParams>,
) -> AppResult<Json<Paged<ExamResponse>>> {
    let pagination = Pagination::new(params.page, params.page_size)?;
    let filter = ExamFilter {
        semester: params.semester,
        room_no: params.room_no,
        invigilator: params.invigilator,
        course_title: params.course_title,
    };

    let (rows, total) = ExamRepository::new(&state.db)
        .find_all_with_pagination(filter, pagination)
        .await?;
    let items = rows.into_iter().map(ExamResponse::from).collect();
    Ok(Json(Paged::new(items, total, pagination)))
}
