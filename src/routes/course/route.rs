use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
};
use sea_orm::TransactionTrait;
use uuid::Uuid;

use super::dto::{CourseQueryParams, CreateCourseRequest, UpdateCourseRequest};
use crate::entities::course;
use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::error::{AppError, AppResult};
use crate::extractor::{AppJson, AppPath, AppQuery, CurrentUser};
use crate::policy::{self, ADMIN_ONLY, STAFF};
use crate::repositories::{CourseFilter, CourseRepository, TeacherRepository};
use crate::routes::MessageResponse;
use crate::state::AppState;
use crate::utils::pagination::{Paged, Pagination};

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/course/create", post(create_course))
        .route("/course/update/{course_id}", put(update_course))
        .route("/course/delete/{course_id}", delete(delete_course))
        .route("/course/list", get(list_courses))
        .route("/course/teacher/{teacher_id}", get(list_teacher_courses))
        .route("/course/{course_id}", get(get_course))
}

async fn ensure_teacher_exists(state: &AppState, teacher_id: Option<Uuid>) -> AppResult<()> {
    if let Some(teacher_id) = teacher_id {
        TeacherRepository::new(&state.db)
            .find_by_id(teacher_id)
            .await?
            .ok_or_else(|| AppError::not_found("Teacher not found"))?;
    }
    Ok(())
}

#[utoipa::path(
    post,
    path = "/course/create",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = course::Model),
        (status = 400, description = "Course code already exists"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Teacher not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Course"
)]
pub async fn create_course(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppJson(payload): AppJson<CreateCourseRequest>,
) -> AppResult<(StatusCode, Json<course::Model>)> {
    policy::require_role(&caller, ADMIN_ONLY)?;

    let course_repo = CourseRepository::new(&state.db);
    if course_repo.find_by_code(&payload.code).await?.is_some() {
        return Err(AppError::already_exists("Course code already exists"));
    }
    ensure_teacher_exists(&state, payload.teacher_id).await?;

    let course = course_repo.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// Admins may change any field. The assigned teacher may change `content`
/// and nothing else.
#[utoipa::path(
    put,
    path = "/course/update/{course_id}",
    params(("course_id" = Uuid, Path, description = "Course id")),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated", body = course::Model),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Not allowed to edit this course"),
        (status = 404, description = "Course not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Course"
)]
pub async fn update_course(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(course_id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateCourseRequest>,
) -> AppResult<Json<course::Model>> {
    policy::require_role(&caller, STAFF)?;

    let course_repo = CourseRepository::new(&state.db);
    let course = course_repo
        .find_by_id(course_id)
        .await?
        .ok_or_else(|| AppError::not_found("Course not found"))?;

    if caller.role() == RoleEnum::Teacher {
        policy::require_owner(&caller, course.teacher_id)?;
        if payload.touches_metadata() {
            return Err(AppError::forbidden(
                "Teachers may only update course content",
            ));
        }
    }

    let updates = payload.into_update()?;
    if let Some(code) = &updates.code {
        if *code != course.code && course_repo.find_by_code(code).await?.is_some() {
            return Err(AppError::already_exists("Course code already exists"));
        }
    }
    if let Some(teacher_id) = updates.teacher_id {
        ensure_teacher_exists(&state, teacher_id).await?;
    }

    let updated = course_repo.update(course, updates).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/course/delete/{course_id}",
    params(("course_id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course deleted", body = MessageResponse),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Course not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Course"
)]
pub async fn delete_course(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(course_id): AppPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    policy::require_role(&caller, ADMIN_ONLY)?;

    let course_repo = CourseRepository::new(&state.db);
    course_repo
        .find_by_id(course_id)
        .await?
        .ok_or_else(|| AppError::not_found("Course not found"))?;
    let txn = state.db.begin().await?;
    CourseRepository::new(&txn).delete(course_id).await?;
    txn.commit().await?;

    Ok(Json(MessageResponse::new("Course deleted successfully")))
}

#[utoipa::path(
    get,
    path = "/course/list",
    params(CourseQueryParams),
    responses((status = 200, description = "Courses page", body = Paged<course::Model>)),
    tag = "Course"
)]
pub async fn list_courses(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<CourseQueryParams>,
) -> AppResult<Json<Paged<course::Model>>> {
    let pagination = Pagination::new(params.page, params.page_size)?;
    let filter = CourseFilter {
        year: params.year,
        semester: params.semester,
        code: params.code,
        title: params.title,
        course_type: params.course_type,
        sort_by: params.sort_by,
        order: params.order,
    };

    let (courses, total) = CourseRepository::new(&state.db)
        .find_all_with_pagination(filter, pagination)
        .await?;
    Ok(Json(Paged::new(courses, total, pagination)))
}

#[utoipa::path(
    get,
    path = "/course/{course_id}",
    params(("course_id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course", body = course::Model),
        (status = 404, description = "Course not found")
    ),
    tag = "Course"
)]
pub async fn get_course(
    State(state): State<AppState>,
    AppPath(course_id): AppPath<Uuid>,
) -> AppResult<Json<course::Model>> {
    let course = CourseRepository::new(&state.db)
        .find_by_id(course_id)
        .await?
        .ok_or_else(|| AppError::not_found("Course not found"))?;
    Ok(Json(course))
}

#[utoipa::path(
    get,
    path = "/course/teacher/{teacher_id}",
    params(("teacher_id" = Uuid, Path, description = "Teacher id")),
    responses((status = 200, description = "Courses taught by the teacher", body = Vec<course::Model>)),
    tag = "Course"
)]
pub async fn list_teacher_courses(
    State(state): State<AppState>,
    AppPath(teacher_id): AppPath<Uuid>,
) -> AppResult<Json<Vec<course::Model>>> {
    let courses = CourseRepository::new(&state.db)
        .find_by_teacher(teacher_id)
        .await?;
    Ok(Json(courses))
}
