use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use super::dto::{
    TeacherDirectoryParams, TeacherProfileResponse, TeacherSignupRequest,
    UpdateMyTeacherProfileRequest,
};
use crate::entities::teacher;
use crate::error::{AppError, AppResult};
use crate::extractor::{AppJson, AppPath, AppQuery, CurrentUser};
use crate::policy;
use crate::repositories::{
    AwardRepository, EducationRepository, ExperienceRepository, PublicationRepository,
    TeacherFilter, TeacherRepository,
};
use crate::routes::MessageResponse;
use crate::services::signup;
use crate::state::AppState;
use crate::utils::pagination::{Paged, Pagination};

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/teacher/signup", post(teacher_signup))
        .route("/teacher/me", get(get_my_profile).put(update_my_profile))
        .route("/teacher/list", get(list_teachers))
        .route("/teacher/{teacher_id}", get(get_teacher_profile))
}

/// Creates the login account for a pre-approved teacher.
#[utoipa::path(
    post,
    path = "/teacher/signup",
    request_body = TeacherSignupRequest,
    responses(
        (status = 201, description = "Account created", body = MessageResponse),
        (status = 400, description = "Already signed up or email in use"),
        (status = 404, description = "Not pre-approved")
    ),
    tag = "Teacher"
)]
pub async fn teacher_signup(
    State(state): State<AppState>,
    AppJson(payload): AppJson<TeacherSignupRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    signup::teacher_signup(&state.db, state.config.bcrypt_cost, payload.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Teacher account created successfully")),
    ))
}

async fn load_own_profile(state: &AppState, caller: &CurrentUser) -> AppResult<teacher::Model> {
    let teacher_id = policy::require_teacher(caller)?;
    TeacherRepository::new(&state.db)
        .find_by_id(teacher_id)
        .await?
        .ok_or_else(|| AppError::not_found("Teacher profile not found"))
}

#[utoipa::path(
    get,
    path = "/teacher/me",
    responses(
        (status = 200, description = "Own profile", body = teacher::Model),
        (status = 403, description = "Teacher only")
    ),
    security(("bearer_auth" = [])),
    tag = "Teacher"
)]
pub async fn get_my_profile(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> AppResult<Json<teacher::Model>> {
    let teacher = load_own_profile(&state, &caller).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    put,
    path = "/teacher/me",
    request_body = UpdateMyTeacherProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = teacher::Model),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Teacher only")
    ),
    security(("bearer_auth" = [])),
    tag = "Teacher"
)]
pub async fn update_my_profile(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppJson(payload): AppJson<UpdateMyTeacherProfileRequest>,
) -> AppResult<Json<teacher::Model>> {
    let teacher = load_own_profile(&state, &caller).await?;
    let updated = TeacherRepository::new(&state.db)
        .update(teacher, payload.into_update()?)
        .await?;
    Ok(Json(updated))
}

/// Public teacher directory.
#[utoipa::path(
    get,
    path = "/teacher/list",
    params(TeacherDirectoryParams),
    responses((status = 200, description = "Teachers page", body = Paged<teacher::Model>)),
    tag = "Teacher"
)]
pub async fn list_teachers(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<TeacherDirectoryParams>,
) -> AppResult<Json<Paged<teacher::Model>>> {
    let pagination = Pagination::new(params.page, params.page_size)?;
    let filter = TeacherFilter {
        department: params.department,
        search: params.search,
    };
    let (teachers, total) = TeacherRepository::new(&state.db)
        .find_all_with_pagination(filter, pagination)
        .await?;
    Ok(Json(Paged::new(teachers, total, pagination)))
}

#[utoipa::path(
    get,
    path = "/teacher/{teacher_id}",
    params(("teacher_id" = Uuid, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "Public profile", body = TeacherProfileResponse),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teacher"
)]
pub async fn get_teacher_profile(
    State(state): State<AppState>,
    AppPath(teacher_id): AppPath<Uuid>,
) -> AppResult<Json<TeacherProfileResponse>> {
    let teacher = TeacherRepository::new(&state.db)
        .find_by_id(teacher_id)
        .await?
        .ok_or_else(|| AppError::not_found("Teacher not found"))?;

    let education = EducationRepository::new(&state.db)
        .find_by_teacher(teacher.id)
        .await?;
    let experience = ExperienceRepository::new(&state.db)
        .find_by_teacher(teacher.id)
        .await?;
    let awards = AwardRepository::new(&state.db)
        .find_by_teacher(teacher.id)
        .await?;
    let publications = PublicationRepository::new(&state.db)
        .find_by_teacher(teacher.id)
        .await?;

    Ok(Json(TeacherProfileResponse {
        teacher,
        education,
        experience,
        awards,
        publications,
    }))
}
