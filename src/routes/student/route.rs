use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use super::dto::{StudentSignupRequest, UpdateMyStudentProfileRequest};
use crate::entities::student;
use crate::error::{AppError, AppResult};
use crate::extractor::{AppJson, CurrentUser};
use crate::policy;
use crate::repositories::StudentRepository;
use crate::routes::MessageResponse;
use crate::services::signup;
use crate::state::AppState;

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/student/signup", post(student_signup))
        .route("/student/me", get(get_my_profile).put(update_my_profile))
}

/// Creates the login account for a pre-approved student.
#[utoipa::path(
    post,
    path = "/student/signup",
    request_body = StudentSignupRequest,
    responses(
        (status = 201, description = "Account created", body = MessageResponse),
        (status = 400, description = "Already signed up or email in use"),
        (status = 404, description = "Not pre-approved")
    ),
    tag = "Student"
)]
pub async fn student_signup(
    State(state): State<AppState>,
    AppJson(payload): AppJson<StudentSignupRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    signup::student_signup(&state.db, state.config.bcrypt_cost, payload.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Student account created successfully")),
    ))
}

async fn load_own_profile(state: &AppState, caller: &CurrentUser) -> AppResult<student::Model> {
    let student_id = policy::require_student(caller)?;
    StudentRepository::new(&state.db)
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| AppError::not_found("Student profile not found"))
}

#[utoipa::path(
    get,
    path = "/student/me",
    responses(
        (status = 200, description = "Own profile", body = student::Model),
        (status = 403, description = "Student only")
    ),
    security(("bearer_auth" = [])),
    tag = "Student"
)]
pub async fn get_my_profile(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> AppResult<Json<student::Model>> {
    let student = load_own_profile(&state, &caller).await?;
    Ok(Json(student))
}

#[utoipa::path(
    put,
    path = "/student/me",
    request_body = UpdateMyStudentProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = student::Model),
        (status = 403, description = "Student only")
    ),
    security(("bearer_auth" = [])),
    tag = "Student"
)]
pub async fn update_my_profile(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppJson(payload): AppJson<UpdateMyStudentProfileRequest>,
) -> AppResult<Json<student::Model>> {
    let student = load_own_profile(&state, &caller).await?;
    let updated = StudentRepository::new(&state.db)
        .update(student, payload.into())
        .await?;
    Ok(Json(updated))
}
