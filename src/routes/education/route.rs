use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use super::dto::{AddEducationRequest, UpdateEducationRequest};
use crate::entities::education;
use crate::error::{AppError, AppResult};
use crate::extractor::{AppJson, AppPath, CurrentUser};
use crate::policy;
use crate::repositories::EducationRepository;
use crate::routes::MessageResponse;
use crate::state::AppState;

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/education/add", post(add_education))
        .route("/education/my", get(my_education))
        .route("/education/update/{education_id}", put(update_education))
        .route("/education/delete/{education_id}", delete(delete_education))
        .route("/education/teacher/{teacher_id}", get(list_for_teacher))
}

/// Loads the row for a mutation by its owner. Missing rows are 404,
/// rows owned by another teacher are 403.
async fn load_owned(
    state: &AppState,
    caller: &CurrentUser,
    education_id: Uuid,
) -> AppResult<education::Model> {
    policy::require_teacher(caller)?;
    let row = EducationRepository::new(&state.db)
        .find_by_id(education_id)
        .await?
        .ok_or_else(|| AppError::not_found("Education entry not found"))?;
    policy::require_owner(caller, Some(row.teacher_id))?;
    Ok(row)
}

#[utoipa::path(
    post,
    path = "/education/add",
    request_body = AddEducationRequest,
    responses(
        (status = 201, description = "Education entry added", body = education::Model),
        (status = 403, description = "Teacher only")
    ),
    security(("bearer_auth" = [])),
    tag = "Education"
)]
pub async fn add_education(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppJson(payload): AppJson<AddEducationRequest>,
) -> AppResult<(StatusCode, Json<education::Model>)> {
    let teacher_id = policy::require_teacher(&caller)?;
    let row = EducationRepository::new(&state.db)
        .create(teacher_id, payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

#[utoipa::path(
    get,
    path = "/education/my",
    responses(
        (status = 200, description = "Caller's education entry list", body = Vec<education::Model>),
        (status = 403, description = "Teacher only")
    ),
    security(("bearer_auth" = [])),
    tag = "Education"
)]
pub async fn my_education(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> AppResult<Json<Vec<education::Model>>> {
    let teacher_id = policy::require_teacher(&caller)?;
    let rows = EducationRepository::new(&state.db)
        .find_by_teacher(teacher_id)
        .await?;
    Ok(Json(rows))
}

#[utoipa::path(
    put,
    path = "/education/update/{education_id}",
    params(("education_id" = Uuid, Path, description = "Education entry id")),
    request_body = UpdateEducationRequest,
    responses(
        (status = 200, description = "Education entry updated", body = education::Model),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Education entry not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Education"
)]
pub async fn update_education(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(education_id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateEducationRequest>,
) -> AppResult<Json<education::Model>> {
    let row = load_owned(&state, &caller, education_id).await?;
    let updated = EducationRepository::new(&state.db)
        .update(row, payload.into_update()?)
        .await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/education/delete/{education_id}",
    params(("education_id" = Uuid, Path, description = "Education entry id")),
    responses(
        (status = 200, description = "Education entry deleted", body = MessageResponse),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Education entry not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Education"
)]
pub async fn delete_education(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(education_id): AppPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    let row = load_owned(&state, &caller, education_id).await?;
    EducationRepository::new(&state.db).delete(row.id).await?;
    Ok(Json(MessageResponse::new("Education entry deleted successfully")))
}

#[utoipa::path(
    get,
    path = "/education/teacher/{teacher_id}",
    params(("teacher_id" = Uuid, Path, description = "Teacher id")),
    responses((status = 200, description = "Education entry list for a teacher", body = Vec<education::Model>)),
    tag = "Education"
)]
pub async fn list_for_teacher(
    State(state): State<AppState>,
    AppPath(teacher_id): AppPath<Uuid>,
) -> AppResult<Json<Vec<education::Model>>> {
    let rows = EducationRepository::new(&state.db)
        .find_by_teacher(teacher_id)
        .await?;
    Ok(Json(rows))
}
