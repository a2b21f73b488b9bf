use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use super::dto::{AddExperienceRequest, UpdateExperienceRequest};
use crate::entities::experience;
use crate::error::{AppError, AppResult};
use crate::extractor::{AppJson, AppPath, CurrentUser};
use crate::policy;
use crate::repositories::ExperienceRepository;
use crate::routes::MessageResponse;
use crate::state::AppState;

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/experience/add", post(add_experience))
        .route("/experience/my", get(my_experience))
        .route("/experience/update/{experience_id}", put(update_experience))
        .route("/experience/delete/{experience_id}", delete(delete_experience))
        .route("/experience/teacher/{teacher_id}", get(list_for_teacher))
}

async fn load_owned(
    state: &AppState,
    caller: &CurrentUser,
    experience_id: Uuid,
) -> AppResult<experience::Model> {
    policy::require_teacher(caller)?;
    let row = ExperienceRepository::new(&state.db)
        .find_by_id(experience_id)
        .await?
        .ok_or_else(|| AppError::not_found("Experience entry not found"))?;
    policy::require_owner(caller, Some(row.teacher_id))?;
    Ok(row)
}

#[utoipa::path(
    post,
    path = "/experience/add",
    request_body = AddExperienceRequest,
    responses(
        (status = 201, description = "Experience entry added", body = experience::Model),
        (status = 403, description = "Teacher only")
    ),
    security(("bearer_auth" = [])),
    tag = "Experience"
)]
pub async fn add_experience(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppJson(payload): AppJson<AddExperienceRequest>,
) -> AppResult<(StatusCode, Json<experience::Model>)> {
    let teacher_id = policy::require_teacher(&caller)?;
    let row = ExperienceRepository::new(&state.db)
        .create(teacher_id, payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

#[utoipa::path(
    get,
    path = "/experience/my",
    responses(
        (status = 200, description = "Caller's experience entry list", body = Vec<experience::Model>),
        (status = 403, description = "Teacher only")
    ),
    security(("bearer_auth" = [])),
    tag = "Experience"
)]
pub async fn my_experience(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> AppResult<Json<Vec<experience::Model>>> {
    let teacher_id = policy::require_teacher(&caller)?;
    let rows = ExperienceRepository::new(&state.db)
        .find_by_teacher(teacher_id)
        .await?;
    Ok(Json(rows))
}

#[utoipa::path(
    put,
    path = "/experience/update/{experience_id}",
    params(("experience_id" = Uuid, Path, description = "Experience entry id")),
    request_body = UpdateExperienceRequest,
    responses(
        (status = 200, description = "Experience entry updated", body = experience::Model),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Experience entry not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Experience"
)]
pub async fn update_experience(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(experience_id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateExperienceRequest>,
) -> AppResult<Json<experience::Model>> {
    let row = load_owned(&state, &caller, experience_id).await?;
    let updated = ExperienceRepository::new(&state.db)
        .update(row, payload.into_update()?)
        .await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/experience/delete/{experience_id}",
    params(("experience_id" = Uuid, Path, description = "Experience entry id")),
    responses(
        (status = 200, description = "Experience entry deleted", body = MessageResponse),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Experience entry not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Experience"
)]
pub async fn delete_experience(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(experience_id): AppPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    let row = load_owned(&state, &caller, experience_id).await?;
    ExperienceRepository::new(&state.db).delete(row.id).await?;
    Ok(Json(MessageResponse::new("Experience entry deleted successfully")))
}

#[utoipa::path(
    get,
    path = "/experience/teacher/{teacher_id}",
    params(("teacher_id" = Uuid, Path, description = "Teacher id")),
    responses((status = 200, description = "Experience entry list for a teacher", body = Vec<experience::Model>)),
    tag = "Experience"
)]
pub async fn list_for_teacher(
    State(state): State<AppState>,
    AppPath(teacher_id): AppPath<Uuid>,
) -> AppResult<Json<Vec<experience::Model>>> {
    let rows = ExperienceRepository::new(&state.db)
        .find_by_teacher(teacher_id)
        .await?;
    Ok(Json(rows))
}
