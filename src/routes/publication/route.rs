use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use super::dto::{AddPublicationRequest, UpdatePublicationRequest};
use crate::entities::publication;
use crate::error::{AppError, AppResult};
use crate::extractor::{AppJson, AppPath, CurrentUser};
use crate::policy;
use crate::repositories::PublicationRepository;
use crate::routes::MessageResponse;
use crate::state::AppState;

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/publication/add", post(add_publication))
        .route("/publication/my", get(my_publications))
        .route("/publication/update/{publication_id}", put(update_publication))
        .route("/publication/delete/{publication_id}", delete(delete_publication))
        .route("/publication/teacher/{teacher_id}", get(list_for_teacher))
}

async fn load_owned(
    state: &AppState,
    caller: &CurrentUser,
    publication_id: Uuid,
) -> AppResult<publication::Model> {
    policy::require_teacher(caller)?;
    let row = PublicationRepository::new(&state.db)
        .find_by_id(publication_id)
        .await?
        .ok_or_else(|| AppError::not_found("Publication not found"))?;
    policy::require_owner(caller, Some(row.teacher_id))?;
    Ok(row)
}

#[utoipa::path(
    post,
    path = "/publication/add",
    request_body = AddPublicationRequest,
    responses(
        (status = 201, description = "Publication added", body = publication::Model),
        (status = 403, description = "Teacher only")
    ),
    security(("bearer_auth" = [])),
    tag = "Publication"
)]
pub async fn add_publication(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppJson(payload): AppJson<AddPublicationRequest>,
) -> AppResult<(StatusCode, Json<publication::Model>)> {
    let teacher_id = policy::require_teacher(&caller)?;
    let row = PublicationRepository::new(&state.db)
        .create(teacher_id, payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

#[utoipa::path(
    get,
    path = "/publication/my",
    responses(
        (status = 200, description = "Caller's publication list", body = Vec<publication::Model>),
        (status = 403, description = "Teacher only")
    ),
    security(("bearer_auth" = [])),
    tag = "Publication"
)]
pub async fn my_publications(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> AppResult<Json<Vec<publication::Model>>> {
    let teacher_id = policy::require_teacher(&caller)?;
    let rows = PublicationRepository::new(&state.db)
        .find_by_teacher(teacher_id)
        .await?;
    Ok(Json(rows))
}

#[utoipa::path(
    put,
    path = "/publication/update/{publication_id}",
    params(("publication_id" = Uuid, Path, description = "Publication id")),
    request_body = UpdatePublicationRequest,
    responses(
        (status = 200, description = "Publication updated", body = publication::Model),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Publication not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Publication"
)]
pub async fn update_publication(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(publication_id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdatePublicationRequest>,
) -> AppResult<Json<publication::Model>> {
    let row = load_owned(&state, &caller, publication_id).await?;
    let updated = PublicationRepository::new(&state.db)
        .update(row, payload.into_update()?)
        .await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/publication/delete/{publication_id}",
    params(("publication_id" = Uuid, Path, description = "Publication id")),
    responses(
        (status = 200, description = "Publication deleted", body = MessageResponse),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Publication not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Publication"
)]
pub async fn delete_publication(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(publication_id): AppPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    let row = load_owned(&state, &caller, publication_id).await?;
    PublicationRepository::new(&state.db).delete(row.id).await?;
    Ok(Json(MessageResponse::new("Publication deleted successfully")))
}

#[utoipa::path(
    get,
    path = "/publication/teacher/{teacher_id}",
    params(("teacher_id" = Uuid, Path, description = "Teacher id")),
    responses((status = 200, description = "Publication list for a teacher", body = Vec<publication::Model>)),
    tag = "Publication"
)]
pub async fn list_for_teacher(
    State(state): State<AppState>,
    AppPath(teacher_id): AppPath<Uuid>,
) -> AppResult<Json<Vec<publication::Model>>> {
    let rows = PublicationRepository::new(&state.db)
        .find_by_teacher(teacher_id)
        .await?;
    Ok(Json(rows))
}
