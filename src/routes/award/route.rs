use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use super::dto::{AddAwardRequest, UpdateAwardRequest};
use crate::entities::award;
use crate::error::{AppError, AppResult};
use crate::extractor::{AppJson, AppPath, CurrentUser};
use crate::policy;
use crate::repositories::AwardRepository;
use crate::routes::MessageResponse;
use crate::state::AppState;

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/award/add", post(add_award))
        .route("/award/my", get(my_awards))
        .route("/award/update/{award_id}", put(update_award))
        .route("/award/delete/{award_id}", delete(delete_award))
        .route("/award/teacher/{teacher_id}", get(list_for_teacher))
}

/// Loads the row for a mutation by its owner. Missing rows are 404,
/// rows owned by another teacher are 403.
async fn load_owned(
    state: &AppState,
    caller: &CurrentUser,
    award_id: Uuid,
) -> AppResult<award::Model> {
    policy::require_teacher(caller)?;
    let row = AwardRepository::new(&state.db)
        .find_by_id(award_id)
        .await?
        .ok_or_else(|| AppError::not_found("Award not found"))?;
    policy::require_owner(caller, Some(row.teacher_id))?;
    Ok(row)
}

#[utoipa::path(
    post,
    path = "/award/add",
    request_body = AddAwardRequest,
    responses(
        (status = 201, description = "Award added", body = award::Model),
        (status = 403, description = "Teacher only")
    ),
    security(("bearer_auth" = [])),
    tag = "Award"
)]
pub async fn add_award(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppJson(payload): AppJson<AddAwardRequest>,
) -> AppResult<(StatusCode, Json<award::Model>)> {
    let teacher_id = policy::require_teacher(&caller)?;
    let row = AwardRepository::new(&state.db)
        .create(teacher_id, payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

#[utoipa::path(
    get,
    path = "/award/my",
    responses(
        (status = 200, description = "Caller's award list", body = Vec<award::Model>),
        (status = 403, description = "Teacher only")
    ),
    security(("bearer_auth" = [])),
    tag = "Award"
)]
pub async fn my_awards(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> AppResult<Json<Vec<award::Model>>> {
    let teacher_id = policy::require_teacher(&caller)?;
    let rows = AwardRepository::new(&state.db)
        .find_by_teacher(teacher_id)
        .await?;
    Ok(Json(rows))
}

#[utoipa::path(
    put,
    path = "/award/update/{award_id}",
    params(("award_id" = Uuid, Path, description = "Award id")),
    request_body = UpdateAwardRequest,
    responses(
        (status = 200, description = "Award updated", body = award::Model),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Award not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Award"
)]
pub async fn update_award(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(award_id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateAwardRequest>,
) -> AppResult<Json<award::Model>> {
    let row = load_owned(&state, &caller, award_id).await?;
    let updated = AwardRepository::new(&state.db)
        .update(row, payload.into_update()?)
        .await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/award/delete/{award_id}",
    params(("award_id" = Uuid, Path, description = "Award id")),
    responses(
        (status = 200, description = "Award deleted", body = MessageResponse),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Award not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Award"
)]
pub async fn delete_award(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(award_id): AppPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    let row = load_owned(&state, &caller, award_id).await?;
    AwardRepository::new(&state.db).delete(row.id).await?;
    Ok(Json(MessageResponse::new("Award deleted successfully")))
}

#[utoipa::path(
    get,
    path = "/award/teacher/{teacher_id}",
    params(("teacher_id" = Uuid, Path, description = "Teacher id")),
    responses((status = 200, description = "Award list for a teacher", body = Vec<award::Model>)),
    tag = "Award"
)]
pub async fn list_for_teacher(
    State(state): State<AppState>,
    AppPath(teacher_id): AppPath<Uuid>,
) -> AppResult<Json<Vec<award::Model>>> {
    let rows = AwardRepository::new(&state.db)
        .find_by_teacher(teacher_id)
        .await?;
    Ok(Json(rows))
}
