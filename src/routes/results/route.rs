use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use super::dto::{CreateResultRequest, UpdateResultRequest};
use crate::entities::result;
use crate::error::{AppError, AppResult};
use crate::extractor::{AppJson, AppPath, CurrentUser};
use crate::policy::{self, STAFF};
use crate::repositories::{ResultRepository, StudentRepository};
use crate::routes::MessageResponse;
use crate::state::AppState;

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/results/create", post(create_result))
        .route("/results/update/{result_id}", put(update_result))
        .route("/results/delete/{result_id}", delete(delete_result))
        .route("/results/my", get(my_results))
        .route("/results/student/{student_id}", get(student_results))
}

#[utoipa::path(
    post,
    path = "/results/create",
    request_body = CreateResultRequest,
    responses(
        (status = 201, description = "Result recorded", body = result::Model),
        (status = 403, description = "Admin or teacher only"),
        (status = 404, description = "Student not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Results"
)]
pub async fn create_result(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppJson(payload): AppJson<CreateResultRequest>,
) -> AppResult<(StatusCode, Json<result::Model>)> {
    policy::require_role(&caller, STAFF)?;

    StudentRepository::new(&state.db)
        .find_by_id(payload.student_id)
        .await?
        .ok_or_else(|| AppError::not_found("Student not found"))?;

    let row = ResultRepository::new(&state.db)
        .create(
            payload.student_id,
            payload.semester,
            payload.courses,
            payload.grade,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

#[utoipa::path(
    put,
    path = "/results/update/{result_id}",
    params(("result_id" = Uuid, Path, description = "Result id")),
    request_body = UpdateResultRequest,
    responses(
        (status = 200, description = "Result updated", body = result::Model),
        (status = 403, description = "Admin or teacher only"),
        (status = 404, description = "Result not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Results"
)]
pub async fn update_result(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(result_id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateResultRequest>,
) -> AppResult<Json<result::Model>> {
    policy::require_role(&caller, STAFF)?;

    let result_repo = ResultRepository::new(&state.db);
    let row = result_repo
        .find_by_id(result_id)
        .await?
        .ok_or_else(|| AppError::not_found("Result not found."))?;

    let updated = result_repo.update(row, payload.into_update()?).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/results/delete/{result_id}",
    params(("result_id" = Uuid, Path, description = "Result id")),
    responses(
        (status = 200, description = "Result deleted", body = MessageResponse),
        (status = 403, description = "Admin or teacher only"),
        (status = 404, description = "Result not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Results"
)]
pub async fn delete_result(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(result_id): AppPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    policy::require_role(&caller, STAFF)?;

    let result_repo = ResultRepository::new(&state.db);
    result_repo
        .find_by_id(result_id)
        .await?
        .ok_or_else(|| AppError::not_found("Result not found."))?;
    result_repo.delete(result_id).await?;

    Ok(Json(MessageResponse::new("Result deleted successfully")))
}

#[utoipa::path(
    get,
    path = "/results/my",
    responses(
        (status = 200, description = "Caller's results", body = Vec<result::Model>),
        (status = 403, description = "Student only")
    ),
    security(("bearer_auth" = [])),
    tag = "Results"
)]
pub async fn my_results(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> AppResult<Json<Vec<result::Model>>> {
    let student_id = policy::require_student(&caller)?;
    let rows = ResultRepository::new(&state.db)
        .find_by_student(student_id)
        .await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/results/student/{student_id}",
    params(("student_id" = Uuid, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student's results", body = Vec<result::Model>),
        (status = 403, description = "Admin or teacher only")
    ),
    security(("bearer_auth" = [])),
    tag = "Results"
)]
pub async fn student_results(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(student_id): AppPath<Uuid>,
) -> AppResult<Json<Vec<result::Model>>> {
    policy::require_role(&caller, STAFF)?;
    let rows = ResultRepository::new(&state.db)
        .find_by_student(student_id)
        .await?;
    Ok(Json(rows))
}
