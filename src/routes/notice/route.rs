use axum::{
    Json, Router,
    extract::{Multipart, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use axum_extra::extract::WithRejection;
use uuid::Uuid;

use super::dto::{NoticeForm, NoticeQueryParams, new_notice, notice_update};
use crate::entities::notice;
use crate::error::{AppError, AppResult};
use crate::extractor::{AppPath, AppQuery, CurrentUser};
use crate::policy::{self, ADMIN_ONLY};
use crate::repositories::NoticeRepository;
use crate::routes::MessageResponse;
use crate::state::AppState;
use crate::utils::pagination::{Paged, Pagination};
use crate::utils::upload::{read_multipart, save_upload};

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/notice/create", post(create_notice))
        .route("/notice/update/{notice_id}", put(update_notice))
        .route("/notice/delete/{notice_id}", delete(delete_notice))
        .route("/notice/all", get(list_notices))
        .route("/notice/{notice_id}", get(get_notice))
}

#[utoipa::path(
    post,
    path = "/notice/create",
    request_body(content = NoticeForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Notice created", body = notice::Model),
        (status = 400, description = "Missing field or file type not allowed"),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = [])),
    tag = "Notice"
)]
pub async fn create_notice(
    State(state): State<AppState>,
    caller: CurrentUser,
    WithRejection(multipart, _): WithRejection<Multipart, AppError>,
) -> AppResult<(StatusCode, Json<notice::Model>)> {
    policy::require_role(&caller, ADMIN_ONLY)?;

    let mut form = read_multipart(multipart).await?;
    let pdf_file = match form.take_file("pdf_file") {
        Some(file) => Some(save_upload(&state.config.upload_dir, &file).await?),
        None => None,
    };

    let notice = NoticeRepository::new(&state.db)
        .create(new_notice(&form, pdf_file)?)
        .await?;
    Ok((StatusCode::CREATED, Json(notice)))
}

#[utoipa::path(
    put,
    path = "/notice/update/{notice_id}",
    params(("notice_id" = Uuid, Path, description = "Notice id")),
    request_body(content = NoticeForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Notice updated", body = notice::Model),
        (status = 400, description = "Invalid field or file type not allowed"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Notice not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Notice"
)]
pub async fn update_notice(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(notice_id): AppPath<Uuid>,
    WithRejection(multipart, _): WithRejection<Multipart, AppError>,
) -> AppResult<Json<notice::Model>> {
    policy::require_role(&caller, ADMIN_ONLY)?;

    let notice_repo = NoticeRepository::new(&state.db);
    let notice = notice_repo
        .find_by_id(notice_id)
        .await?
        .ok_or_else(|| AppError::not_found("Notice not found"))?;

    let mut form = read_multipart(multipart).await?;
    let pdf_file = match form.take_file("pdf_file") {
        Some(file) => Some(save_upload(&state.config.upload_dir, &file).await?),
        None => None,
    };

    let updated = notice_repo
        .update(notice, notice_update(&form, pdf_file)?)
        .await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/notice/delete/{notice_id}",
    params(("notice_id" = Uuid, Path, description = "Notice id")),
    responses(
        (status = 200, description = "Notice deleted", body = MessageResponse),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Notice not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Notice"
)]
pub async fn delete_notice(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(notice_id): AppPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    policy::require_role(&caller, ADMIN_ONLY)?;

    let notice_repo = NoticeRepository::new(&state.db);
    notice_repo
        .find_by_id(notice_id)
        .await?
        .ok_or_else(|| AppError::not_found("Notice not found"))?;
    notice_repo.delete(notice_id).await?;

    Ok(Json(MessageResponse::new("Notice deleted successfully")))
}

/// Public notice board; archived notices are left out.
#[utoipa::path(
    get,
    path = "/notice/all",
    params(NoticeQueryParams),
    responses((status = 200, description = "Notices page", body = Paged<notice::Model>)),
    tag = "Notice"
)]
pub async fn list_notices(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<NoticeQueryParams>,
) -> AppResult<Json<Paged<notice::Model>>> {
    let pagination = Pagination::new(params.page, params.page_size)?;
    let (notices, total) = NoticeRepository::new(&state.db)
        .find_published(params.category, pagination)
        .await?;
    Ok(Json(Paged::new(notices, total, pagination)))
}

#[utoipa::path(
    get,
    path = "/notice/{notice_id}",
    params(("notice_id" = Uuid, Path, description = "Notice id")),
    responses(
        (status = 200, description = "Notice", body = notice::Model),
        (status = 404, description = "Notice not found")
    ),
    tag = "Notice"
)]
pub async fn get_notice(
    State(state): State<AppState>,
    AppPath(notice_id): AppPath<Uuid>,
) -> AppResult<Json<notice::Model>> {
    let notice = NoticeRepository::new(&state.db)
        .find_by_id(notice_id)
        .await?
        .ok_or_else(|| AppError::not_found("Notice not found"))?;
    Ok(Json(notice))
}
