use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use super::dto::{CreateMeetingRequest, MeetingQueryParams, UpdateMeetingRequest};
use crate::entities::meeting;
use crate::error::{AppError, AppResult};
use crate::extractor::{AppJson, AppPath, AppQuery, CurrentUser};
use crate::policy::{self, STAFF};
use crate::repositories::{MeetingFilter, MeetingRepository, MeetingSort};
use crate::routes::MessageResponse;
use crate::state::AppState;
use crate::utils::pagination::{Paged, Pagination};

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/meetings", post(create_meeting))
        .route("/meetings/filter", get(filter_meetings))
        .route(
            "/meetings/{meeting_id}",
            get(get_meeting).put(update_meeting).delete(delete_meeting),
        )
}

#[utoipa::path(
    post,
    path = "/meetings",
    request_body = CreateMeetingRequest,
    responses(
        (status = 201, description = "Meeting created", body = meeting::Model),
        (status = 403, description = "Admin or teacher only")
    ),
    security(("bearer_auth" = [])),
    tag = "Meetings"
)]
pub async fn create_meeting(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppJson(payload): AppJson<CreateMeetingRequest>,
) -> AppResult<(StatusCode, Json<meeting::Model>)> {
    policy::require_role(&caller, STAFF)?;
    let meeting = MeetingRepository::new(&state.db)
        .create(payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(meeting)))
}

#[utoipa::path(
    put,
    path = "/meetings/{meeting_id}",
    params(("meeting_id" = Uuid, Path, description = "Meeting id")),
    request_body = UpdateMeetingRequest,
    responses(
        (status = 200, description = "Meeting updated", body = meeting::Model),
        (status = 403, description = "Admin or teacher only"),
        (status = 404, description = "Meeting not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Meetings"
)]
pub async fn update_meeting(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(meeting_id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateMeetingRequest>,
) -> AppResult<Json<meeting::Model>> {
    policy::require_role(&caller, STAFF)?;

    let meeting_repo = MeetingRepository::new(&state.db);
    let meeting = meeting_repo
        .find_by_id(meeting_id)
        .await?
        .ok_or_else(|| AppError::not_found("Meeting not found."))?;

    let updated = meeting_repo.update(meeting, payload.into_update()?).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/meetings/{meeting_id}",
    params(("meeting_id" = Uuid, Path, description = "Meeting id")),
    responses(
        (status = 200, description = "Meeting deleted", body = MessageResponse),
        (status = 403, description = "Admin or teacher only"),
        (status = 404, description = "Meeting not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Meetings"
)]
pub async fn delete_meeting(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(meeting_id): AppPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    policy::require_role(&caller, STAFF)?;

    let meeting_repo = MeetingRepository::new(&state.db);
    meeting_repo
        .find_by_id(meeting_id)
        .await?
        .ok_or_else(|| AppError::not_found("Meeting not found."))?;
    meeting_repo.delete(meeting_id).await?;

    Ok(Json(MessageResponse::new("Meeting deleted successfully")))
}

#[utoipa::path(
    get,
    path = "/meetings/filter",
    params(MeetingQueryParams),
    responses(
        (status = 200, description = "Meetings page", body = Paged<meeting::Model>),
        (status = 400, description = "Invalid sort_by field"),
        (status = 403, description = "Admin or teacher only")
    ),
    security(("bearer_auth" = [])),
    tag = "Meetings"
)]
pub async fn filter_meetings(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppQuery(params): AppQuery<MeetingQueryParams>,
) -> AppResult<Json<Paged<meeting::Model>>> {
    policy::require_role(&caller, STAFF)?;
    let pagination = Pagination::new(params.page, params.page_size)?;

    let sort_by = params
        .sort_by
        .as_deref()
        .map(str::parse::<MeetingSort>)
        .transpose()
        .map_err(AppError::invalid_input)?;

    let filter = MeetingFilter {
        date: params.date,
        time: params.time,
        host_name: params.host_name,
        location: params.location,
        topic: params.topic,
        status: params.status,
        sort_by,
        order: params.order,
    };
    let (meetings, total) = MeetingRepository::new(&state.db)
        .find_all_with_pagination(filter, pagination)
        .await?;
    Ok(Json(Paged::new(meetings, total, pagination)))
}

#[utoipa::path(
    get,
    path = "/meetings/{meeting_id}",
    params(("meeting_id" = Uuid, Path, description = "Meeting id")),
    responses(
        (status = 200, description = "Meeting", body = meeting::Model),
        (status = 403, description = "Admin or teacher only"),
        (status = 404, description = "Meeting not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Meetings"
)]
pub async fn get_meeting(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(meeting_id): AppPath<Uuid>,
) -> AppResult<Json<meeting::Model>> {
    policy::require_role(&caller, STAFF)?;
    let meeting = MeetingRepository::new(&state.db)
        .find_by_id(meeting_id)
        .await?
        .ok_or_else(|| AppError::not_found("Meeting not found."))?;
    Ok(Json(meeting))
}
