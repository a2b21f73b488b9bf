use axum::{
    Json, Router,
    extract::{Multipart, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use axum_extra::extract::WithRejection;
use uuid::Uuid;

use super::dto::{EventForm, EventQueryParams, EventRegistrationRequest, event_update, new_event};
use crate::entities::{event, event_registration};
use crate::error::{AppError, AppResult};
use crate::extractor::{AppJson, AppPath, AppQuery, CurrentUser};
use crate::policy::{self, ADMIN_ONLY};
use crate::repositories::EventRepository;
use crate::routes::MessageResponse;
use crate::state::AppState;
use crate::utils::pagination::{Paged, Pagination};
use crate::utils::upload::{read_multipart, save_upload};

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/event/create", post(create_event))
        .route("/event/update/{event_id}", put(update_event))
        .route("/event/delete/{event_id}", delete(delete_event))
        .route("/event/all", get(list_events))
        .route("/event/submit", post(submit_registration))
        .route("/event/{event_id}", get(get_event))
}

#[utoipa::path(
    post,
    path = "/event/create",
    request_body(content = EventForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Event created", body = event::Model),
        (status = 400, description = "Missing field or file type not allowed"),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = [])),
    tag = "Event"
)]
pub async fn create_event(
    State(state): State<AppState>,
    caller: CurrentUser,
    WithRejection(multipart, _): WithRejection<Multipart, AppError>,
) -> AppResult<(StatusCode, Json<event::Model>)> {
    policy::require_role(&caller, ADMIN_ONLY)?;

    let mut form = read_multipart(multipart).await?;
    let image = match form.take_file("image") {
        Some(file) => Some(save_upload(&state.config.upload_dir, &file).await?),
        None => None,
    };

    let event = EventRepository::new(&state.db)
        .create(new_event(&form, image)?)
        .await?;
    tracing::info!(event_id = %event.id, "event created");
    Ok((StatusCode::CREATED, Json(event)))
}

#[utoipa::path(
    put,
    path = "/event/update/{event_id}",
    params(("event_id" = Uuid, Path, description = "Event id")),
    request_body(content = EventForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Event updated", body = event::Model),
        (status = 400, description = "Invalid field or file type not allowed"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Event not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Event"
)]
pub async fn update_event(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(event_id): AppPath<Uuid>,
    WithRejection(multipart, _): WithRejection<Multipart, AppError>,
) -> AppResult<Json<event::Model>> {
    policy::require_role(&caller, ADMIN_ONLY)?;

    let event_repo = EventRepository::new(&state.db);
    let event = event_repo
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| AppError::not_found("Event not found."))?;

    let mut form = read_multipart(multipart).await?;
    let image = match form.take_file("image") {
        Some(file) => Some(save_upload(&state.config.upload_dir, &file).await?),
        None => None,
    };

    let updates = event_update(&form, image)?;
    let start_time = updates.start_time.unwrap_or(event.start_time);
    let end_time = updates.end_time.unwrap_or(event.end_time);
    if start_time >= end_time {
        return Err(AppError::invalid_input("start_time must be before end_time"));
    }

    let updated = event_repo.update(event, updates).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/event/delete/{event_id}",
    params(("event_id" = Uuid, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event deleted", body = MessageResponse),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Event not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Event"
)]
pub async fn delete_event(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(event_id): AppPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    policy::require_role(&caller, ADMIN_ONLY)?;

    let event_repo = EventRepository::new(&state.db);
    event_repo
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| AppError::not_found("Event not found."))?;
    event_repo.delete(event_id).await?;

    Ok(Json(MessageResponse::new("Event deleted successfully")))
}

#[utoipa::path(
    get,
    path = "/event/all",
    params(EventQueryParams),
    responses((status = 200, description = "Events page", body = Paged<event::Model>)),
    tag = "Event"
)]
pub async fn list_events(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<EventQueryParams>,
) -> AppResult<Json<Paged<event::Model>>> {
    let pagination = Pagination::new(params.page, params.page_size)?;
    let (events, total) = EventRepository::new(&state.db)
        .find_all_with_pagination(params.category, pagination)
        .await?;
    Ok(Json(Paged::new(events, total, pagination)))
}

#[utoipa::path(
    get,
    path = "/event/{event_id}",
    params(("event_id" = Uuid, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event", body = event::Model),
        (status = 404, description = "Event not found")
    ),
    tag = "Event"
)]
pub async fn get_event(
    State(state): State<AppState>,
    AppPath(event_id): AppPath<Uuid>,
) -> AppResult<Json<event::Model>> {
    let event = EventRepository::new(&state.db)
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| AppError::not_found("Event not found."))?;
    Ok(Json(event))
}

/// Public registration form for events.
#[utoipa::path(
    post,
    path = "/event/submit",
    request_body = EventRegistrationRequest,
    responses((status = 201, description = "Registration stored", body = event_registration::Model)),
    tag = "Event"
)]
pub async fn submit_registration(
    State(state): State<AppState>,
    AppJson(payload): AppJson<EventRegistrationRequest>,
) -> AppResult<(StatusCode, Json<event_registration::Model>)> {
    let registration = EventRepository::new(&state.db)
        .create_registration(payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(registration)))
}
